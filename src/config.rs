use crate::{
    chrome::ChromeThresholds,
    ease::Ease,
    error::{ViewnavError, ViewnavResult},
};

/// Engine-wide configuration.
///
/// Defaults carry the constants observed across the deployed site variants:
/// a 58px fixed header, 2s counters and the 200/300px chrome thresholds.
/// One variant ships a 50px header; that deployment sets `edge_offset: 50.0`
/// instead of forking the code.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed-header allowance subtracted from section tops during matching.
    pub edge_offset: f64,
    pub chrome: ChromeThresholds,
    /// Duration used by counters built through the engine's default path.
    pub counter_duration_ms: f64,
    pub counter_ease: Ease,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            edge_offset: 58.0,
            chrome: ChromeThresholds::default(),
            counter_duration_ms: 2000.0,
            counter_ease: Ease::OutCubic,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> ViewnavResult<()> {
        if !self.edge_offset.is_finite() {
            return Err(ViewnavError::validation("edge_offset must be finite"));
        }
        if !self.counter_duration_ms.is_finite() {
            return Err(ViewnavError::validation(
                "counter_duration_ms must be finite",
            ));
        }
        let t = &self.chrome;
        if ![t.raise_header_at, t.show_buttons_at, t.bottom_slack]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ViewnavError::validation(
                "chrome thresholds must be finite",
            ));
        }
        Ok(())
    }
}
