use crate::{
    ease::Ease,
    error::{ViewnavError, ViewnavResult},
};

/// Floor applied to non-positive durations so sampling never divides by zero.
/// A floored animation jumps to its end value on the first frame.
pub const MIN_DURATION_MS: f64 = 1.0;

/// Description of one counter animation: where it starts, where it must end,
/// how long it takes and how the value is displayed.
///
/// `end_value` may be below `start_value`; counters are allowed to count down.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CounterSpec {
    pub start_value: f64,
    pub end_value: f64,
    pub duration_ms: f64,
    #[serde(default)]
    pub ease: Ease,
    /// Fixed decimal places in the rendered value.
    #[serde(default)]
    pub decimals: u8,
    /// Text appended after the rendered value ("+", "%", ...).
    #[serde(default)]
    pub suffix: String,
}

impl CounterSpec {
    pub fn new(start_value: f64, end_value: f64, duration_ms: f64) -> Self {
        Self {
            start_value,
            end_value,
            duration_ms,
            ease: Ease::default(),
            decimals: 0,
            suffix: String::new(),
        }
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_display(mut self, decimals: u8, suffix: impl Into<String>) -> Self {
        self.decimals = decimals;
        self.suffix = suffix.into();
        self
    }

    pub fn validate(&self) -> ViewnavResult<()> {
        if !self.start_value.is_finite() || !self.end_value.is_finite() {
            return Err(ViewnavError::validation(
                "counter start and end values must be finite",
            ));
        }
        if !self.duration_ms.is_finite() {
            return Err(ViewnavError::validation("counter duration must be finite"));
        }
        Ok(())
    }

    /// Render `value` the way the host displays it: fixed decimals plus suffix.
    pub fn format(&self, value: f64) -> String {
        format!("{value:.prec$}{}", self.suffix, prec = usize::from(self.decimals))
    }
}

/// Progress and interpolated value of one animation at a sampled instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub value: f64,
    /// Fraction of the duration elapsed, clamped to `[0, 1]`.
    pub progress: f64,
}

impl Sample {
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// One running counter animation: a spec pinned to a start timestamp.
///
/// Sampling is pure; the same `(anim, now)` pair always yields the same
/// value, which keeps scripted playback and tests deterministic.
#[derive(Clone, Debug)]
pub struct CounterAnim {
    spec: CounterSpec,
    start_time_ms: f64,
    duration_ms: f64,
}

impl CounterAnim {
    /// Pin `spec` to `started_at_ms`. Non-positive durations are floored to
    /// [`MIN_DURATION_MS`] rather than rejected.
    pub fn new(spec: CounterSpec, started_at_ms: f64) -> Self {
        let duration_ms = if spec.duration_ms > 0.0 {
            spec.duration_ms
        } else {
            MIN_DURATION_MS
        };
        Self {
            spec,
            start_time_ms: started_at_ms,
            duration_ms,
        }
    }

    pub fn sample(&self, now_ms: f64) -> Sample {
        let elapsed = (now_ms - self.start_time_ms).max(0.0);
        let progress = (elapsed / self.duration_ms).min(1.0);
        // Snap to the exact end value at completion instead of trusting the
        // interpolation to land there.
        let value = if progress >= 1.0 {
            self.spec.end_value
        } else {
            let eased = self.spec.ease.apply(progress);
            self.spec.start_value + (self.spec.end_value - self.spec.start_value) * eased
        };
        Sample { value, progress }
    }

    pub fn end_value(&self) -> f64 {
        self.spec.end_value
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }
}
