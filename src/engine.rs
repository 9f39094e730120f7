use std::fmt;

use crate::{
    anim::CounterSpec,
    chrome::ChromeState,
    config::EngineConfig,
    driver::{AnimationDriver, Counter},
    error::{ViewnavError, ViewnavResult},
    registry::{Measure, SectionId, SectionRegistry},
    tracker::ScrollTracker,
};

/// Host-side view of the page the engine reads from.
///
/// The engine never touches layout or globals itself; scroll position and
/// geometry arrive through this capability, measurement per section through
/// the [`Measure`] supertrait. Hosts hand the engine a fresh reference on
/// every event, so the capability can wrap whatever the UI layer owns.
pub trait Viewport: Measure {
    /// Current scroll offset in pixels from document top.
    fn scroll_offset(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn document_height(&self) -> f64;
}

/// Identifier of an animated counter registered with the engine.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CounterId(pub String);

impl CounterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CounterId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Facade tying the registry, tracker, chrome thresholds and animation
/// driver together behind one single-threaded type.
///
/// Event flow: the host forwards scroll events to
/// [`NavEngine::handle_scroll`], visibility-enter events to
/// [`NavEngine::handle_visibility_enter`], and drives
/// [`NavEngine::on_frame`] from its frame-scheduling primitive while
/// [`NavEngine::needs_frame`] holds. Sections may mount and unmount between
/// any two calls; every scroll evaluation starts from a fresh snapshot.
pub struct NavEngine {
    config: EngineConfig,
    registry: SectionRegistry,
    tracker: ScrollTracker,
    driver: AnimationDriver,
    counters: Vec<(CounterId, Counter)>,
    chrome: ChromeState,
}

impl NavEngine {
    pub fn new(config: EngineConfig) -> ViewnavResult<Self> {
        config.validate()?;
        let tracker = ScrollTracker::new(config.edge_offset);
        Ok(Self {
            config,
            registry: SectionRegistry::new(),
            tracker,
            driver: AnimationDriver::new(),
            counters: Vec::new(),
            chrome: ChromeState::default(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn register_section(&mut self, id: SectionId) {
        self.registry.register(id);
    }

    pub fn unregister_section(&mut self, id: &SectionId) {
        self.registry.unregister(id);
    }

    pub fn sections(&self) -> &[SectionId] {
        self.registry.ids()
    }

    /// Register an animated counter. The spec is validated up front; a
    /// duplicate id is refused rather than silently replacing a counter that
    /// may be mid-flight.
    pub fn add_counter(&mut self, id: CounterId, spec: CounterSpec) -> ViewnavResult<()> {
        spec.validate()?;
        if self.counters.iter().any(|(known, _)| *known == id) {
            return Err(ViewnavError::animation(format!(
                "counter '{id}' is already registered"
            )));
        }
        self.counters.push((id, Counter::new(spec)));
        Ok(())
    }

    /// Build a counter from the engine defaults: count from zero to `end`
    /// over the configured duration and ease.
    pub fn add_default_counter(&mut self, id: CounterId, end: f64) -> ViewnavResult<()> {
        let spec = CounterSpec::new(0.0, end, self.config.counter_duration_ms)
            .with_ease(self.config.counter_ease);
        self.add_counter(id, spec)
    }

    /// Remove a counter, converging any run in flight to its end value.
    pub fn remove_counter(&mut self, id: &CounterId) {
        if let Some(pos) = self.counters.iter().position(|(known, _)| known == id) {
            let (_, mut counter) = self.counters.remove(pos);
            counter.cancel(&mut self.driver);
        }
    }

    /// Handle one scroll event: snapshot the registered sections through the
    /// viewport, refresh the chrome flags and update the active section.
    /// Returns the active section after the sticky update.
    #[tracing::instrument(skip(self, viewport))]
    pub fn handle_scroll(&mut self, viewport: &impl Viewport) -> Option<&SectionId> {
        let sections = self.registry.snapshot(viewport);
        let offset = viewport.scroll_offset();
        self.chrome = self.config.chrome.evaluate(
            offset,
            viewport.viewport_height(),
            viewport.document_height(),
        );
        self.tracker.evaluate(offset, &sections)
    }

    /// Handle a visibility-enter event for `id` at `now_ms`. Returns true
    /// when an animation actually started; the play-once guard makes every
    /// later call a no-op, as is an unknown id.
    #[tracing::instrument(skip(self))]
    pub fn handle_visibility_enter(&mut self, id: &CounterId, now_ms: f64) -> bool {
        let Some((_, counter)) = self.counters.iter_mut().find(|(known, _)| known == id) else {
            return false;
        };
        counter.on_visibility_enter(&mut self.driver, now_ms).is_some()
    }

    /// Advance every running animation to `now_ms`. Returns true while the
    /// host should keep scheduling frames.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        self.driver.on_frame(now_ms)
    }

    pub fn needs_frame(&self) -> bool {
        self.driver.active_count() > 0
    }

    pub fn active_section(&self) -> Option<&SectionId> {
        self.tracker.active()
    }

    pub fn chrome(&self) -> ChromeState {
        self.chrome
    }

    pub fn counter_value(&self, id: &CounterId) -> Option<f64> {
        self.counter(id).map(Counter::value)
    }

    /// Counter value rendered with its configured decimals and suffix.
    pub fn counter_display(&self, id: &CounterId) -> Option<String> {
        self.counter(id).map(Counter::display)
    }

    fn counter(&self, id: &CounterId) -> Option<&Counter> {
        self.counters
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, c)| c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_config() {
        let mut cfg = EngineConfig::default();
        cfg.edge_offset = f64::NAN;
        assert!(NavEngine::new(cfg).is_err());
    }

    #[test]
    fn duplicate_counter_id_is_refused() {
        let mut engine = NavEngine::new(EngineConfig::default()).unwrap();
        engine.add_default_counter("projects".into(), 50.0).unwrap();
        let err = engine.add_default_counter("projects".into(), 60.0);
        assert!(err.is_err());
        // The original counter is untouched.
        assert_eq!(engine.counter_value(&"projects".into()), Some(0.0));
    }

    #[test]
    fn unknown_counter_ids_are_silent() {
        let mut engine = NavEngine::new(EngineConfig::default()).unwrap();
        assert!(!engine.handle_visibility_enter(&"missing".into(), 0.0));
        assert_eq!(engine.counter_value(&"missing".into()), None);
        engine.remove_counter(&"missing".into());
    }
}
