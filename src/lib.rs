//! Viewport-driven UI state for single-page layouts: scroll-spy section
//! tracking with sticky activation, scroll-derived chrome flags and eased
//! stat-counter animations, all behind host-injected capabilities.
//!
//! The crate owns no globals and schedules nothing itself. The host supplies
//! a [`Viewport`] (scroll offset + geometry measurement), a [`Clock`] and a
//! frame-scheduling primitive that drives [`NavEngine::on_frame`];
//! evaluation is deterministic for a given input.
#![forbid(unsafe_code)]

pub mod anim;
pub mod chrome;
pub mod clock;
pub mod config;
pub mod driver;
pub mod ease;
pub mod engine;
pub mod error;
pub mod registry;
pub mod tracker;

pub use anim::{CounterAnim, CounterSpec, MIN_DURATION_MS, Sample};
pub use chrome::{ChromeState, ChromeThresholds};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::EngineConfig;
pub use driver::{AnimHandle, AnimationDriver, Counter};
pub use ease::Ease;
pub use engine::{CounterId, NavEngine, Viewport};
pub use error::{ViewnavError, ViewnavResult};
pub use registry::{Measure, Section, SectionGeometry, SectionId, SectionRegistry};
pub use tracker::{ScrollTracker, match_section};
