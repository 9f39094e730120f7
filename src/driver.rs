use std::cell::Cell;
use std::rc::Rc;

use crate::anim::{CounterAnim, CounterSpec};

/// Opaque handle to one animation owned by an [`AnimationDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimHandle(u64);

struct Active {
    handle: AnimHandle,
    anim: CounterAnim,
    on_update: Box<dyn FnMut(f64)>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

/// Cooperative per-frame animation loop.
///
/// The driver never schedules itself: the host's frame primitive ("call me
/// back before the next paint") calls [`AnimationDriver::on_frame`] with the
/// current timestamp, and the return value says whether another frame is
/// wanted. Every animation ends in exactly one of two ways, natural
/// completion or [`AnimationDriver::cancel`], and in both the last value
/// delivered through `on_update` is exactly the spec's end value. A partial
/// run can never leave a stuck intermediate number behind.
#[derive(Default)]
pub struct AnimationDriver {
    next_handle: u64,
    active: Vec<Active>,
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin an animation at `now_ms`. The first `on_update` is delivered on
    /// the next [`AnimationDriver::on_frame`] call, mirroring a frame
    /// scheduler that fires before the following paint.
    pub fn start(
        &mut self,
        spec: CounterSpec,
        now_ms: f64,
        on_update: impl FnMut(f64) + 'static,
        on_complete: impl FnOnce() + 'static,
    ) -> AnimHandle {
        let handle = AnimHandle(self.next_handle);
        self.next_handle += 1;
        tracing::debug!(
            handle = handle.0,
            start = spec.start_value,
            end = spec.end_value,
            duration_ms = spec.duration_ms,
            "animation started"
        );
        self.active.push(Active {
            handle,
            anim: CounterAnim::new(spec, now_ms),
            on_update: Box::new(on_update),
            on_complete: Some(Box::new(on_complete)),
        });
        handle
    }

    /// Stop `handle` and deliver its end value through `on_update` exactly
    /// once. Cancelling an unknown or already-finished handle is a no-op, so
    /// the end value is never delivered twice.
    pub fn cancel(&mut self, handle: AnimHandle) {
        let Some(pos) = self.active.iter().position(|a| a.handle == handle) else {
            return;
        };
        let mut entry = self.active.remove(pos);
        tracing::debug!(handle = handle.0, "animation cancelled, converging to end value");
        (entry.on_update)(entry.anim.end_value());
    }

    /// Sample every active animation once at `now_ms`, in start order.
    /// Completed animations fire `on_complete` and are retired. Returns true
    /// while any animation still wants a next frame.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        let mut i = 0;
        while i < self.active.len() {
            let entry = &mut self.active[i];
            let sample = entry.anim.sample(now_ms);
            (entry.on_update)(sample.value);
            if sample.is_complete() {
                let entry = self.active.remove(i);
                tracing::trace!(handle = entry.handle.0, "animation completed");
                if let Some(done) = entry.on_complete {
                    done();
                }
            } else {
                i += 1;
            }
        }
        !self.active.is_empty()
    }

    pub fn is_running(&self, handle: AnimHandle) -> bool {
        self.active.iter().any(|a| a.handle == handle)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

/// Host-side animated stat counter.
///
/// Owns the play-once guard: the first visibility-enter starts the run,
/// every later one is a no-op even if the animation is still in flight. The
/// displayed value lives in a shared cell the driver writes through, so it
/// stays correct across completion and cancellation alike.
pub struct Counter {
    spec: CounterSpec,
    played_once: bool,
    value: Rc<Cell<f64>>,
    handle: Option<AnimHandle>,
}

impl Counter {
    pub fn new(spec: CounterSpec) -> Self {
        let value = Rc::new(Cell::new(spec.start_value));
        Self {
            spec,
            played_once: false,
            value,
            handle: None,
        }
    }

    /// React to the host element entering the viewport. Starts the animation
    /// on the first call and returns its handle; returns `None` once the
    /// guard is set.
    pub fn on_visibility_enter(
        &mut self,
        driver: &mut AnimationDriver,
        now_ms: f64,
    ) -> Option<AnimHandle> {
        if self.played_once {
            return None;
        }
        self.played_once = true;
        let cell = Rc::clone(&self.value);
        let handle = driver.start(self.spec.clone(), now_ms, move |v| cell.set(v), || {});
        self.handle = Some(handle);
        Some(handle)
    }

    /// Tear down a run in flight, e.g. when the host element unmounts. The
    /// driver converges the shared value to the end value on the way out.
    pub fn cancel(&mut self, driver: &mut AnimationDriver) {
        if let Some(handle) = self.handle.take() {
            driver.cancel(handle);
        }
    }

    pub fn value(&self) -> f64 {
        self.value.get()
    }

    /// Current value rendered with the spec's decimals and suffix.
    pub fn display(&self) -> String {
        self.spec.format(self.value())
    }

    pub fn has_played(&self) -> bool {
        self.played_once
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }
}
