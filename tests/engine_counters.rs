//! Counter lifecycle through the engine: visibility triggers, frame pumping,
//! removal mid-flight.

use viewnav::{Clock, CounterSpec, Ease, EngineConfig, ManualClock, NavEngine};

fn pump(engine: &mut NavEngine, clock: &mut ManualClock, step_ms: f64) {
    while engine.on_frame(clock.now_ms()) {
        clock.advance(step_ms);
    }
}

#[test]
fn visibility_enter_plays_a_counter_exactly_once() {
    let mut engine = NavEngine::new(EngineConfig::default()).unwrap();
    let mut clock = ManualClock::new(0.0);
    engine.add_default_counter("projects".into(), 15.0).unwrap();

    assert!(engine.handle_visibility_enter(&"projects".into(), clock.now_ms()));
    assert!(engine.needs_frame());
    pump(&mut engine, &mut clock, 100.0);
    assert_eq!(engine.counter_value(&"projects".into()), Some(15.0));

    // Scrolling the stats back into view must not replay the count-up.
    assert!(!engine.handle_visibility_enter(&"projects".into(), clock.now_ms()));
    assert!(!engine.needs_frame());
    assert_eq!(engine.counter_value(&"projects".into()), Some(15.0));
}

#[test]
fn re_enter_while_running_does_not_restart() {
    let mut engine = NavEngine::new(EngineConfig::default()).unwrap();
    let mut clock = ManualClock::new(0.0);
    engine.add_default_counter("stars".into(), 100.0).unwrap();

    engine.handle_visibility_enter(&"stars".into(), clock.now_ms());
    clock.advance(500.0);
    engine.on_frame(clock.now_ms());
    let mid = engine.counter_value(&"stars".into()).unwrap();
    assert!(mid > 0.0 && mid < 100.0);

    // A second enter mid-flight neither resets nor doubles the animation.
    assert!(!engine.handle_visibility_enter(&"stars".into(), clock.now_ms()));
    engine.on_frame(clock.now_ms());
    assert_eq!(engine.counter_value(&"stars".into()), Some(mid));
}

#[test]
fn removal_mid_flight_converges_the_value() {
    let mut engine = NavEngine::new(EngineConfig::default()).unwrap();
    let mut clock = ManualClock::new(0.0);
    let spec = CounterSpec::new(0.0, 50.0, 2000.0).with_display(0, "+");
    engine.add_counter("clients".into(), spec).unwrap();

    engine.handle_visibility_enter(&"clients".into(), clock.now_ms());
    clock.advance(300.0);
    engine.on_frame(clock.now_ms());
    assert!(engine.counter_value(&"clients".into()).unwrap() < 50.0);

    // The stats block unmounts; the shared value still converges so any
    // observer left holding it reads the final number, not a partial one.
    engine.remove_counter(&"clients".into());
    assert_eq!(engine.counter_value(&"clients".into()), None);
    assert!(!engine.needs_frame());
}

#[test]
fn several_counters_share_one_frame_loop() {
    let mut engine = NavEngine::new(EngineConfig::default()).unwrap();
    let mut clock = ManualClock::new(0.0);
    engine
        .add_counter(
            "satisfaction".into(),
            CounterSpec::new(0.0, 99.9, 1500.0).with_display(1, "%"),
        )
        .unwrap();
    engine
        .add_counter(
            "years".into(),
            CounterSpec::new(0.0, 5.0, 1000.0).with_ease(Ease::Linear),
        )
        .unwrap();

    // The two stat widgets enter the viewport 250ms apart.
    engine.handle_visibility_enter(&"satisfaction".into(), clock.now_ms());
    clock.advance(250.0);
    engine.on_frame(clock.now_ms());
    engine.handle_visibility_enter(&"years".into(), clock.now_ms());

    pump(&mut engine, &mut clock, 100.0);

    assert_eq!(engine.counter_display(&"satisfaction".into()).as_deref(), Some("99.9%"));
    assert_eq!(engine.counter_display(&"years".into()).as_deref(), Some("5"));
}
