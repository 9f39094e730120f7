//! Scripted playback of two stat counters, one of which is cancelled
//! mid-flight to show the converge-on-exit guarantee.

use viewnav::{AnimationDriver, Clock, CounterSpec, Ease, ManualClock};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut driver = AnimationDriver::new();
    let mut clock = ManualClock::new(0.0);

    let projects = CounterSpec::new(0.0, 15.0, 2000.0).with_display(0, "+");
    let satisfaction = CounterSpec::new(0.0, 99.9, 2000.0)
        .with_ease(Ease::OutCubic)
        .with_display(1, "%");

    let projects_fmt = projects.clone();
    let satisfaction_fmt = satisfaction.clone();
    let _projects_handle = driver.start(
        projects,
        clock.now_ms(),
        move |v| println!("  projects     -> {}", projects_fmt.format(v)),
        || println!("  projects     done"),
    );
    let satisfaction_handle = driver.start(
        satisfaction,
        clock.now_ms(),
        move |v| println!("  satisfaction -> {}", satisfaction_fmt.format(v)),
        || println!("  satisfaction done"),
    );

    let mut cancelled = false;
    loop {
        println!("t = {:>6.0}ms", clock.now_ms());
        let wants_frame = driver.on_frame(clock.now_ms());

        // The satisfaction widget unmounts halfway through; its last
        // delivered value must still be exactly 99.9%.
        if !cancelled && clock.now_ms() >= 1000.0 {
            println!("  (unmounting satisfaction widget)");
            driver.cancel(satisfaction_handle);
            cancelled = true;
        }

        if !wants_frame && cancelled {
            break;
        }
        clock.advance(250.0);
    }

    Ok(())
}
