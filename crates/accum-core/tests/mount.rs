// File: crates/accum-core/tests/mount.rs
// Purpose: Validate the one-shot mount gate: fires once after its delay, never after cancel/drop.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use accum_core::MountGate;

fn wait_until(deadline: Duration, f: impl Fn() -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if f() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    f()
}

#[test]
fn fires_after_delay_and_runs_callback() {
    let called = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&called);
    let gate = MountGate::schedule_with(Duration::from_millis(10), move || flag.store(true, Ordering::SeqCst));
    assert!(wait_until(Duration::from_secs(5), || gate.is_mounted()));
    assert!(wait_until(Duration::from_secs(5), || called.load(Ordering::SeqCst)));
    assert!(!gate.is_cancelled());
}

#[test]
fn cancel_before_delay_prevents_mount() {
    let gate = MountGate::schedule(Duration::from_millis(80));
    assert!(gate.cancel());
    assert!(!gate.cancel(), "second cancel is a no-op");
    std::thread::sleep(Duration::from_millis(250));
    assert!(!gate.is_mounted());
    assert!(gate.is_cancelled());
}

#[test]
fn dropping_the_gate_cancels_the_callback() {
    let called = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&called);
    let gate = MountGate::schedule_with(Duration::from_millis(80), move || flag.store(true, Ordering::SeqCst));
    drop(gate);
    std::thread::sleep(Duration::from_millis(250));
    assert!(!called.load(Ordering::SeqCst));
}

#[test]
fn mounted_now_is_open_immediately() {
    assert!(MountGate::mounted_now().is_mounted());
}

#[test]
fn cancel_after_mount_leaves_it_mounted() {
    let gate = MountGate::schedule(Duration::from_millis(1));
    assert!(wait_until(Duration::from_secs(5), || gate.is_mounted()));
    assert!(!gate.cancel());
    assert!(gate.is_mounted());
    assert!(!gate.is_cancelled());
}

#[test]
fn racing_cancel_yields_exactly_one_outcome() {
    for _ in 0..50 {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let gate = MountGate::schedule_with(Duration::ZERO, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let cancelled = gate.cancel();
        std::thread::sleep(Duration::from_millis(20));

        assert_eq!(cancelled, gate.is_cancelled());
        assert_ne!(gate.is_mounted(), gate.is_cancelled());
        let expected = if gate.is_mounted() { 1 } else { 0 };
        assert!(wait_until(Duration::from_secs(5), || calls.load(Ordering::SeqCst) == expected));
        assert_eq!(calls.load(Ordering::SeqCst), expected);
    }
}
