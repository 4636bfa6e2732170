// File: crates/accum-core/src/mount.rs
// Summary: One-shot deferred "mounted" flag gating the entry animation, cancelled on teardown.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::trace;

/// Delay before the entry animation starts.
pub const DEFAULT_MOUNT_DELAY: Duration = Duration::from_millis(100);

const PENDING: u8 = 0;
const MOUNTED: u8 = 1;
const CANCELLED: u8 = 2;

/// A flag that flips to mounted once, `delay` after scheduling, unless cancelled first.
/// Dropping the gate cancels a pending flip. Mounted and cancelled are terminal and
/// mutually exclusive: whichever transition wins the compare-exchange sticks.
#[derive(Debug)]
pub struct MountGate {
    state: Arc<AtomicU8>,
}

impl MountGate {
    /// Schedule the flip with no callback.
    pub fn schedule(delay: Duration) -> Self {
        Self::schedule_with(delay, || {})
    }

    /// Schedule the flip; `on_mount` runs right after it, on the timer thread.
    /// It never runs when the gate was cancelled first.
    pub fn schedule_with<F>(delay: Duration, on_mount: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let state = Arc::new(AtomicU8::new(PENDING));
        let timer = Arc::clone(&state);
        thread::spawn(move || {
            thread::sleep(delay);
            match timer.compare_exchange(PENDING, MOUNTED, Ordering::AcqRel, Ordering::Acquire) {
                Ok(_) => {
                    trace!(?delay, "mount gate fired");
                    on_mount();
                }
                Err(_) => trace!("mount gate cancelled before firing"),
            }
        });
        Self { state }
    }

    /// A gate that is already open (no animation).
    pub fn mounted_now() -> Self {
        Self { state: Arc::new(AtomicU8::new(MOUNTED)) }
    }

    pub fn is_mounted(&self) -> bool {
        self.state.load(Ordering::Acquire) == MOUNTED
    }

    /// Prevent a pending flip. Returns whether this call cancelled it; no effect once mounted.
    pub fn cancel(&self) -> bool {
        self.state
            .compare_exchange(PENDING, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.load(Ordering::Acquire) == CANCELLED
    }
}

impl Drop for MountGate {
    fn drop(&mut self) {
        self.cancel();
    }
}
