//! Single-flight guards for engine loads
//!
//! A load claims its flag before issuing any backend request. A second claim while
//! the first is still held fails immediately, so at most one load of a given forest
//! is in flight. The flag is released by dropping the guard, which covers success,
//! error propagation via `?`, and a caller dropping the future mid-await.

use std::sync::atomic::{AtomicBool, Ordering};

/// In-flight flag for one kind of load
#[derive(Debug, Default)]
pub struct InFlight {
    busy: AtomicBool,
}

impl InFlight {
    pub fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    /// Claim the flag, or return `None` if a load is already in flight
    pub fn try_claim(&self) -> Option<InFlightGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard { flag: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases its flag on drop
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    flag: &'a InFlight,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.busy.store(false, Ordering::Release);
    }
}
