//! Busy-wait step dwell.
//!
//! Sleep primitives round sub-2 ms requests up unpredictably, which bends the
//! speed curve at the top end. The dwell instead polls a monotonic clock until
//! the deadline has passed.

use core::time::Duration;

use super::clock::MonotonicClock;

/// Minimum-delay primitive built on an active poll loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct DwellTimer<C> {
    clock: C,
}

impl<C: MonotonicClock> DwellTimer<C> {
    /// Create a timer polling `clock`.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Block until at least `duration` has elapsed since the call.
    ///
    /// A zero duration returns without reading the clock.
    pub fn wait(&mut self, duration: Duration) {
        if duration.is_zero() {
            return;
        }

        let start = self.clock.now();
        loop {
            let now = self.clock.now();
            if now.saturating_sub(start) >= duration {
                break;
            }
            core::hint::spin_loop();
        }
    }

    /// Borrow the underlying clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Give back the underlying clock.
    pub fn into_inner(self) -> C {
        self.clock
    }
}
