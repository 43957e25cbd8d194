//! Monotonic clock sources for the dwell timer.

use core::time::Duration;

/// A clock that never runs backwards.
///
/// `now` returns the time elapsed since an arbitrary fixed epoch.
pub trait MonotonicClock {
    /// Current reading.
    fn now(&mut self) -> Duration;
}

/// Adapts a closure reading a hardware timer into a clock.
///
/// ```rust,ignore
/// let clock = ClockFn(|| Duration::from_micros(timer.counter() as u64));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ClockFn<F>(pub F);

impl<F> MonotonicClock for ClockFn<F>
where
    F: FnMut() -> Duration,
{
    #[inline]
    fn now(&mut self) -> Duration {
        (self.0)()
    }
}

/// Clock backed by `std::time::Instant`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    epoch: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock whose epoch is the moment of creation.
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl MonotonicClock for StdClock {
    #[inline]
    fn now(&mut self) -> Duration {
        self.epoch.elapsed()
    }
}
