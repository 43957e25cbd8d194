//! Step pacing.

mod clock;
mod dwell;

pub use clock::{ClockFn, MonotonicClock};
#[cfg(feature = "std")]
pub use clock::StdClock;
pub use dwell::DwellTimer;
