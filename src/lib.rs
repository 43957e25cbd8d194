//! # unipolar-stepper
//!
//! Phase-sequencing driver for 4-wire unipolar stepper motors (28BYJ-48 on a
//! ULN2003 board) with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Three drive modes**: single phase, double phase and half step tables
//! - **embedded-hal 1.0**: Uses `OutputPin` for the four coil lines
//! - **Precise pacing**: Busy-wait dwell on a monotonic clock, not sleep
//! - **Speed dial**: Percentage mapped inversely onto the step dwell
//! - **Guaranteed release**: Coils are de-energized on drop
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use unipolar_stepper::{Degrees, Mode, StdClock, StepperDriverBuilder};
//!
//! let mut gpio = rppal::gpio::Gpio::new()?;
//! let mut motor = StepperDriverBuilder::new()
//!     .mode(Mode::HighTorque)
//!     .lines([2, 3, 4, 17])
//!     .clock(StdClock::new())
//!     .build(&mut gpio)?;
//!
//! motor.step_angle(Degrees(180.0))?;
//! motor.set_speed(25);
//! motor.step_angle(Degrees(-360.0))?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables `StdClock`, file I/O and TOML parsing
//! - `defmt`: Derives `defmt::Format` on public enums for embedded targets
//! - `rppal`: Implements `LineProvider` for Raspberry Pi GPIO

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;
pub mod timing;

// Re-exports for ergonomic API
pub use config::{Mode, MotorConfig, SystemConfig, validate_config};
pub use config::{BASE_DWELL_US, STEPS_PER_REVOLUTION};
pub use error::{Error, Result};
pub use motion::{Direction, PhaseTable};
pub use motor::{LineProvider, StepperDriver, StepperDriverBuilder};
pub use timing::{ClockFn, DwellTimer, MonotonicClock};

#[cfg(feature = "std")]
pub use timing::StdClock;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, Steps};
