//! Configuration module for unipolar-stepper.
//!
//! Provides the drive mode, unit types, and motor configurations loaded from
//! TOML files (with `std` feature) or built in code.

mod mode;
mod motor;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use mode::Mode;
pub use motor::{MotorConfig, BASE_DWELL_US, STEPS_PER_REVOLUTION};
pub use system::{SystemConfig, MAX_MOTORS};
pub use validation::validate_config;
pub(crate) use validation::validate_lines;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, Steps};
