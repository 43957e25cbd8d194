//! Error types for unipolar-stepper.
//!
//! Provides unified error handling across configuration, line acquisition and
//! step execution.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all unipolar-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Output line acquisition or initialization error
    Hardware(HardwareError),
    /// Line write failure while stepping
    Motor(MotorError),
}

/// Configuration-related errors.
///
/// Always raised before any output line is touched.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Numeric mode code does not name a drive mode (valid: 1, 2, 3)
    InvalidMode(u8),
    /// No drive mode was supplied to the builder
    MissingMode,
    /// Fewer than four line identifiers were supplied to the builder
    MissingLines,
    /// No clock was supplied to the builder
    MissingClock,
    /// The same line identifier appears more than once
    DuplicateLine(u8),
    /// Steps per revolution must be > 0
    InvalidStepsPerRevolution(u16),
    /// Base step dwell must be > 0 microseconds
    InvalidStepDwell(u32),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Line acquisition errors raised while constructing a driver.
#[derive(Debug, Clone, PartialEq)]
pub enum HardwareError {
    /// The line could not be claimed from the provider
    AcquisitionFailed {
        /// Line identifier that failed
        line: u8,
        /// Provider error, rendered for reporting
        reason: heapless::String<64>,
    },
    /// The line was claimed but could not be driven low
    InitializationFailed {
        /// Line identifier that failed
        line: u8,
    },
}

/// Errors raised while driving the coils.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Writing a coil line failed
    PinError {
        /// Coil index (0..4) whose write failed
        coil: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Hardware(e) => write!(f, "Hardware error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidMode(code) => {
                write!(f, "Invalid mode selected: {}. Valid codes: 1 (half step), 2 (low torque), 3 (high torque)", code)
            }
            ConfigError::MissingMode => write!(f, "Drive mode is required"),
            ConfigError::MissingLines => write!(f, "Four output lines are required"),
            ConfigError::MissingClock => write!(f, "A clock is required"),
            ConfigError::DuplicateLine(line) => write!(f, "Line {} is assigned more than once", line),
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidStepDwell(v) => write!(f, "Invalid step dwell: {} us. Must be > 0", v),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareError::AcquisitionFailed { line, reason } => {
                write!(f, "Could not acquire line {}: {}", line, reason)
            }
            HardwareError::InitializationFailed { line } => {
                write!(f, "Could not de-energize line {} after acquiring it", line)
            }
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError { coil } => write!(f, "Write to coil {} failed", coil),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Error::Hardware(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for HardwareError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}
