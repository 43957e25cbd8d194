//! Drive mode selection.

use serde::Deserialize;

use crate::error::ConfigError;

/// Coil drive mode, fixed for the lifetime of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Alternates single and double phase, six entries per cycle.
    HalfStep,
    /// One coil energized at a time.
    LowTorque,
    /// Two adjacent coils energized at a time.
    HighTorque,
}

impl Mode {
    /// All drive modes.
    pub const ALL: [Mode; 3] = [Mode::HalfStep, Mode::LowTorque, Mode::HighTorque];

    /// Numeric code used by configuration files and legacy callers.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Mode::HalfStep => 1,
            Mode::LowTorque => 2,
            Mode::HighTorque => 3,
        }
    }

    /// Resolve a numeric mode code.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMode` for anything but 1, 2 or 3.
    pub fn from_code(code: u8) -> Result<Self, ConfigError> {
        match code {
            1 => Ok(Mode::HalfStep),
            2 => Ok(Mode::LowTorque),
            3 => Ok(Mode::HighTorque),
            other => Err(ConfigError::InvalidMode(other)),
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_code(value)
    }
}
