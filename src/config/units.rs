//! Unit types for physical quantities.
//!
//! Keeps angles and step counts apart at compile time.

use serde::Deserialize;

/// Angular displacement in degrees.
///
/// Used for the user-facing API. Converted to [`Steps`] with the motor's
/// steps per revolution.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Motor position or displacement in steps.
///
/// Uses i64 for unlimited range in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Steps(pub i64);

impl Steps {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Convert to degrees for a motor with `steps_per_revolution` steps.
    #[inline]
    pub fn to_degrees(self, steps_per_revolution: u16) -> Degrees {
        Degrees(self.0 as f32 * 360.0 / steps_per_revolution as f32)
    }

    /// Convert an angle to the nearest whole step count, sign preserved.
    ///
    /// Any fractional remainder is dropped after rounding.
    #[inline]
    pub fn from_degrees(degrees: Degrees, steps_per_revolution: u16) -> Self {
        let magnitude = libm::roundf(libm::fabsf(degrees.0) * steps_per_revolution as f32 / 360.0);
        let steps = magnitude as i64;
        if degrees.0 < 0.0 {
            Self(-steps)
        } else {
            Self(steps)
        }
    }
}
