//! Motor configuration from TOML.

use core::time::Duration;

use heapless::String;
use serde::Deserialize;

use super::mode::Mode;

/// Empirically tuned base dwell giving the highest reliable step rate.
pub const BASE_DWELL_US: u32 = 1900;

/// Steps per output shaft revolution for the 28BYJ-48 geared motor.
pub const STEPS_PER_REVOLUTION: u16 = 2048;

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Coil drive mode.
    pub mode: Mode,

    /// Output line identifiers for IN1..IN4.
    pub pins: [u8; 4],

    /// Steps per output shaft revolution.
    #[serde(default = "default_steps_per_revolution")]
    pub steps_per_revolution: u16,

    /// Dwell at 100% speed, in microseconds.
    #[serde(default = "default_step_dwell_us")]
    pub step_dwell_us: u32,

    /// Initial speed dial setting, applied like `set_speed`.
    #[serde(default = "default_speed_percent")]
    pub speed_percent: i32,
}

fn default_steps_per_revolution() -> u16 {
    STEPS_PER_REVOLUTION
}

fn default_step_dwell_us() -> u32 {
    BASE_DWELL_US
}

fn default_speed_percent() -> i32 {
    100
}

impl MotorConfig {
    /// Create a configuration with default tuning for the given mode and pins.
    pub fn new(name: &str, mode: Mode, pins: [u8; 4]) -> Self {
        Self {
            name: String::try_from(name).unwrap_or_default(),
            mode,
            pins,
            steps_per_revolution: STEPS_PER_REVOLUTION,
            step_dwell_us: BASE_DWELL_US,
            speed_percent: 100,
        }
    }

    /// Base dwell as a duration.
    pub fn base_dwell(&self) -> Duration {
        Duration::from_micros(self.step_dwell_us as u64)
    }
}
