//! Bench configuration: every 28BYJ-48 motor wired to this controller.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::motor::MotorConfig;

/// Motors one configuration can name.
///
/// A 40-pin Raspberry Pi header exposes 26 general purpose lines, enough for
/// six ULN2003 boards at four lines each. Map capacity must be a power of two.
pub const MAX_MOTORS: usize = 8;

/// Root configuration structure from TOML, keyed by motor name.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named motor configurations, in file order.
    pub motors: FnvIndexMap<String<32>, MotorConfig, MAX_MOTORS>,
}

impl SystemConfig {
    /// Get a motor configuration by name.
    pub fn motor(&self, name: &str) -> Option<&MotorConfig> {
        self.motors
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all motor names.
    pub fn motor_names(&self) -> impl Iterator<Item = &str> {
        self.motors.keys().map(|s| s.as_str())
    }

    /// Find the first motor wired to `line`.
    pub fn motor_on_line(&self, line: u8) -> Option<&str> {
        self.motors
            .iter()
            .find(|(_, m)| m.pins.contains(&line))
            .map(|(k, _)| k.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            motors: FnvIndexMap::new(),
        }
    }
}
