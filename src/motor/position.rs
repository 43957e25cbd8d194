//! Open-loop position counting.
//!
//! Counts commanded steps only; nothing is read back from the motor and
//! nothing survives a restart.

use crate::config::units::{Degrees, Steps};

/// Net commanded steps since construction or the last origin reset.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    /// Current position in steps (from origin)
    steps: Steps,
    /// Steps per output shaft revolution for conversions
    steps_per_revolution: u16,
}

impl Position {
    /// Create a counter at the origin.
    #[inline]
    pub fn new(steps_per_revolution: u16) -> Self {
        Self {
            steps: Steps::default(),
            steps_per_revolution,
        }
    }

    /// Get current position in steps.
    #[inline]
    pub fn steps(&self) -> Steps {
        self.steps
    }

    /// Get current position in degrees.
    #[inline]
    pub fn degrees(&self) -> Degrees {
        self.steps.to_degrees(self.steps_per_revolution)
    }

    /// Move by a number of steps.
    #[inline]
    pub fn move_steps(&mut self, delta: i64) {
        self.steps = Steps(self.steps.0 + delta);
    }

    /// Set current position as the new origin.
    #[inline]
    pub fn set_origin(&mut self) {
        self.steps = Steps::default();
    }
}
