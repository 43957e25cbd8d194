//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{MotorConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks every motor:
/// - Line identifiers are distinct, within the motor and across motors
/// - Steps per revolution is non-zero
/// - Base dwell is non-zero
///
/// Speed percent is not checked; out-of-range values are clamped when applied.
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (i, (_, motor)) in config.motors.iter().enumerate() {
        validate_motor(motor)?;

        for (_, other) in config.motors.iter().skip(i + 1) {
            if let Some(line) = motor.pins.iter().find(|l| other.pins.contains(l)) {
                return Err(Error::Config(ConfigError::DuplicateLine(*line)));
            }
        }
    }

    Ok(())
}

pub(crate) fn validate_motor(config: &MotorConfig) -> Result<()> {
    validate_lines(&config.pins)?;

    if config.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            config.steps_per_revolution,
        )));
    }

    if config.step_dwell_us == 0 {
        return Err(Error::Config(ConfigError::InvalidStepDwell(config.step_dwell_us)));
    }

    Ok(())
}

pub(crate) fn validate_lines(lines: &[u8; 4]) -> Result<()> {
    for (i, line) in lines.iter().enumerate() {
        if lines[i + 1..].contains(line) {
            return Err(Error::Config(ConfigError::DuplicateLine(*line)));
        }
    }
    Ok(())
}
