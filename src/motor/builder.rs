//! Builder pattern for StepperDriver.

use core::fmt::Write;
use core::time::Duration;

use embedded_hal::digital::OutputPin;

use crate::config::{validate_lines, Mode, MotorConfig, SystemConfig, BASE_DWELL_US, STEPS_PER_REVOLUTION};
use crate::error::{ConfigError, Error, HardwareError, Result};
use crate::timing::MonotonicClock;

use super::driver::StepperDriver;
use super::lines::LineProvider;

/// Builder for creating StepperDriver instances from line identifiers.
///
/// Everything that can be wrong with the configuration is checked before any
/// line is claimed.
pub struct StepperDriverBuilder<C>
where
    C: MonotonicClock,
{
    mode: Option<core::result::Result<Mode, ConfigError>>,
    lines: Option<[u8; 4]>,
    clock: Option<C>,
    base_dwell: Duration,
    steps_per_revolution: u16,
    speed_percent: Option<i32>,
}

impl<C> Default for StepperDriverBuilder<C>
where
    C: MonotonicClock,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> StepperDriverBuilder<C>
where
    C: MonotonicClock,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            mode: None,
            lines: None,
            clock: None,
            base_dwell: Duration::from_micros(BASE_DWELL_US as u64),
            steps_per_revolution: STEPS_PER_REVOLUTION,
            speed_percent: None,
        }
    }

    /// Set the drive mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(Ok(mode));
        self
    }

    /// Set the drive mode from its numeric code (1, 2 or 3).
    ///
    /// An unknown code is reported by `build`.
    pub fn mode_code(mut self, code: u8) -> Self {
        self.mode = Some(Mode::from_code(code));
        self
    }

    /// Set the line identifiers for IN1..IN4.
    pub fn lines(mut self, lines: [u8; 4]) -> Self {
        self.lines = Some(lines);
        self
    }

    /// Set the clock polled by the step dwell.
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the dwell at 100% speed.
    pub fn base_dwell(mut self, dwell: Duration) -> Self {
        self.base_dwell = dwell;
        self
    }

    /// Set steps per output shaft revolution.
    pub fn steps_per_revolution(mut self, steps: u16) -> Self {
        self.steps_per_revolution = steps;
        self
    }

    /// Apply `set_speed(percent)` once the driver is built.
    pub fn speed_percent(mut self, percent: i32) -> Self {
        self.speed_percent = Some(percent);
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.mode = Some(Ok(config.mode));
        self.lines = Some(config.pins);
        self.base_dwell = config.base_dwell();
        self.steps_per_revolution = config.steps_per_revolution;
        self.speed_percent = Some(config.speed_percent);
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config
            .motor(motor_name)
            .ok_or_else(|| Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            )))?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Claim the lines from `provider`, de-energize them and build the driver.
    ///
    /// # Errors
    ///
    /// - `ConfigError` for a missing or unknown mode, missing or duplicate
    ///   lines, zero steps per revolution, or a missing clock. No line has
    ///   been touched.
    /// - `HardwareError` if a line cannot be claimed or driven low. Lines
    ///   claimed so far are already low and are released before returning.
    pub fn build<L>(self, provider: &mut L) -> Result<StepperDriver<L::Line, C>>
    where
        L: LineProvider,
    {
        let mode = self.mode.ok_or(ConfigError::MissingMode)??;
        let ids = self.lines.ok_or(ConfigError::MissingLines)?;
        validate_lines(&ids)?;
        if self.steps_per_revolution == 0 {
            return Err(ConfigError::InvalidStepsPerRevolution(0).into());
        }
        let clock = self.clock.ok_or(ConfigError::MissingClock)?;

        let lines = acquire_all(provider, ids)?;

        let mut driver = StepperDriver::from_parts(
            mode,
            lines,
            clock,
            self.base_dwell,
            self.steps_per_revolution,
        );
        if let Some(percent) = self.speed_percent {
            driver.set_speed(percent);
        }

        log::debug!(
            "stepper driver ready in {:?} mode on lines {:?}, dwell {:?}",
            mode,
            ids,
            driver.dwell()
        );
        Ok(driver)
    }
}

/// Claim all four lines in order. Lines claimed before a failure are
/// dropped, and so released, as the error propagates.
fn acquire_all<L>(provider: &mut L, ids: [u8; 4]) -> Result<[L::Line; 4]>
where
    L: LineProvider,
{
    let in1 = claim(provider, ids[0])?;
    let in2 = claim(provider, ids[1])?;
    let in3 = claim(provider, ids[2])?;
    let in4 = claim(provider, ids[3])?;
    Ok([in1, in2, in3, in4])
}

fn claim<L>(provider: &mut L, id: u8) -> Result<L::Line>
where
    L: LineProvider,
{
    let mut line = provider.acquire(id).map_err(|e| {
        let mut reason = heapless::String::<64>::new();
        let _ = write!(Truncating::new(&mut reason), "{:?}", e);
        log::debug!("could not acquire line {}: {}", id, reason);
        HardwareError::AcquisitionFailed { line: id, reason }
    })?;

    line.set_low()
        .map_err(|_| HardwareError::InitializationFailed { line: id })?;

    Ok(line)
}

/// Writer that keeps the longest prefix fitting in the buffer.
struct Truncating<'a, const N: usize> {
    out: &'a mut heapless::String<N>,
    full: bool,
}

impl<'a, const N: usize> Truncating<'a, N> {
    fn new(out: &'a mut heapless::String<N>) -> Self {
        Self { out, full: false }
    }
}

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for c in s.chars() {
            if self.full || self.out.push(c).is_err() {
                self.full = true;
                break;
            }
        }
        Ok(())
    }
}
