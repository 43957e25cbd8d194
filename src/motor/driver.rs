//! Unipolar stepper driver.
//!
//! Generic over embedded-hal 1.0 output pins and a monotonic clock.

use core::time::Duration;

use embedded_hal::digital::OutputPin;

use crate::config::units::{Degrees, Steps};
use crate::config::{Mode, BASE_DWELL_US, STEPS_PER_REVOLUTION};
use crate::error::{MotorError, Result};
use crate::motion::{Direction, Pattern, PhaseTable, DE_ENERGIZED};
use crate::timing::{DwellTimer, MonotonicClock};

use super::position::Position;

/// Phase-sequencing driver for a 4-wire unipolar stepper.
///
/// Generic over:
/// - `P`: coil line type (must implement `OutputPin`), one per wire IN1..IN4
/// - `C`: clock polled by the step dwell (must implement `MonotonicClock`)
///
/// All four coils are de-energized when the driver is dropped.
pub struct StepperDriver<P, C>
where
    P: OutputPin,
    C: MonotonicClock,
{
    /// Coil lines IN1..IN4.
    lines: [P; 4],

    /// Drive mode selected at construction.
    mode: Mode,

    /// Phase table for `mode`.
    table: PhaseTable,

    /// Row written by the next step. Always `< table.len()`.
    phase_index: usize,

    /// Dwell at 100% speed.
    base_dwell: Duration,

    /// Current dwell after each step.
    dwell: Duration,

    /// Steps per output shaft revolution.
    steps_per_revolution: u16,

    /// Busy-wait step pacing.
    timer: DwellTimer<C>,

    /// Open-loop step counter.
    position: Position,
}

impl<P, C> StepperDriver<P, C>
where
    P: OutputPin,
    C: MonotonicClock,
{
    /// Create a driver over four already-claimed lines and de-energize them.
    ///
    /// Uses the default base dwell and steps per revolution. Use
    /// [`StepperDriverBuilder`](super::StepperDriverBuilder) to claim lines by
    /// identifier or to change the tuning.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PinError` if a line cannot be driven low. The
    /// lines are dropped, with another de-energize attempt, before returning.
    pub fn new(mode: Mode, lines: [P; 4], clock: C) -> Result<Self> {
        let mut driver = Self::from_parts(
            mode,
            lines,
            clock,
            Duration::from_micros(BASE_DWELL_US as u64),
            STEPS_PER_REVOLUTION,
        );
        driver.write_pattern(DE_ENERGIZED)?;
        log::debug!("stepper driver ready in {:?} mode", mode);
        Ok(driver)
    }

    /// Assemble a driver from lines that are already low.
    pub(crate) fn from_parts(
        mode: Mode,
        lines: [P; 4],
        clock: C,
        base_dwell: Duration,
        steps_per_revolution: u16,
    ) -> Self {
        Self {
            lines,
            mode,
            table: PhaseTable::for_mode(mode),
            phase_index: 0,
            base_dwell,
            dwell: base_dwell,
            steps_per_revolution,
            timer: DwellTimer::new(clock),
            position: Position::new(steps_per_revolution),
        }
    }

    /// Get the drive mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get the phase table in use.
    #[inline]
    pub fn table(&self) -> PhaseTable {
        self.table
    }

    /// Get the index of the row the next step will write.
    #[inline]
    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    /// Get the row the next step will write.
    #[inline]
    pub fn current_pattern(&self) -> Pattern {
        self.table.pattern(self.phase_index)
    }

    /// Get the dwell applied after each step.
    #[inline]
    pub fn dwell(&self) -> Duration {
        self.dwell
    }

    /// Get the dwell at 100% speed.
    #[inline]
    pub fn base_dwell(&self) -> Duration {
        self.base_dwell
    }

    /// Get steps per output shaft revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u16 {
        self.steps_per_revolution
    }

    /// Get net commanded steps since construction or the last `set_origin`.
    #[inline]
    pub fn position_steps(&self) -> Steps {
        self.position.steps()
    }

    /// Get net commanded rotation in degrees.
    #[inline]
    pub fn position_degrees(&self) -> Degrees {
        self.position.degrees()
    }

    /// Set the current position as the origin (zero).
    pub fn set_origin(&mut self) {
        self.position.set_origin();
    }

    /// Set the speed as a percentage of the fastest tuned rate.
    ///
    /// The dwell becomes `base_dwell * 100 / percent`, so the dial is
    /// inversely proportional rather than linear. Values above 100 are
    /// clamped to 100. Zero or negative values stop the motor by
    /// de-energizing the coils and leave the dwell unchanged. A dwell too
    /// long for `Duration` saturates.
    pub fn set_speed(&mut self, percent: i32) {
        if percent <= 0 {
            log::debug!("speed {}% requested, de-energizing", percent);
            self.shutdown();
            return;
        }

        let percent = percent.min(100) as u32;
        self.dwell = match self.base_dwell.checked_mul(100) {
            Some(scaled) => scaled / percent,
            None => (self.base_dwell / percent).saturating_mul(100),
        };
        log::debug!("speed {}%, dwell {:?}", percent, self.dwell);
    }

    /// Write the current row, move one position in `direction`, then dwell.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::PinError` if a coil write fails. The phase index
    /// is not advanced and the coils may hold a partial pattern.
    pub fn one_step(&mut self, direction: Direction) -> Result<()> {
        let pattern = self.table.pattern(self.phase_index);
        self.write_pattern(pattern)?;

        self.phase_index = direction.advance(self.phase_index, self.table.len());
        self.position.move_steps(direction.sign());

        self.timer.wait(self.dwell);
        Ok(())
    }

    /// Take `abs(count)` single steps, forward for `count >= 0`.
    ///
    /// The coils keep holding the last row afterwards.
    pub fn step_n(&mut self, count: i64) -> Result<()> {
        let direction = Direction::from_steps(count);
        for _ in 0..count.unsigned_abs() {
            self.one_step(direction)?;
        }
        Ok(())
    }

    /// Rotate by `angle`, rounded to the nearest whole step, then de-energize.
    ///
    /// Negative angles turn in reverse. The coils are de-energized whether or
    /// not the move completes.
    pub fn step_angle(&mut self, angle: Degrees) -> Result<()> {
        let steps = Steps::from_degrees(angle, self.steps_per_revolution);
        log::debug!("rotating {} degrees as {} steps", angle.value(), steps.value());

        let result = self.step_n(steps.value());
        self.shutdown();
        result
    }

    /// Drive all four coils low.
    ///
    /// Safe to call repeatedly and from cleanup paths: every line is
    /// attempted and write failures are logged, never returned.
    pub fn shutdown(&mut self) {
        for (coil, line) in self.lines.iter_mut().enumerate() {
            if let Err(e) = line.set_low() {
                log::warn!("failed to de-energize coil {}: {:?}", coil, e);
            }
        }
    }

    fn write_pattern(&mut self, pattern: Pattern) -> core::result::Result<(), MotorError> {
        log::trace!("phase {} -> {:?}", self.phase_index, pattern);
        for (coil, (line, on)) in self.lines.iter_mut().zip(pattern).enumerate() {
            let written = if on { line.set_high() } else { line.set_low() };
            written.map_err(|_| MotorError::PinError { coil })?;
        }
        Ok(())
    }
}

impl<P, C> Drop for StepperDriver<P, C>
where
    P: OutputPin,
    C: MonotonicClock,
{
    fn drop(&mut self) {
        self.shutdown();
    }
}
