//! Output line acquisition.

use core::fmt;

use embedded_hal::digital::OutputPin;

/// Source of digital output lines, addressed by a numeric identifier.
///
/// The driver claims four lines through this at construction. A line that is
/// dropped is released back to the provider.
pub trait LineProvider {
    /// Claimed line type.
    type Line: OutputPin;
    /// Acquisition failure, for example a line already claimed elsewhere.
    type Error: fmt::Debug;

    /// Claim the line with identifier `line`.
    fn acquire(&mut self, line: u8) -> Result<Self::Line, Self::Error>;
}

/// Raspberry Pi GPIO, addressed by BCM pin number.
#[cfg(feature = "rppal")]
impl LineProvider for rppal::gpio::Gpio {
    type Line = rppal::gpio::OutputPin;
    type Error = rppal::gpio::Error;

    fn acquire(&mut self, line: u8) -> Result<Self::Line, Self::Error> {
        Ok(self.get(line)?.into_output_low())
    }
}
