//! Motion module for unipolar-stepper.
//!
//! Provides the coil phase tables and step direction.

mod direction;
mod phase;

pub use direction::Direction;
pub use phase::{Pattern, PhaseTable, DE_ENERGIZED};
