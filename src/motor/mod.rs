//! Motor module for unipolar-stepper.
//!
//! Provides the phase-sequencing driver, its builder, and line acquisition.

mod builder;
mod driver;
mod lines;
mod position;

pub use builder::StepperDriverBuilder;
pub use driver::StepperDriver;
pub use lines::LineProvider;
pub use position::Position;
