//! Bounded step navigation

mod stepper;
mod wizard;

pub use stepper::BoundedStepper;
pub use wizard::{StepWizard, CLOSED_MESSAGE};
