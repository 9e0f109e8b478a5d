//! Step-by-step message wizard

use faraway_core::prelude::*;

use super::stepper::BoundedStepper;

/// Text shown instead of the wizard while it is hidden
pub const CLOSED_MESSAGE: &str = "Steps are closed. Click the × button to reopen!";

/// A fixed list of messages walked one step at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepWizard {
    messages: Vec<String>,
    stepper: BoundedStepper,
}

impl StepWizard {
    pub fn new(messages: Vec<String>) -> Result<Self> {
        let stepper = BoundedStepper::new(messages.len())?;
        Ok(Self { messages, stepper })
    }

    pub fn step(&self) -> usize {
        self.stepper.step()
    }

    pub fn step_count(&self) -> usize {
        self.stepper.step_count()
    }

    pub fn is_visible(&self) -> bool {
        self.stepper.is_visible()
    }

    pub fn current_message(&self) -> &str {
        // step is always within 1..=messages.len()
        &self.messages[self.stepper.step() - 1]
    }

    /// "Step {n}: {message}"
    pub fn current_line(&self) -> String {
        format!("Step {}: {}", self.step(), self.current_message())
    }

    /// Whether step `n` has been reached (numbers up to the current step are lit)
    pub fn is_reached(&self, n: usize) -> bool {
        n >= 1 && n <= self.step()
    }

    /// What the host should display right now
    pub fn display(&self) -> String {
        if self.is_visible() {
            self.current_line()
        } else {
            CLOSED_MESSAGE.to_string()
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        let moved = self.stepper.next();
        debug!("Wizard next -> step {}", self.step());
        moved
    }

    pub fn previous(&mut self) -> bool {
        let moved = self.stepper.previous();
        debug!("Wizard previous -> step {}", self.step());
        moved
    }

    pub fn toggle_visibility(&mut self) -> bool {
        self.stepper.toggle_visibility()
    }
}
