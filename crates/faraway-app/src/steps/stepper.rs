//! Saturating cursor over a fixed number of steps

use faraway_core::prelude::*;

/// Cursor in `1..=len` with an independent visibility flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedStepper {
    step: usize,
    len: usize,
    visible: bool,
}

impl BoundedStepper {
    /// Start at step 1, visible. `len` must be at least 1.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptySequence);
        }
        Ok(Self {
            step: 1,
            len,
            visible: true,
        })
    }

    /// Current step, 1-based
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn step_count(&self) -> usize {
        self.len
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_first(&self) -> bool {
        self.step == 1
    }

    pub fn is_last(&self) -> bool {
        self.step == self.len
    }

    /// Advance one step, stopping at the last. Returns whether the step moved.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        let before = self.step;
        self.step = (self.step + 1).min(self.len);
        self.step != before
    }

    /// Go back one step, stopping at 1. Returns whether the step moved.
    pub fn previous(&mut self) -> bool {
        let before = self.step;
        self.step = self.step.saturating_sub(1).max(1);
        self.step != before
    }

    /// Show or hide; the step is kept either way
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_one_visible() {
        let stepper = BoundedStepper::new(3).unwrap();
        assert_eq!(stepper.step(), 1);
        assert!(stepper.is_visible());
        assert!(stepper.is_first());
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(BoundedStepper::new(0), Err(Error::EmptySequence)));
    }

    #[test]
    fn test_mixed_sequence_stays_in_bounds() {
        let mut stepper = BoundedStepper::new(3).unwrap();

        stepper.previous();
        stepper.previous();
        stepper.next();
        stepper.next();
        stepper.next();
        stepper.next();

        assert_eq!(stepper.step(), 3);
        assert!(stepper.is_last());
    }

    #[test]
    fn test_saturation_is_idempotent() {
        let mut stepper = BoundedStepper::new(2).unwrap();

        assert!(!stepper.previous());
        assert_eq!(stepper.step(), 1);

        assert!(stepper.next());
        assert!(!stepper.next());
        assert!(!stepper.next());
        assert_eq!(stepper.step(), 2);
    }

    #[test]
    fn test_single_step_never_moves() {
        let mut stepper = BoundedStepper::new(1).unwrap();
        assert!(!stepper.next());
        assert!(!stepper.previous());
        assert_eq!(stepper.step(), 1);
    }

    #[test]
    fn test_every_sequence_of_length_eight_stays_in_bounds() {
        for pattern in 0u32..256 {
            let mut stepper = BoundedStepper::new(3).unwrap();
            for bit in 0..8 {
                if pattern & (1 << bit) != 0 {
                    stepper.next();
                } else {
                    stepper.previous();
                }
                assert!((1..=3).contains(&stepper.step()));
            }
        }
    }

    #[test]
    fn test_hiding_keeps_step() {
        let mut stepper = BoundedStepper::new(3).unwrap();
        stepper.next();

        assert!(!stepper.toggle_visibility());
        assert_eq!(stepper.step(), 2);

        assert!(stepper.toggle_visibility());
        assert_eq!(stepper.step(), 2);
    }
}
