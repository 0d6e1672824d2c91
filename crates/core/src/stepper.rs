/// Cursor over a modality's ordered steps.
///
/// `current` is always a valid index into a list of `len` steps; navigation
/// clamps at both ends rather than wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialStepper {
    current: usize,
    len: usize,
}

impl TutorialStepper {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.len
    }

    /// Jumps to `index`. Returns false and leaves the cursor alone when
    /// `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        true
    }

    /// Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Returns whether the cursor moved.
    pub fn back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Rewinds to the first step of a list with `len` entries.
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }
}

impl Default for TutorialStepper {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_clamps_at_last_step() {
        let mut stepper = TutorialStepper::new(5);
        assert!(stepper.select(4));
        assert!(!stepper.next());
        assert_eq!(stepper.current(), 4);
    }

    #[test]
    fn back_clamps_at_zero() {
        let mut stepper = TutorialStepper::new(5);
        assert!(!stepper.back());
        assert_eq!(stepper.current(), 0);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut stepper = TutorialStepper::new(5);
        stepper.select(2);
        assert!(!stepper.select(5));
        assert_eq!(stepper.current(), 2);
    }

    #[test]
    fn walks_forward_and_back() {
        let mut stepper = TutorialStepper::new(3);
        assert!(stepper.next());
        assert!(stepper.next());
        assert!(stepper.is_last());
        assert!(stepper.back());
        assert_eq!(stepper.current(), 1);
    }

    #[test]
    fn reset_rewinds_to_zero() {
        let mut stepper = TutorialStepper::new(5);
        stepper.select(3);
        stepper.reset(4);
        assert_eq!(stepper.current(), 0);
        assert_eq!(stepper.len(), 4);
    }
}
