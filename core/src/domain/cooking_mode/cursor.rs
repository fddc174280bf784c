/// Current-step index over a step sequence of fixed length.
///
/// Moving past either end is a no-op. With zero steps the cursor has no
/// position and every move is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepCursor {
    len: usize,
    index: usize,
}

impl StepCursor {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// `None` when there are no steps.
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.len == 0 || self.index + 1 == self.len
    }

    /// Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Returns whether the index moved.
    pub fn previous(&mut self) -> bool {
        if self.len == 0 || self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Points the cursor at the first step of a new sequence.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.index = 0;
    }
}
