//! Slide navigation state

use super::Rejected;

/// Position within the slide deck for one viewing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    current_index: usize,
    slide_count: usize,
}

impl PresentationState {
    /// Start a viewing at the first slide
    pub fn new(slide_count: usize) -> Self {
        Self {
            current_index: 0,
            slide_count,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based slide number for display
    pub fn current_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.slide_count
    }

    /// The previous control is disabled on the first slide
    pub fn previous_enabled(&self) -> bool {
        !self.is_first()
    }

    /// "Next" and "begin quiz" are mutually exclusive: begin quiz only on the last slide
    pub fn next_visible(&self) -> bool {
        !self.is_last()
    }

    pub fn begin_quiz_visible(&self) -> bool {
        self.is_last()
    }

    /// Jump to `index`, leaving the position unchanged when it is out of range
    pub fn go_to(&mut self, index: usize) -> Result<(), Rejected> {
        if index >= self.slide_count {
            return Err(Rejected::SlideOutOfRange(index));
        }
        self.current_index = index;
        Ok(())
    }

    pub fn previous(&mut self) -> Result<(), Rejected> {
        match self.current_index.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => Err(Rejected::SlideOutOfRange(0)),
        }
    }

    pub fn next(&mut self) -> Result<(), Rejected> {
        self.go_to(self.current_index + 1)
    }
}
