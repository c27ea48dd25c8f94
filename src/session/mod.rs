//! Session core
//!
//! Presentation flow, quiz flow, results and the screen controller that
//! coordinates them. Nothing in here touches the terminal: front ends read
//! [`crate::render::ScreenView`] payloads and call the controller's handlers.

use std::fmt;

pub mod controller;
pub mod presentation;
pub mod quiz;
pub mod results;

pub use controller::{Screen, ScreenController};
pub use presentation::PresentationState;
pub use quiz::{AnswerRecord, OptionMark, QuizPhase, QuizState};
pub use results::{compute_results, review_entries, QuizResults, ReviewEntry, Tier};

/// Outcome of an input handler
pub type Handled<T = ()> = std::result::Result<T, Rejected>;

/// Why a handler refused an input
///
/// Rejections leave the session untouched. Front ends treat them as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// The action does not belong to the active screen
    WrongScreen(Screen),
    /// Slide index outside the deck
    SlideOutOfRange(usize),
    /// Answer index outside the four options
    OptionOutOfRange(usize),
    /// The current question already has an answer
    AlreadyAnswered,
    /// The current question has no answer yet
    NotAnswered,
    /// No question is being asked
    NoActiveQuestion,
    /// The quiz can only start from the last slide
    NotOnLastSlide,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejected::WrongScreen(screen) => write!(f, "not available on the {} screen", screen),
            Rejected::SlideOutOfRange(index) => write!(f, "slide {} is out of range", index),
            Rejected::OptionOutOfRange(index) => write!(f, "answer {} is out of range", index),
            Rejected::AlreadyAnswered => write!(f, "question already answered"),
            Rejected::NotAnswered => write!(f, "question not answered yet"),
            Rejected::NoActiveQuestion => write!(f, "no question is active"),
            Rejected::NotOnLastSlide => write!(f, "quiz starts from the last slide"),
        }
    }
}
