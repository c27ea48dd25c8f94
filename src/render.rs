//! Rendering boundary
//!
//! The session core describes each screen as a plain payload; front ends
//! implement [`Renderer`] to paint them. Nothing here is read back by the core.

use std::time::Duration;

use crate::content::{Question, Slide};
use crate::session::{OptionMark, QuizResults, ReviewEntry};
use crate::{Result, ANSWER_COUNT};

/// What the welcome screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WelcomeView {
    pub slide_count: usize,
    pub question_count: usize,
}

/// What the presentation screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView<'a> {
    /// The whole deck; only `current_index` is visible at a time
    pub slides: &'a [Slide],
    pub current_index: usize,
    /// 1-based number of the visible slide
    pub current_number: usize,
    pub total: usize,
    pub previous_enabled: bool,
    pub next_visible: bool,
    pub begin_quiz_visible: bool,
}

impl<'a> SlideView<'a> {
    pub fn current_slide(&self) -> Option<&'a Slide> {
        self.slides.get(self.current_index)
    }
}

/// One answer option as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionView<'a> {
    pub text: &'a str,
    pub mark: OptionMark,
    pub enabled: bool,
}

/// Correctness indicator and explanation shown after an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback<'a> {
    pub correct: bool,
    pub explanation: &'a str,
}

impl Feedback<'_> {
    pub fn headline(&self) -> &'static str {
        if self.correct {
            "✓ Correct!"
        } else {
            "✗ Not quite..."
        }
    }
}

/// What the quiz screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView<'a> {
    pub question: &'a Question,
    /// 1-based number of the question on screen
    pub number: usize,
    pub total: usize,
    /// Fraction of the quiz reached, `number / total`
    pub progress: f64,
    pub options: [OptionView<'a>; ANSWER_COUNT],
    pub feedback: Option<Feedback<'a>>,
    pub score: usize,
}

impl QuestionView<'_> {
    /// Options are locked once the question has been answered
    pub fn is_answered(&self) -> bool {
        self.feedback.is_some()
    }
}

/// What the results screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultsView {
    pub results: QuizResults,
    /// Time taken by the attempt, when the front end tracked it
    pub elapsed: Option<Duration>,
}

/// What the review screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewView<'a> {
    pub entries: Vec<ReviewEntry<'a>>,
    pub results: QuizResults,
}

/// The single active screen and its payload
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView<'a> {
    Welcome(WelcomeView),
    Presentation(SlideView<'a>),
    Quiz(QuestionView<'a>),
    Results(ResultsView),
    Review(ReviewView<'a>),
}

impl ScreenView<'_> {
    /// Attach the attempt duration to a results payload
    pub fn with_elapsed(mut self, elapsed: Option<Duration>) -> Self {
        if let ScreenView::Results(view) = &mut self {
            view.elapsed = elapsed;
        }
        self
    }
}

/// Paints screen payloads for one UI technology
pub trait Renderer {
    fn render_welcome(&mut self, view: &WelcomeView) -> Result<()>;
    fn render_slide(&mut self, view: &SlideView<'_>) -> Result<()>;
    fn render_question(&mut self, view: &QuestionView<'_>) -> Result<()>;
    fn render_results(&mut self, view: &ResultsView) -> Result<()>;
    fn render_review(&mut self, view: &ReviewView<'_>) -> Result<()>;

    fn render(&mut self, view: &ScreenView<'_>) -> Result<()> {
        match view {
            ScreenView::Welcome(v) => self.render_welcome(v),
            ScreenView::Presentation(v) => self.render_slide(v),
            ScreenView::Quiz(v) => self.render_question(v),
            ScreenView::Results(v) => self.render_results(v),
            ScreenView::Review(v) => self.render_review(v),
        }
    }
}
