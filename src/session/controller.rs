//! Screen controller
//!
//! Owns the content tables and the per-session state, and is the only place
//! where the active screen changes. Every input handler checks that it
//! belongs to the active screen before touching any state.

use std::fmt;

use log::{debug, info};

use super::presentation::PresentationState;
use super::quiz::{AnswerRecord, QuizPhase, QuizState};
use super::results::{compute_results, review_entries, QuizResults};
use super::{Handled, Rejected};
use crate::content::ContentTables;
use crate::render::{
    Feedback, OptionView, QuestionView, ResultsView, ReviewView, ScreenView, SlideView,
    WelcomeView,
};
use crate::Result;

/// The five mutually exclusive screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Presentation,
    Quiz,
    Results,
    Review,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Presentation => "presentation",
            Screen::Quiz => "quiz",
            Screen::Results => "results",
            Screen::Review => "review",
        }
    }

    /// Whether the transition table allows moving from `self` to `next`
    pub fn can_transition_to(&self, next: Screen) -> bool {
        matches!(
            (self, next),
            (Screen::Welcome, Screen::Presentation)
                | (Screen::Presentation, Screen::Quiz)
                | (Screen::Quiz, Screen::Results)
                | (Screen::Results, Screen::Review)
                | (Screen::Review, Screen::Results)
                | (Screen::Presentation, Screen::Welcome)
                | (Screen::Quiz, Screen::Welcome)
                | (Screen::Results, Screen::Welcome)
                | (Screen::Review, Screen::Welcome)
        )
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Coordinates the presentation, the quiz and the results for one learner
#[derive(Debug, Clone)]
pub struct ScreenController {
    content: ContentTables,
    screen: Screen,
    presentation: Option<PresentationState>,
    quiz: QuizState,
}

impl ScreenController {
    /// Create a controller on the welcome screen; refuses malformed content
    pub fn new(content: ContentTables) -> Result<Self> {
        content.validate()?;
        let quiz = QuizState::new(content.question_count());
        Ok(Self {
            content,
            screen: Screen::Welcome,
            presentation: None,
            quiz,
        })
    }

    pub fn content(&self) -> &ContentTables {
        &self.content
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn presentation(&self) -> Option<&PresentationState> {
        self.presentation.as_ref()
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    fn require(&self, screen: Screen) -> Handled {
        if self.screen == screen {
            Ok(())
        } else {
            Err(Rejected::WrongScreen(self.screen))
        }
    }

    fn activate(&mut self, next: Screen) -> Handled {
        if !self.screen.can_transition_to(next) {
            return Err(Rejected::WrongScreen(self.screen));
        }
        info!("screen {} -> {}", self.screen, next);
        self.screen = next;
        Ok(())
    }

    fn presentation_mut(&mut self) -> Handled<&mut PresentationState> {
        self.require(Screen::Presentation)?;
        self.presentation
            .as_mut()
            .ok_or(Rejected::WrongScreen(Screen::Presentation))
    }

    /// Welcome -> Presentation, at the first slide
    pub fn start_presentation(&mut self) -> Handled {
        self.activate(Screen::Presentation)?;
        self.presentation = Some(PresentationState::new(self.content.slide_count()));
        Ok(())
    }

    pub fn go_to_slide(&mut self, index: usize) -> Handled {
        self.presentation_mut()?.go_to(index)
    }

    pub fn previous_slide(&mut self) -> Handled {
        self.presentation_mut()?.previous()
    }

    pub fn next_slide(&mut self) -> Handled {
        self.presentation_mut()?.next()
    }

    /// Presentation (last slide) -> Quiz, with a fresh attempt
    pub fn start_quiz(&mut self) -> Handled {
        if !self.presentation_mut()?.is_last() {
            return Err(Rejected::NotOnLastSlide);
        }
        self.activate(Screen::Quiz)?;
        self.presentation = None;
        self.quiz = QuizState::new(self.content.question_count());
        self.quiz.start();
        Ok(())
    }

    pub fn select_answer(&mut self, index: usize) -> Handled<AnswerRecord> {
        self.require(Screen::Quiz)?;
        self.quiz.select(&self.content.questions, index)
    }

    /// Next question, or Results after the last one
    pub fn advance(&mut self) -> Handled {
        self.require(Screen::Quiz)?;
        if self.quiz.advance()? == QuizPhase::Completed {
            let results = self.results();
            info!(
                "quiz completed: {}/{} ({}%)",
                results.score, results.total, results.percentage
            );
            self.activate(Screen::Results)?;
        }
        Ok(())
    }

    /// Results -> Review
    pub fn view_review(&mut self) -> Handled {
        self.require(Screen::Results)?;
        self.activate(Screen::Review)
    }

    /// Review -> Results
    pub fn finish_review(&mut self) -> Handled {
        self.require(Screen::Review)?;
        self.activate(Screen::Results)
    }

    /// Discard the session and return to the welcome screen
    pub fn restart(&mut self) -> Handled {
        self.activate(Screen::Welcome)?;
        self.presentation = None;
        self.quiz = QuizState::new(self.content.question_count());
        debug!("session state discarded");
        Ok(())
    }

    pub fn results(&self) -> QuizResults {
        compute_results(self.quiz.score(), self.content.question_count())
    }

    /// Payload for the active screen
    pub fn view(&self) -> ScreenView<'_> {
        match self.screen {
            Screen::Welcome => ScreenView::Welcome(self.welcome_view()),
            Screen::Presentation => ScreenView::Presentation(self.slide_view()),
            Screen::Quiz => ScreenView::Quiz(self.question_view()),
            Screen::Results => ScreenView::Results(ResultsView {
                results: self.results(),
                elapsed: None,
            }),
            Screen::Review => ScreenView::Review(ReviewView {
                entries: review_entries(self.quiz.answers(), &self.content.questions),
                results: self.results(),
            }),
        }
    }

    fn welcome_view(&self) -> WelcomeView {
        WelcomeView {
            slide_count: self.content.slide_count(),
            question_count: self.content.question_count(),
        }
    }

    fn slide_view(&self) -> SlideView<'_> {
        let state = self
            .presentation
            .clone()
            .unwrap_or_else(|| PresentationState::new(self.content.slide_count()));

        SlideView {
            slides: &self.content.slides,
            current_index: state.current_index(),
            current_number: state.current_number(),
            total: state.slide_count(),
            previous_enabled: state.previous_enabled(),
            next_visible: state.next_visible(),
            begin_quiz_visible: state.begin_quiz_visible(),
        }
    }

    fn question_view(&self) -> QuestionView<'_> {
        let total = self.content.question_count();
        let index = self.quiz.current_question_index().min(total.saturating_sub(1));
        let question = &self.content.questions[index];
        let marks = self.quiz.option_marks(question);
        let answer = self.quiz.current_answer();

        QuestionView {
            question,
            number: index + 1,
            total,
            progress: (index + 1) as f64 / total as f64,
            options: std::array::from_fn(|i| OptionView {
                text: &question.answers[i],
                mark: marks[i],
                enabled: answer.is_none(),
            }),
            feedback: answer.map(|record| Feedback {
                correct: record.correct,
                explanation: &question.explanation,
            }),
            score: self.quiz.score(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::OptionMark;

    fn controller() -> ScreenController {
        ScreenController::new(ContentTables::builtin()).unwrap()
    }

    fn to_quiz(controller: &mut ScreenController) {
        controller.start_presentation().unwrap();
        let last = controller.content().slide_count() - 1;
        controller.go_to_slide(last).unwrap();
        controller.start_quiz().unwrap();
    }

    #[test]
    fn test_starts_on_welcome() {
        let c = controller();
        assert_eq!(c.screen(), Screen::Welcome);
        assert!(c.presentation().is_none());
        assert_eq!(c.quiz().phase(), QuizPhase::NotStarted);
    }

    #[test]
    fn test_handlers_reject_wrong_screen() {
        let mut c = controller();
        assert_eq!(c.next_slide(), Err(Rejected::WrongScreen(Screen::Welcome)));
        assert_eq!(c.select_answer(0), Err(Rejected::WrongScreen(Screen::Welcome)));
        assert_eq!(c.advance(), Err(Rejected::WrongScreen(Screen::Welcome)));
        assert_eq!(c.view_review(), Err(Rejected::WrongScreen(Screen::Welcome)));
        assert_eq!(c.restart(), Err(Rejected::WrongScreen(Screen::Welcome)));
        assert_eq!(c.screen(), Screen::Welcome);
    }

    #[test]
    fn test_presentation_view_flags() {
        let mut c = controller();
        c.start_presentation().unwrap();

        match c.view() {
            ScreenView::Presentation(view) => {
                assert_eq!(view.current_number, 1);
                assert_eq!(view.total, 15);
                assert!(!view.previous_enabled);
                assert!(view.next_visible);
                assert!(!view.begin_quiz_visible);
                assert_eq!(view.current_slide().unwrap().title, "What is Python?");
            }
            other => panic!("unexpected view {:?}", other),
        }

        c.go_to_slide(14).unwrap();
        match c.view() {
            ScreenView::Presentation(view) => {
                assert_eq!(view.current_number, 15);
                assert!(view.previous_enabled);
                assert!(!view.next_visible);
                assert!(view.begin_quiz_visible);
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_quiz_requires_last_slide() {
        let mut c = controller();
        c.start_presentation().unwrap();
        assert_eq!(c.start_quiz(), Err(Rejected::NotOnLastSlide));
        assert_eq!(c.screen(), Screen::Presentation);
    }

    #[test]
    fn test_presentation_resets_on_reentry() {
        let mut c = controller();
        c.start_presentation().unwrap();
        c.go_to_slide(5).unwrap();
        c.restart().unwrap();
        c.start_presentation().unwrap();
        assert_eq!(c.presentation().unwrap().current_index(), 0);
    }

    #[test]
    fn test_correct_first_answer_scenario() {
        let mut c = controller();
        to_quiz(&mut c);

        let record = c.select_answer(1).unwrap();
        assert_eq!(
            record,
            AnswerRecord {
                question_index: 0,
                selected_index: 1,
                correct: true
            }
        );

        match c.view() {
            ScreenView::Quiz(view) => {
                assert_eq!(view.score, 1);
                assert!(view.options.iter().all(|o| !o.enabled));
                assert_eq!(view.options[1].mark, OptionMark::Correct);
                let feedback = view.feedback.unwrap();
                assert!(feedback.correct);
                assert!(feedback.explanation.starts_with("Python is a programming language"));
            }
            other => panic!("unexpected view {:?}", other),
        }

        c.advance().unwrap();
        assert_eq!(c.quiz().phase(), QuizPhase::AwaitingAnswer(1));
        match c.view() {
            ScreenView::Quiz(view) => {
                assert_eq!(view.number, 2);
                assert!((view.progress - 2.0 / 23.0).abs() < f64::EPSILON);
                assert!(view.feedback.is_none());
                assert!(view.options.iter().all(|o| o.enabled));
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_incorrect_answer_scenario() {
        let mut c = controller();
        to_quiz(&mut c);
        c.select_answer(1).unwrap();
        c.advance().unwrap();

        // question 2 has correct_index 2
        let record = c.select_answer(0).unwrap();
        assert!(!record.correct);
        assert_eq!(c.quiz().score(), 1);

        match c.view() {
            ScreenView::Quiz(view) => {
                assert_eq!(view.options[0].mark, OptionMark::Incorrect);
                assert_eq!(view.options[2].mark, OptionMark::Correct);
                assert_eq!(view.feedback.unwrap().headline(), "✗ Not quite...");
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_last_advance_shows_results() {
        let mut c = controller();
        to_quiz(&mut c);
        let correct: Vec<usize> = c
            .content()
            .questions
            .iter()
            .map(|q| q.correct_index)
            .collect();

        for index in correct {
            c.select_answer(index).unwrap();
            c.advance().unwrap();
        }

        assert_eq!(c.screen(), Screen::Results);
        match c.view() {
            ScreenView::Results(view) => {
                assert_eq!(view.results.score, 23);
                assert_eq!(view.results.percentage, 100);
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_transition_table() {
        assert!(Screen::Welcome.can_transition_to(Screen::Presentation));
        assert!(!Screen::Welcome.can_transition_to(Screen::Quiz));
        assert!(!Screen::Presentation.can_transition_to(Screen::Results));
        assert!(Screen::Review.can_transition_to(Screen::Results));
        assert!(!Screen::Welcome.can_transition_to(Screen::Welcome));
    }

    #[test]
    fn test_malformed_content_is_refused() {
        let mut content = ContentTables::builtin();
        content.questions[0].correct_index = 7;
        assert!(ScreenController::new(content).is_err());
    }
}
