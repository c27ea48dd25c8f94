//! Quiz attempt state machine
//!
//! ```text
//! NotStarted --start--> AwaitingAnswer(0)
//! AwaitingAnswer(i) --select--> AnswerRevealed(i)
//! AnswerRevealed(i) --advance--> AwaitingAnswer(i+1)   if i+1 < n
//! AnswerRevealed(i) --advance--> Completed             if i+1 == n
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::Rejected;
use crate::content::Question;
use crate::ANSWER_COUNT;

/// Where an attempt currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    NotStarted,
    AwaitingAnswer(usize),
    AnswerRevealed(usize),
    Completed,
}

/// Immutable log entry for one answered question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected_index: usize,
    pub correct: bool,
}

/// How an answer option is marked once the question is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptionMark {
    #[default]
    Unmarked,
    Correct,
    Incorrect,
}

/// State of one quiz attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    phase: QuizPhase,
    score: usize,
    answers: Vec<AnswerRecord>,
    question_count: usize,
}

impl QuizState {
    pub fn new(question_count: usize) -> Self {
        Self {
            phase: QuizPhase::NotStarted,
            score: 0,
            answers: Vec::with_capacity(question_count),
            question_count,
        }
    }

    /// Reset the attempt and ask the first question
    pub fn start(&mut self) {
        self.score = 0;
        self.answers.clear();
        self.phase = if self.question_count == 0 {
            QuizPhase::Completed
        } else {
            QuizPhase::AwaitingAnswer(0)
        };
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn is_completed(&self) -> bool {
        self.phase == QuizPhase::Completed
    }

    /// Index of the question being asked; equals the question count once completed
    pub fn current_question_index(&self) -> usize {
        match self.phase {
            QuizPhase::NotStarted => 0,
            QuizPhase::AwaitingAnswer(i) | QuizPhase::AnswerRevealed(i) => i,
            QuizPhase::Completed => self.question_count,
        }
    }

    /// Record the learner's choice for the current question
    ///
    /// Only the first selection per question counts.
    pub fn select(
        &mut self,
        questions: &[Question],
        selected_index: usize,
    ) -> Result<AnswerRecord, Rejected> {
        let question_index = match self.phase {
            QuizPhase::AwaitingAnswer(i) => i,
            QuizPhase::AnswerRevealed(_) => return Err(Rejected::AlreadyAnswered),
            QuizPhase::NotStarted | QuizPhase::Completed => {
                return Err(Rejected::NoActiveQuestion)
            }
        };

        if selected_index >= ANSWER_COUNT {
            return Err(Rejected::OptionOutOfRange(selected_index));
        }

        let question = questions
            .get(question_index)
            .ok_or(Rejected::NoActiveQuestion)?;

        let record = AnswerRecord {
            question_index,
            selected_index,
            correct: question.is_correct(selected_index),
        };

        if record.correct {
            self.score += 1;
        }
        self.answers.push(record);
        self.phase = QuizPhase::AnswerRevealed(question_index);
        debug!(
            "question {} answered with {} ({})",
            question_index + 1,
            selected_index,
            if record.correct { "correct" } else { "incorrect" }
        );

        Ok(record)
    }

    /// Move past an answered question
    pub fn advance(&mut self) -> Result<QuizPhase, Rejected> {
        let question_index = match self.phase {
            QuizPhase::AnswerRevealed(i) => i,
            QuizPhase::AwaitingAnswer(_) => return Err(Rejected::NotAnswered),
            QuizPhase::NotStarted | QuizPhase::Completed => {
                return Err(Rejected::NoActiveQuestion)
            }
        };

        self.phase = if question_index + 1 < self.question_count {
            QuizPhase::AwaitingAnswer(question_index + 1)
        } else {
            QuizPhase::Completed
        };
        Ok(self.phase)
    }

    /// The record for the question on screen, once it has been answered
    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        match self.phase {
            QuizPhase::AnswerRevealed(i) => self.answers.last().filter(|r| r.question_index == i),
            _ => None,
        }
    }

    /// Marks for the four options of the current question
    ///
    /// The chosen option is marked correct or incorrect; after a wrong
    /// choice the right option is marked too.
    pub fn option_marks(&self, question: &Question) -> [OptionMark; ANSWER_COUNT] {
        let mut marks = [OptionMark::Unmarked; ANSWER_COUNT];
        if let Some(record) = self.current_answer() {
            if record.correct {
                marks[record.selected_index] = OptionMark::Correct;
            } else {
                marks[record.selected_index] = OptionMark::Incorrect;
                if let Some(mark) = marks.get_mut(question.correct_index) {
                    *mark = OptionMark::Correct;
                }
            }
        }
        marks
    }
}
