//! Content tables module
//!
//! The slide deck and question bank that feed the presentation and quiz.
//! Both tables are immutable once loaded.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::{Result, TrainerError, ANSWER_COUNT};

mod builtin;
pub mod markup;

pub use markup::RichLine;

/// One unit of instructional content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    /// Short decoration shown above the title, usually an emoji
    pub icon: String,
    /// Rich-text body in the line markup understood by [`markup::parse`]
    pub content: String,
}

/// One multiple-choice quiz item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub answers: [String; ANSWER_COUNT],
    /// Position of the correct entry in `answers`
    pub correct_index: usize,
    /// Shown after the question is answered and again in the review
    pub explanation: String,
}

impl Question {
    /// Text of the correct answer, `None` when `correct_index` is out of range
    pub fn correct_answer(&self) -> Option<&str> {
        self.answers.get(self.correct_index).map(String::as_str)
    }

    /// Check whether `index` names the correct answer
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

/// The slide deck and question bank consumed by a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTables {
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl ContentTables {
    /// Build tables from already-constructed slides and questions, validating them
    pub fn new(slides: Vec<Slide>, questions: Vec<Question>) -> Result<Self> {
        let tables = Self { slides, questions };
        tables.validate()?;
        Ok(tables)
    }

    /// The PyBricks course shipped with the trainer
    pub fn builtin() -> Self {
        Self {
            slides: builtin::slides(),
            questions: builtin::questions(),
        }
    }

    /// Load tables from a TOML or JSON file, chosen by extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TrainerError::ContentError(format!(
                "Failed to read content file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let tables: Self = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content).map_err(|e| {
                TrainerError::ContentError(format!(
                    "Failed to parse content file {}: {}",
                    path.display(),
                    e
                ))
            })?
        };

        tables.validate()?;
        info!(
            "loaded {} slides and {} questions from {}",
            tables.slide_count(),
            tables.question_count(),
            path.display()
        );
        Ok(tables)
    }

    /// Load from `path` when given, otherwise fall back to the built-in course
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Check the authored data before a session is allowed to start
    pub fn validate(&self) -> Result<()> {
        if self.slides.is_empty() {
            return Err(TrainerError::ContentError(
                "Slide deck must contain at least one slide".to_string(),
            ));
        }

        if self.questions.is_empty() {
            return Err(TrainerError::ContentError(
                "Question bank must contain at least one question".to_string(),
            ));
        }

        for (i, slide) in self.slides.iter().enumerate() {
            if slide.title.trim().is_empty() {
                return Err(TrainerError::ContentError(format!(
                    "Slide {} has an empty title",
                    i + 1
                )));
            }
        }

        for (i, question) in self.questions.iter().enumerate() {
            if question.prompt.trim().is_empty() {
                return Err(TrainerError::ContentError(format!(
                    "Question {} has an empty prompt",
                    i + 1
                )));
            }
            if question.correct_index >= ANSWER_COUNT {
                return Err(TrainerError::ContentError(format!(
                    "Question {} has correct_index {} (must be below {})",
                    i + 1,
                    question.correct_index,
                    ANSWER_COUNT
                )));
            }
        }

        Ok(())
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
