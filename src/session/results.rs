//! Final score, feedback tiers and the answer review

use super::quiz::AnswerRecord;
use crate::content::Question;

/// Feedback band for a final percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// 100%
    Perfect,
    /// 80% up to but excluding 100%
    Great,
    /// 60% up to but excluding 80%
    Good,
    /// Below 60%
    KeepLearning,
}

impl Tier {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 100 {
            Tier::Perfect
        } else if percentage >= 80 {
            Tier::Great
        } else if percentage >= 60 {
            Tier::Good
        } else {
            Tier::KeepLearning
        }
    }

    /// Feedback shown on the results screen
    pub fn message(&self) -> &'static str {
        match self {
            Tier::Perfect => "🎉 Perfect score! You're a PyBricks expert! You clearly understand Python, libraries, and how to use PyBricks to control your robot.",
            Tier::Great => "🌟 Great job! You have a solid understanding of PyBricks and Python. Review the questions you missed to become an expert!",
            Tier::Good => "👍 Good effort! You're learning the basics. Review the explanations and try the quiz again to improve your score.",
            Tier::KeepLearning => "💪 Keep learning! Don't worry - everyone starts somewhere. Read through the explanations carefully and try again. You've got this!",
        }
    }
}

/// Outcome of a finished attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: Tier,
}

/// Percentage rounded half up, and its tier
pub fn compute_results(score: usize, total: usize) -> QuizResults {
    let percentage = if total == 0 {
        0
    } else {
        ((200 * score + total) / (2 * total)) as u32
    };

    QuizResults {
        score,
        total,
        percentage,
        tier: Tier::from_percentage(percentage),
    }
}

/// One line of the answer transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry<'a> {
    /// 1-based position in the transcript
    pub ordinal: usize,
    pub prompt: &'a str,
    pub selected_answer: &'a str,
    /// Present only when the learner chose wrongly
    pub correct_answer: Option<&'a str>,
    pub explanation: &'a str,
    pub correct: bool,
}

/// Transcript of every recorded answer, in the order given
pub fn review_entries<'a>(
    answers: &[AnswerRecord],
    questions: &'a [Question],
) -> Vec<ReviewEntry<'a>> {
    answers
        .iter()
        .enumerate()
        .filter_map(|(i, record)| {
            let question = questions.get(record.question_index)?;
            let selected_answer = question.answers.get(record.selected_index)?;
            Some(ReviewEntry {
                ordinal: i + 1,
                prompt: &question.prompt,
                selected_answer,
                correct_answer: (!record.correct).then(|| question.correct_answer()).flatten(),
                explanation: &question.explanation,
                correct: record.correct,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_out_of_ten() {
        assert_eq!(compute_results(10, 10).tier, Tier::Perfect);
        assert_eq!(compute_results(9, 10).tier, Tier::Great);
        assert_eq!(compute_results(8, 10).tier, Tier::Great);
        assert_eq!(compute_results(7, 10).tier, Tier::Good);
        assert_eq!(compute_results(6, 10).tier, Tier::Good);
        assert_eq!(compute_results(5, 10).tier, Tier::KeepLearning);
        assert_eq!(compute_results(0, 10).tier, Tier::KeepLearning);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(compute_results(1, 8).percentage, 13); // 12.5
        assert_eq!(compute_results(1, 3).percentage, 33);
        assert_eq!(compute_results(2, 3).percentage, 67);
    }

    #[test]
    fn test_rounding_feeds_tier() {
        // 19/23 = 82.6%, 18/23 = 78.3%, 14/23 = 60.9%, 13/23 = 56.5%
        assert_eq!(compute_results(22, 23).percentage, 96);
        assert_eq!(compute_results(19, 23).tier, Tier::Great);
        assert_eq!(compute_results(18, 23).tier, Tier::Good);
        assert_eq!(compute_results(14, 23).tier, Tier::Good);
        assert_eq!(compute_results(13, 23).tier, Tier::KeepLearning);
    }

    #[test]
    fn test_empty_bank() {
        let results = compute_results(0, 0);
        assert_eq!(results.percentage, 0);
        assert_eq!(results.tier, Tier::KeepLearning);
    }

    #[test]
    fn test_each_tier_has_distinct_message() {
        let messages = [
            Tier::Perfect.message(),
            Tier::Great.message(),
            Tier::Good.message(),
            Tier::KeepLearning.message(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_review_entries() {
        let questions = vec![
            Question {
                prompt: "First".to_string(),
                answers: ["w".into(), "x".into(), "y".into(), "z".into()],
                correct_index: 1,
                explanation: "x is right".to_string(),
            },
            Question {
                prompt: "Second".to_string(),
                answers: ["w".into(), "x".into(), "y".into(), "z".into()],
                correct_index: 2,
                explanation: "y is right".to_string(),
            },
        ];
        let answers = [
            AnswerRecord {
                question_index: 0,
                selected_index: 1,
                correct: true,
            },
            AnswerRecord {
                question_index: 1,
                selected_index: 0,
                correct: false,
            },
        ];

        let entries = review_entries(&answers, &questions);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].ordinal, 1);
        assert_eq!(entries[0].selected_answer, "x");
        assert_eq!(entries[0].correct_answer, None);
        assert_eq!(entries[1].ordinal, 2);
        assert_eq!(entries[1].prompt, "Second");
        assert_eq!(entries[1].selected_answer, "w");
        assert_eq!(entries[1].correct_answer, Some("y"));
        assert_eq!(entries[1].explanation, "y is right");
    }

    #[test]
    fn test_review_entries_with_broken_key() {
        let questions = vec![Question {
            prompt: "Unchecked".to_string(),
            answers: ["w".into(), "x".into(), "y".into(), "z".into()],
            correct_index: 9,
            explanation: "no valid key".to_string(),
        }];
        let answers = [AnswerRecord {
            question_index: 0,
            selected_index: 3,
            correct: false,
        }];

        let entries = review_entries(&answers, &questions);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].selected_answer, "z");
        assert_eq!(entries[0].correct_answer, None);
    }
}
