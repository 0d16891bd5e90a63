use serde::{Deserialize, Serialize};

use super::LessonPage;

/// Result of checking a submitted answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// A free-text question that gates entry into `unlocks`.
///
/// Grading is a placeholder: an answer is correct when its lower-cased text
/// contains the expected phrase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    unlocks: LessonPage,
    prompt: String,
    expected: String,
}

impl Question {
    #[must_use]
    pub fn new(unlocks: LessonPage, prompt: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            unlocks,
            prompt: prompt.into(),
            expected: expected.into().to_lowercase(),
        }
    }

    #[must_use]
    pub fn unlocks(&self) -> LessonPage {
        self.unlocks
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    #[must_use]
    pub fn grade(&self, answer: &str) -> AnswerOutcome {
        if answer.to_lowercase().contains(&self.expected) {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        }
    }
}
