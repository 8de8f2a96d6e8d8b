//! The question posed to the oracle.

use serde::{Deserialize, Serialize};

use crate::error::{ReadingError, ReadingResult};

/// A trimmed question of at least [`Question::MIN_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question(String);

impl Question {
    /// Shortest question accepted.
    pub const MIN_CHARS: usize = 5;

    /// Validate a question.
    pub fn parse(input: &str) -> ReadingResult<Self> {
        let trimmed = input.trim();
        let found = trimmed.chars().count();
        if found < Self::MIN_CHARS {
            return Err(ReadingError::QuestionTooShort {
                min: Self::MIN_CHARS,
                found,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The question text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Question {
    type Error = ReadingError;

    fn try_from(s: String) -> ReadingResult<Self> {
        Self::parse(&s)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.0
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
