//! The request handed to an interpreter.
//!
//! An interpreter (typically a chat language model) receives the question,
//! the four hexagram numbers and the changing lines. The request renders
//! them, together with any corpus texts, as a system and a user message.

use serde::{Deserialize, Serialize};

use iching_core::Hexagram;

use crate::corpus::TextCorpus;
use crate::error::{ReadingError, ReadingResult};
use crate::question::Question;
use crate::reading::Reading;

/// Instruction given to the interpreter.
pub const SYSTEM_PROMPT: &str =
    "You are an interpreter of the I Ching. Give a clear, wise and practical answer.";

const NO_TEXT: &str = "(no text available)";

/// Speaker of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions for the interpreter.
    System,
    /// The reading being interpreted.
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "system"),
            Self::User => write!(f, "user"),
        }
    }
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who is speaking.
    pub role: Role,
    /// Message text.
    pub content: String,
}

/// Everything an interpreter needs to know about a reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpretationRequest {
    /// The question asked.
    pub question: Question,
    /// Hexagram of the lines as cast.
    pub primary: Hexagram,
    /// Hexagram after the changing lines settle.
    pub relation: Hexagram,
    /// Nuclear hexagram.
    pub nuclear: Hexagram,
    /// Complementary hexagram.
    pub complementary: Hexagram,
    /// Changing line positions, 1 (bottom) to 6 (top).
    pub changing_lines: Vec<u8>,
}

impl InterpretationRequest {
    /// Build a request from a reading that carries a question.
    pub fn from_reading(reading: &Reading) -> ReadingResult<Self> {
        let question = reading
            .question
            .clone()
            .ok_or(ReadingError::MissingQuestion)?;
        Ok(Self {
            question,
            primary: reading.primary,
            relation: reading.relation,
            nuclear: reading.nuclear,
            complementary: reading.complementary,
            changing_lines: reading.changing_positions(),
        })
    }

    /// Render the user message describing the reading.
    pub fn render_context(&self, corpus: Option<&TextCorpus>) -> String {
        let text = corpus.and_then(|c| c.get(self.primary));
        let title = text
            .map(|t| t.title.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or(self.primary.info().name);

        let mut out = format!("Question: {}\n\n", self.question);
        out.push_str(&format!("Hexagram: {}. {title}\n", self.primary));
        out.push_str(&format!(
            "Judgment: {}\n",
            text.map(|t| t.judgment.as_str())
                .filter(|s| !s.is_empty())
                .unwrap_or(self.primary.info().summary)
        ));
        out.push_str(&format!(
            "Image: {}\n\n",
            text.map(|t| t.image.as_str())
                .filter(|s| !s.is_empty())
                .unwrap_or(NO_TEXT)
        ));

        out.push_str("Changing lines:\n");
        if self.changing_lines.is_empty() {
            out.push_str("(none)\n");
        }
        for &position in &self.changing_lines {
            let line = text.and_then(|t| t.line(position)).unwrap_or(NO_TEXT);
            out.push_str(&format!("Line {position}: {line}\n"));
        }
        out.push('\n');

        if self.relation != self.primary {
            out.push_str(&format!("Relation hexagram: {}\n", describe(self.relation)));
        }
        out.push_str(&format!("Nuclear hexagram: {}\n", describe(self.nuclear)));
        out.push_str(&format!(
            "Complementary hexagram: {}\n",
            describe(self.complementary)
        ));
        out
    }

    /// The system and user messages for a chat interpreter.
    pub fn messages(&self, corpus: Option<&TextCorpus>) -> [ChatMessage; 2] {
        [
            ChatMessage {
                role: Role::System,
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: Role::User,
                content: self.render_context(corpus),
            },
        ]
    }
}

fn describe(hexagram: Hexagram) -> String {
    format!("{}. {}", hexagram, hexagram.info().name)
}
