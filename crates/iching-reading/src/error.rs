//! Error types for readings.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that can occur while building or describing a reading.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// The question is empty or too short to interpret.
    #[error("question too short: {found} characters (at least {min} required)")]
    QuestionTooShort {
        /// Minimum number of characters.
        min: usize,
        /// Characters supplied after trimming.
        found: usize,
    },

    /// An interpretation request needs a question.
    #[error("reading has no question")]
    MissingQuestion,

    /// The corpus file could not be read.
    #[error("cannot read corpus {path}: {source}")]
    CorpusIo {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The corpus is not valid JSON of the expected shape.
    #[error("invalid corpus: {0}")]
    CorpusParse(#[from] serde_json::Error),

    /// A corpus key is not a hexagram number.
    #[error("invalid corpus key: {0:?} (expected 1-64)")]
    InvalidCorpusKey(String),

    /// Two corpus keys name the same hexagram.
    #[error("duplicate corpus key: {key:?} repeats hexagram {hexagram}")]
    DuplicateCorpusKey {
        /// The key that repeated an earlier one.
        key: String,
        /// Hexagram both keys resolve to.
        hexagram: iching_core::Hexagram,
    },

    /// Recorded coin tosses do not produce the recorded lines.
    #[error("tosses {tossed} do not match lines {lines}")]
    TossMismatch {
        /// Lines the tosses produce.
        tossed: String,
        /// Lines that were recorded.
        lines: String,
    },

    /// Engine error.
    #[error("{0}")]
    Core(#[from] iching_core::CoreError),
}
