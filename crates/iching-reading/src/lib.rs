//! Readings on top of the hexagram engine.
//!
//! Casts a full reading (primary, relation, nuclear and complementary
//! hexagrams plus the changing lines), validates the question, looks up
//! texts in a typed corpus, builds the request handed to an interpreter and
//! exports readings as markdown or plain text.

pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod interpretation;
pub mod question;
pub mod reading;

pub use config::ReadingConfig;
pub use corpus::{HexagramText, TextCorpus};
pub use error::{ReadingError, ReadingResult};
pub use interpretation::{ChatMessage, InterpretationRequest, Role, SYSTEM_PROMPT};
pub use question::Question;
pub use reading::Reading;
