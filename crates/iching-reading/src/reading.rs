//! A full reading: the cast lines and the four hexagrams derived from them.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use iching_core::{CoinToss, Hexagram, Lines};

use crate::error::ReadingError;
use crate::question::Question;

/// One cast and everything derived from it.
///
/// Only the question, the tosses, the lines and the timestamp are read back
/// when deserializing; the hexagrams and changing lines are derived again
/// from the lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ReadingRecord")]
pub struct Reading {
    /// The question asked, if any.
    pub question: Option<Question>,
    /// The coins thrown for each line, bottom first, when cast here.
    pub tosses: Option<[CoinToss; 6]>,
    /// The six lines, bottom first.
    pub lines: Lines,
    /// Hexagram of the lines as cast.
    pub primary: Hexagram,
    /// Hexagram after the changing lines settle.
    pub relation: Hexagram,
    /// Hexagram of the overlapping inner trigrams of the primary.
    pub nuclear: Hexagram,
    /// Hexagram with every line of the primary inverted.
    pub complementary: Hexagram,
    /// Zero-based indices of the changing lines, bottom first.
    pub changing: Vec<usize>,
    /// When the reading was made.
    pub cast_at: DateTime<Utc>,
}

/// The stored part of a reading.
#[derive(Deserialize)]
struct ReadingRecord {
    #[serde(default)]
    question: Option<Question>,
    #[serde(default)]
    tosses: Option<[CoinToss; 6]>,
    lines: Lines,
    cast_at: DateTime<Utc>,
}

impl TryFrom<ReadingRecord> for Reading {
    type Error = ReadingError;

    fn try_from(record: ReadingRecord) -> Result<Self, Self::Error> {
        if let Some(tosses) = &record.tosses {
            let tossed = Lines::from_tosses(tosses);
            if tossed != record.lines {
                return Err(ReadingError::TossMismatch {
                    tossed: tossed.to_string(),
                    lines: record.lines.to_string(),
                });
            }
        }
        let mut reading = Self::from_lines(record.lines, record.question);
        reading.tosses = record.tosses;
        reading.cast_at = record.cast_at;
        Ok(reading)
    }
}

impl Reading {
    /// Cast six lines with three coins each and derive the reading.
    pub fn cast(question: Option<Question>, rng: &mut StdRng) -> Self {
        let tosses: [CoinToss; 6] = std::array::from_fn(|_| CoinToss::toss(rng));
        let mut reading = Self::from_lines(Lines::from_tosses(&tosses), question);
        reading.tosses = Some(tosses);
        reading
    }

    /// Derive a reading from lines that were cast elsewhere.
    pub fn from_lines(lines: Lines, question: Option<Question>) -> Self {
        let bits = lines.bits();
        let reading = Self {
            question,
            tosses: None,
            lines,
            primary: bits.hexagram(),
            relation: lines.relation(),
            nuclear: bits.nuclear().hexagram(),
            complementary: bits.complementary().hexagram(),
            changing: lines.changing_indices(),
            cast_at: Utc::now(),
        };
        log::debug!(
            "reading {}: primary {} relation {} nuclear {} complementary {}",
            reading.lines,
            reading.primary,
            reading.relation,
            reading.nuclear,
            reading.complementary
        );
        reading
    }

    /// The lines after the changing lines settle, as read for the relation.
    pub fn relation_lines(&self) -> Lines {
        self.lines.mutate()
    }

    /// Whether any line is changing.
    pub fn has_changes(&self) -> bool {
        !self.changing.is_empty()
    }

    /// Changing line positions counted from 1 (bottom) to 6 (top).
    pub fn changing_positions(&self) -> Vec<u8> {
        (1u8..)
            .zip(self.lines.iter())
            .filter(|(_, line)| line.is_changing())
            .map(|(position, _)| position)
            .collect()
    }

    /// The four hexagrams with their role in the reading.
    pub fn hexagrams(&self) -> [(&'static str, Hexagram); 4] {
        [
            ("primary", self.primary),
            ("relation", self.relation),
            ("nuclear", self.nuclear),
            ("complementary", self.complementary),
        ]
    }
}
