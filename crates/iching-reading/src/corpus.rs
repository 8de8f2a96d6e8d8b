//! Typed text corpus keyed by hexagram.
//!
//! The corpus is a JSON object whose keys are King Wen numbers written as
//! strings. Each record holds a title, the judgment, the image and the
//! per-line commentary keyed `"1"` (bottom) to `"6"` (top):
//!
//! ```json
//! { "1": { "title": "The Creative", "judgment": "...", "image": "...",
//!          "lines": { "1": "...", "6": "..." } } }
//! ```
//!
//! Any hexagram may be missing; lookups return `None` rather than failing.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use iching_core::Hexagram;

use crate::error::{ReadingError, ReadingResult};

/// Texts for a single hexagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramText {
    /// Title of the hexagram.
    #[serde(default)]
    pub title: String,
    /// The judgment.
    #[serde(default)]
    pub judgment: String,
    /// The image.
    #[serde(default)]
    pub image: String,
    /// Commentary per line, keyed by position 1 (bottom) to 6 (top).
    #[serde(default)]
    pub lines: BTreeMap<u8, String>,
}

impl HexagramText {
    /// Commentary for one line, 1 (bottom) to 6 (top).
    pub fn line(&self, position: u8) -> Option<&str> {
        self.lines.get(&position).map(String::as_str)
    }
}

/// Hexagram texts keyed by King Wen number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextCorpus {
    entries: BTreeMap<Hexagram, HexagramText>,
}

impl TextCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a corpus from JSON.
    pub fn from_json_str(json: &str) -> ReadingResult<Self> {
        let raw: BTreeMap<String, HexagramText> = serde_json::from_str(json)?;
        let mut entries = BTreeMap::new();
        for (key, text) in raw {
            let hexagram: Hexagram = key
                .parse()
                .map_err(|_| ReadingError::InvalidCorpusKey(key.clone()))?;
            if entries.insert(hexagram, text).is_some() {
                return Err(ReadingError::DuplicateCorpusKey { key, hexagram });
            }
        }
        let corpus = Self { entries };
        if corpus.len() < usize::from(Hexagram::COUNT) {
            log::warn!(
                "corpus holds {} of {} hexagrams",
                corpus.len(),
                Hexagram::COUNT
            );
        }
        Ok(corpus)
    }

    /// Load a corpus from a JSON file.
    pub fn load(path: &Path) -> ReadingResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ReadingError::CorpusIo {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded corpus from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Add or replace the texts for a hexagram.
    pub fn insert(&mut self, hexagram: Hexagram, text: HexagramText) {
        self.entries.insert(hexagram, text);
    }

    /// Texts for a hexagram, if the corpus has them.
    pub fn get(&self, hexagram: Hexagram) -> Option<&HexagramText> {
        let text = self.entries.get(&hexagram);
        if text.is_none() {
            log::warn!("no text available for hexagram {hexagram}");
        }
        text
    }

    /// Commentary for one line (1 = bottom) of a hexagram.
    pub fn line_text(&self, hexagram: Hexagram, position: u8) -> Option<&str> {
        self.get(hexagram)?.line(position)
    }

    /// Hexagrams without an entry.
    pub fn missing(&self) -> Vec<Hexagram> {
        Hexagram::all()
            .filter(|h| !self.entries.contains_key(h))
            .collect()
    }

    /// Number of hexagrams with texts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "1": {
            "title": "The Creative",
            "judgment": "Sublime success.",
            "image": "Heaven moves with strength.",
            "lines": { "1": "Hidden dragon.", "6": "Arrogant dragon." }
        },
        "64": { "title": "Before Completion" }
    }"#;

    fn hex(n: u8) -> Hexagram {
        Hexagram::new(n).unwrap()
    }

    #[test]
    fn parse_sample() {
        let corpus = TextCorpus::from_json_str(SAMPLE).unwrap();
        assert_eq!(corpus.len(), 2);
        let creative = corpus.get(hex(1)).unwrap();
        assert_eq!(creative.title, "The Creative");
        assert_eq!(creative.judgment, "Sublime success.");
        assert_eq!(corpus.line_text(hex(1), 6), Some("Arrogant dragon."));
    }

    #[test]
    fn missing_entries_are_none() {
        let corpus = TextCorpus::from_json_str(SAMPLE).unwrap();
        assert!(corpus.get(hex(2)).is_none());
        assert_eq!(corpus.line_text(hex(1), 3), None);
        assert_eq!(corpus.line_text(hex(2), 1), None);
        let before = corpus.get(hex(64)).unwrap();
        assert!(before.judgment.is_empty());
        assert!(before.lines.is_empty());
        assert_eq!(corpus.missing().len(), 62);
    }

    #[test]
    fn invalid_key_is_rejected() {
        let err = TextCorpus::from_json_str(r#"{ "65": { "title": "x" } }"#).unwrap_err();
        assert!(matches!(err, ReadingError::InvalidCorpusKey(ref k) if k == "65"));
        let err = TextCorpus::from_json_str(r#"{ "one": {} }"#).unwrap_err();
        assert!(matches!(err, ReadingError::InvalidCorpusKey(_)));
    }

    #[test]
    fn keys_naming_the_same_hexagram_are_rejected() {
        let json = r#"{ "1": { "title": "A" }, "01": { "title": "B" }, " 1": { "title": "C" } }"#;
        let err = TextCorpus::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ReadingError::DuplicateCorpusKey { ref hexagram, .. } if hexagram.number() == 1
        ));
        assert!(err.to_string().contains("duplicate corpus key"));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = TextCorpus::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ReadingError::CorpusParse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("texts.json");
        std::fs::write(&path, SAMPLE).unwrap();
        let corpus = TextCorpus::load(&path).unwrap();
        assert_eq!(corpus.len(), 2);

        let err = TextCorpus::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ReadingError::CorpusIo { .. }));
    }

    #[test]
    fn insert_replaces() {
        let mut corpus = TextCorpus::new();
        assert!(corpus.is_empty());
        corpus.insert(
            hex(29),
            HexagramText {
                title: "The Abysmal".into(),
                ..Default::default()
            },
        );
        assert_eq!(corpus.get(hex(29)).map(|t| t.title.as_str()), Some("The Abysmal"));
        assert_eq!(corpus.len(), 1);
    }
}
