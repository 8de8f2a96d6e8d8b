//! Configuration for casting readings.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::corpus::TextCorpus;
use crate::error::ReadingResult;

/// Configuration for a reading.
#[derive(Debug, Clone, Default)]
pub struct ReadingConfig {
    /// RNG seed for reproducible casts. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// JSON text corpus to describe hexagrams with.
    pub corpus_path: Option<PathBuf>,
}

impl ReadingConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the corpus file.
    pub fn with_corpus_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corpus_path = Some(path.into());
        self
    }

    /// Build the random source for a cast.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Load the configured corpus, if any.
    pub fn load_corpus(&self) -> ReadingResult<Option<TextCorpus>> {
        self.corpus_path
            .as_deref()
            .map(TextCorpus::load)
            .transpose()
    }
}
