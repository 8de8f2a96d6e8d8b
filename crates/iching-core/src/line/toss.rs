//! The three-coin method.
//!
//! Each coin lands heads (worth 3) or tails (worth 2). The sum of three
//! coins is the line value, so 6 and 9 come up one time in eight and 7 and
//! 8 three times in eight.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::LineValue;

/// One side of a tossed coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    /// Heads, worth 3 (yang).
    Heads,
    /// Tails, worth 2 (yin).
    Tails,
}

impl Coin {
    /// Flip a fair coin.
    pub fn flip(rng: &mut StdRng) -> Self {
        if rng.random_bool(0.5) {
            Self::Heads
        } else {
            Self::Tails
        }
    }

    /// The weight this face contributes to a line.
    pub fn weight(self) -> u8 {
        match self {
            Self::Heads => 3,
            Self::Tails => 2,
        }
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heads => write!(f, "heads"),
            Self::Tails => write!(f, "tails"),
        }
    }
}

/// The three coins thrown for a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinToss {
    /// The faces that came up.
    pub coins: [Coin; 3],
}

impl CoinToss {
    /// Throw three independent coins.
    pub fn toss(rng: &mut StdRng) -> Self {
        Self {
            coins: std::array::from_fn(|_| Coin::flip(rng)),
        }
    }

    /// Sum of the three coin weights (6-9).
    pub fn total(&self) -> u8 {
        self.coins.iter().map(|c| c.weight()).sum()
    }

    /// The line value produced by this toss.
    pub fn line(&self) -> LineValue {
        match self.total() {
            6 => LineValue::OldYin,
            7 => LineValue::YoungYang,
            8 => LineValue::YoungYin,
            _ => LineValue::OldYang,
        }
    }
}

/// Cast a single line with three coins.
pub fn toss_line(rng: &mut StdRng) -> LineValue {
    CoinToss::toss(rng).line()
}
