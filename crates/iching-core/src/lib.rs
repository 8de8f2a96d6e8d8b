//! Hexagram derivation engine for I Ching readings.
//!
//! Provides the three-coin line toss, the six-line sequence, projection to
//! yin/yang bits, mutation of changing lines, trigram resolution and the
//! King Wen lookup, plus the derived nuclear and complementary hexagrams.
//! A small catalogue names all 64 hexagrams.

pub mod bits;
pub mod catalog;
pub mod error;
pub mod hexagram;
pub mod line;
pub mod trigram;

pub use bits::Bits;
pub use catalog::HexagramInfo;
pub use error::{CoreError, CoreResult};
pub use hexagram::{Hexagram, KING_WEN};
pub use line::{Coin, CoinToss, LineValue, Lines, toss_line};
pub use trigram::Trigram;
