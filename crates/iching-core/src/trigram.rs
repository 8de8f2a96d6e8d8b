//! The eight trigrams.
//!
//! A trigram is three lines read bottom first. Patterns are written in the
//! same order, so Dui `110` is two solid lines under a broken one. When a
//! pattern is read as a binary number the bottom line is the most
//! significant bit: Qian `111` is 7 and Kun `000` is 0.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// One of the eight canonical trigrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Trigram {
    /// ☰ Heaven, `111`.
    Qian,
    /// ☱ Lake, `110`.
    Dui,
    /// ☲ Fire, `101`.
    Li,
    /// ☳ Thunder, `100`.
    Zhen,
    /// ☴ Wind, `011`.
    Xun,
    /// ☵ Water, `010`.
    Kan,
    /// ☶ Mountain, `001`.
    Gen,
    /// ☷ Earth, `000`.
    Kun,
}

impl Trigram {
    /// All trigrams in King Wen table order (descending value).
    pub const ALL: [Self; 8] = [
        Self::Qian,
        Self::Dui,
        Self::Li,
        Self::Zhen,
        Self::Xun,
        Self::Kan,
        Self::Gen,
        Self::Kun,
    ];

    /// Numeric value of the pattern, bottom line most significant (0-7).
    pub fn value(self) -> u8 {
        match self {
            Self::Qian => 7,
            Self::Dui => 6,
            Self::Li => 5,
            Self::Zhen => 4,
            Self::Xun => 3,
            Self::Kan => 2,
            Self::Gen => 1,
            Self::Kun => 0,
        }
    }

    /// The trigram with the given pattern value. Only the low three bits
    /// of `value` are used.
    pub fn from_value(value: u8) -> Self {
        Self::ALL[usize::from(7 - (value & 0b111))]
    }

    /// Row or column of this trigram in the King Wen table.
    pub fn table_index(self) -> usize {
        usize::from(7 - self.value())
    }

    /// The three bits, bottom line first.
    pub fn bits(self) -> [u8; 3] {
        let v = self.value();
        [(v >> 2) & 1, (v >> 1) & 1, v & 1]
    }

    /// Resolve three bits, bottom line first.
    pub fn from_bits(bits: [u8; 3]) -> CoreResult<Self> {
        if let Some(&bad) = bits.iter().find(|&&b| b > 1) {
            return Err(CoreError::InvalidBit(bad));
        }
        Ok(Self::from_valid_bits(bits))
    }

    /// Resolve a bit slice, which must hold exactly three bits.
    pub fn from_bit_slice(bits: &[u8]) -> CoreResult<Self> {
        let array: [u8; 3] = bits.try_into().map_err(|_| CoreError::BitLength {
            expected: 3,
            found: bits.len(),
        })?;
        Self::from_bits(array)
    }

    pub(crate) fn from_valid_bits(bits: [u8; 3]) -> Self {
        Self::from_value((bits[0] << 2) | (bits[1] << 1) | bits[2])
    }

    /// Pinyin name.
    pub fn pinyin(self) -> &'static str {
        match self {
            Self::Qian => "Qián",
            Self::Dui => "Duì",
            Self::Li => "Lí",
            Self::Zhen => "Zhèn",
            Self::Xun => "Xùn",
            Self::Kan => "Kǎn",
            Self::Gen => "Gèn",
            Self::Kun => "Kūn",
        }
    }

    /// The natural image the trigram stands for.
    pub fn image(self) -> &'static str {
        match self {
            Self::Qian => "Heaven",
            Self::Dui => "Lake",
            Self::Li => "Fire",
            Self::Zhen => "Thunder",
            Self::Xun => "Wind",
            Self::Kan => "Water",
            Self::Gen => "Mountain",
            Self::Kun => "Earth",
        }
    }

    /// Unicode trigram symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Qian => '☰',
            Self::Dui => '☱',
            Self::Li => '☲',
            Self::Zhen => '☳',
            Self::Xun => '☴',
            Self::Kan => '☵',
            Self::Gen => '☶',
            Self::Kun => '☷',
        }
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.symbol(), self.pinyin(), self.image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_patterns() {
        let cases = [
            ([1, 1, 1], Trigram::Qian),
            ([1, 1, 0], Trigram::Dui),
            ([1, 0, 1], Trigram::Li),
            ([1, 0, 0], Trigram::Zhen),
            ([0, 1, 1], Trigram::Xun),
            ([0, 1, 0], Trigram::Kan),
            ([0, 0, 1], Trigram::Gen),
            ([0, 0, 0], Trigram::Kun),
        ];
        for (bits, trigram) in cases {
            assert_eq!(Trigram::from_bits(bits), Ok(trigram), "{bits:?}");
            assert_eq!(trigram.bits(), bits);
        }
    }

    #[test]
    fn resolution_is_injective() {
        let mut seen = std::collections::HashSet::new();
        for v in 0..8u8 {
            let t = Trigram::from_value(v);
            assert_eq!(t.value(), v);
            assert!(seen.insert(t));
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn table_index_is_descending_value() {
        for (i, t) in Trigram::ALL.iter().enumerate() {
            assert_eq!(t.table_index(), i);
            assert_eq!(usize::from(t.value()), 7 - i);
        }
    }

    #[test]
    fn bottom_line_is_most_significant() {
        // Thunder: one solid line under two broken ones.
        assert_eq!(Trigram::Zhen.value(), 0b100);
        // Mountain: one solid line over two broken ones.
        assert_eq!(Trigram::Gen.value(), 0b001);
    }

    #[test]
    fn from_bit_slice_checks_length() {
        assert_eq!(Trigram::from_bit_slice(&[1, 1, 0]), Ok(Trigram::Dui));
        assert_eq!(
            Trigram::from_bit_slice(&[1, 1]),
            Err(CoreError::BitLength {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Trigram::from_bit_slice(&[1, 1, 0, 0, 1, 0]),
            Err(CoreError::BitLength {
                expected: 3,
                found: 6
            })
        );
        assert_eq!(Trigram::from_bits([1, 7, 0]), Err(CoreError::InvalidBit(7)));
    }

    #[test]
    fn display() {
        assert_eq!(Trigram::Qian.to_string(), "☰ Qián (Heaven)");
        assert_eq!(Trigram::Kan.to_string(), "☵ Kǎn (Water)");
    }
}
