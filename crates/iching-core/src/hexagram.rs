//! King Wen hexagram numbers.
//!
//! A hexagram is a lower and an upper trigram. The pair indexes the 8x8
//! King Wen table; rows are the lower trigram and columns the upper, both
//! in [`Trigram::ALL`] order.

use serde::{Deserialize, Serialize};

use crate::bits::Bits;
use crate::catalog::{self, HexagramInfo};
use crate::error::{CoreError, CoreResult};
use crate::trigram::Trigram;

/// King Wen table: `KING_WEN[lower.table_index()][upper.table_index()]`.
///
/// Rows and columns run Qian, Dui, Li, Zhen, Xun, Kan, Gen, Kun.
pub const KING_WEN: [[u8; 8]; 8] = [
    // upper: ☰   ☱   ☲   ☳   ☴   ☵   ☶   ☷
    [1, 43, 14, 34, 9, 5, 26, 11],     // ☰ Qian
    [10, 58, 38, 54, 61, 60, 41, 19],  // ☱ Dui
    [13, 49, 30, 55, 37, 63, 22, 36],  // ☲ Li
    [25, 17, 21, 51, 42, 3, 27, 24],   // ☳ Zhen
    [44, 28, 50, 32, 57, 48, 18, 46],  // ☴ Xun
    [6, 47, 64, 40, 59, 29, 4, 7],     // ☵ Kan
    [33, 31, 56, 62, 53, 39, 52, 15],  // ☶ Gen
    [12, 45, 35, 16, 20, 8, 23, 2],    // ☷ Kun
];

/// Table position of each hexagram, indexed by `number - 1`.
const POSITIONS: [(usize, usize); 64] = table_positions(&KING_WEN);

const fn table_positions(table: &[[u8; 8]; 8]) -> [(usize, usize); 64] {
    let mut out = [(0, 0); 64];
    let mut row = 0;
    while row < 8 {
        let mut col = 0;
        while col < 8 {
            out[(table[row][col] - 1) as usize] = (row, col);
            col += 1;
        }
        row += 1;
    }
    out
}

/// A hexagram identified by its King Wen number (1-64).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hexagram(u8);

impl Hexagram {
    /// Number of hexagrams.
    pub const COUNT: u8 = 64;

    /// Validate a King Wen number.
    pub fn new(number: u8) -> CoreResult<Self> {
        if (1..=Self::COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(CoreError::InvalidHexagram(u32::from(number)))
        }
    }

    /// All 64 hexagrams in King Wen order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=Self::COUNT).map(Self)
    }

    /// The King Wen number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Look up the hexagram for a lower and an upper trigram.
    pub fn from_trigrams(lower: Trigram, upper: Trigram) -> Self {
        Self(KING_WEN[lower.table_index()][upper.table_index()])
    }

    /// Resolve six bits: lines 1-3 form the lower trigram, 4-6 the upper.
    pub fn from_bits(bits: Bits) -> Self {
        let hexagram = Self::from_trigrams(bits.lower_trigram(), bits.upper_trigram());
        log::debug!("resolved {bits} to hexagram {hexagram}");
        hexagram
    }

    /// Resolve a bit slice, which must hold exactly six bits.
    pub fn from_bit_slice(bits: &[u8]) -> CoreResult<Self> {
        Bits::from_slice(bits).map(Self::from_bits)
    }

    /// The lower and upper trigrams.
    pub fn trigrams(self) -> (Trigram, Trigram) {
        let (row, col) = POSITIONS[usize::from(self.0 - 1)];
        (Trigram::ALL[row], Trigram::ALL[col])
    }

    /// The lower trigram.
    pub fn lower(self) -> Trigram {
        self.trigrams().0
    }

    /// The upper trigram.
    pub fn upper(self) -> Trigram {
        self.trigrams().1
    }

    /// The six lines of this hexagram as bits, bottom first.
    pub fn bits(self) -> Bits {
        let (lower, upper) = self.trigrams();
        Bits::from_trigrams(lower, upper)
    }

    /// Name, hanzi and pinyin.
    pub fn info(self) -> &'static HexagramInfo {
        catalog::info(self)
    }

    /// The nuclear hexagram.
    pub fn nuclear(self) -> Self {
        self.bits().nuclear().hexagram()
    }

    /// The complementary hexagram.
    pub fn complementary(self) -> Self {
        self.bits().complementary().hexagram()
    }
}

impl TryFrom<u8> for Hexagram {
    type Error = CoreError;

    fn try_from(number: u8) -> CoreResult<Self> {
        Self::new(number)
    }
}

impl From<Hexagram> for u8 {
    fn from(hexagram: Hexagram) -> Self {
        hexagram.0
    }
}

impl std::str::FromStr for Hexagram {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let number: u32 = s
            .trim()
            .parse()
            .map_err(|_| CoreError::HexagramText(s.to_string()))?;
        u8::try_from(number)
            .map_err(|_| CoreError::InvalidHexagram(number))
            .and_then(Self::new)
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn number_of(bits: [u8; 6]) -> u8 {
        Hexagram::from_bit_slice(&bits).unwrap().number()
    }

    #[test]
    fn table_covers_one_to_sixty_four_once() {
        let cells: Vec<u8> = KING_WEN.iter().flatten().copied().collect();
        assert_eq!(cells.len(), 64);
        let distinct: BTreeSet<u8> = cells.iter().copied().collect();
        assert_eq!(distinct.len(), 64);
        assert_eq!(distinct.first(), Some(&1));
        assert_eq!(distinct.last(), Some(&64));
    }

    #[test]
    fn pure_hexagrams() {
        assert_eq!(number_of([1; 6]), 1);
        assert_eq!(number_of([0; 6]), 2);
        for t in Trigram::ALL {
            let h = Hexagram::from_trigrams(t, t);
            assert!([1, 2, 29, 30, 51, 52, 57, 58].contains(&h.number()));
        }
    }

    #[test]
    fn reference_hexagrams() {
        // Lake over Heaven.
        assert_eq!(number_of([1, 1, 1, 1, 1, 0]), 43);
        // Heaven over Lake.
        assert_eq!(number_of([1, 1, 0, 1, 1, 1]), 10);
        // Earth over Heaven, Heaven over Earth.
        assert_eq!(number_of([1, 1, 1, 0, 0, 0]), 11);
        assert_eq!(number_of([0, 0, 0, 1, 1, 1]), 12);
        // Water over Thunder.
        assert_eq!(number_of([1, 0, 0, 0, 1, 0]), 3);
        // Mountain over Water.
        assert_eq!(number_of([0, 1, 0, 0, 0, 1]), 4);
        // Water over Fire, Fire over Water.
        assert_eq!(number_of([1, 0, 1, 0, 1, 0]), 63);
        assert_eq!(number_of([0, 1, 0, 1, 0, 1]), 64);
        // Wind over Fire.
        assert_eq!(number_of([1, 0, 1, 0, 1, 1]), 37);
    }

    #[test]
    fn new_validates_range() {
        assert!(Hexagram::new(1).is_ok());
        assert!(Hexagram::new(64).is_ok());
        assert_eq!(Hexagram::new(0), Err(CoreError::InvalidHexagram(0)));
        assert_eq!(Hexagram::new(65), Err(CoreError::InvalidHexagram(65)));
    }

    #[test]
    fn from_str() {
        assert_eq!("37".parse::<Hexagram>().unwrap().number(), 37);
        assert_eq!(
            "300".parse::<Hexagram>(),
            Err(CoreError::InvalidHexagram(300))
        );
        assert_eq!(
            "abc".parse::<Hexagram>(),
            Err(CoreError::HexagramText("abc".into()))
        );
        assert_eq!(
            "-1".parse::<Hexagram>(),
            Err(CoreError::HexagramText("-1".into()))
        );
    }

    #[test]
    fn wrong_length_fails_fast() {
        assert_eq!(
            Hexagram::from_bit_slice(&[1, 1, 1]),
            Err(CoreError::BitLength {
                expected: 6,
                found: 3
            })
        );
        assert_eq!(
            Hexagram::from_bit_slice(&[]),
            Err(CoreError::BitLength {
                expected: 6,
                found: 0
            })
        );
    }

    #[test]
    fn trigrams_invert_the_table() {
        for h in Hexagram::all() {
            let (lower, upper) = h.trigrams();
            assert_eq!(Hexagram::from_trigrams(lower, upper), h);
            assert_eq!(h.bits().hexagram(), h);
        }
        assert_eq!(Hexagram::new(37).unwrap().lower(), Trigram::Li);
        assert_eq!(Hexagram::new(37).unwrap().upper(), Trigram::Xun);
    }

    #[test]
    fn derived_hexagrams() {
        let family = Hexagram::new(37).unwrap();
        assert_eq!(family.nuclear().number(), 64);
        assert_eq!(family.complementary().number(), 40);
        assert_eq!(Hexagram::new(1).unwrap().complementary().number(), 2);
    }

    #[test]
    fn serde_as_number() {
        let h = Hexagram::new(14).unwrap();
        assert_eq!(serde_json::to_string(&h).unwrap(), "14");
        assert_eq!(serde_json::from_str::<Hexagram>("14").unwrap(), h);
        assert!(serde_json::from_str::<Hexagram>("0").is_err());
    }

    proptest! {
        #[test]
        fn every_number_round_trips_through_bits(n in 1u8..=64) {
            let h = Hexagram::new(n).unwrap();
            prop_assert_eq!(Hexagram::from_bits(h.bits()), h);
        }

        #[test]
        fn complementary_is_an_involution(n in 1u8..=64) {
            let h = Hexagram::new(n).unwrap();
            prop_assert_eq!(h.complementary().complementary(), h);
        }
    }
}
