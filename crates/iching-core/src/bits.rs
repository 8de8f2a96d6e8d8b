//! Yin/yang bit sequences and the derived hexagram transforms.
//!
//! Bits run bottom (index 0) to top (index 5), the same order as the lines
//! they were projected from. 0 is yin, 1 is yang.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::hexagram::Hexagram;
use crate::line::{LineValue, Lines};
use crate::trigram::Trigram;

/// Six yin/yang bits, bottom first. Every position holds 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 6]", into = "[u8; 6]")]
pub struct Bits([u8; 6]);

impl Bits {
    /// Number of bits in a hexagram.
    pub const LEN: usize = 6;

    /// Validate six bits, bottom first.
    pub fn new(bits: [u8; 6]) -> CoreResult<Self> {
        if let Some(&bad) = bits.iter().find(|&&b| b > 1) {
            return Err(CoreError::InvalidBit(bad));
        }
        Ok(Self(bits))
    }

    /// Validate a bit slice, which must hold exactly six bits.
    pub fn from_slice(bits: &[u8]) -> CoreResult<Self> {
        let array: [u8; 6] = bits.try_into().map_err(|_| CoreError::BitLength {
            expected: Self::LEN,
            found: bits.len(),
        })?;
        Self::new(array)
    }

    /// Parse a bit string written bottom line first, e.g. `"101011"`.
    pub fn parse(input: &str) -> CoreResult<Self> {
        let bits = input
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .map(|c| match c {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(CoreError::InvalidDigit(other)),
            })
            .collect::<CoreResult<Vec<u8>>>()?;
        Self::from_slice(&bits)
    }

    /// Project cast lines onto bits: 1 for 7 and 9, 0 for 6 and 8.
    pub fn from_lines(lines: &Lines) -> Self {
        let values = *lines.values();
        Self(values.map(LineValue::bit))
    }

    /// Stack a lower and an upper trigram.
    pub fn from_trigrams(lower: Trigram, upper: Trigram) -> Self {
        let [a, b, c] = lower.bits();
        let [d, e, f] = upper.bits();
        Self([a, b, c, d, e, f])
    }

    /// The bits as an array, bottom first.
    pub fn as_array(&self) -> [u8; 6] {
        self.0
    }

    /// Bit at `index` (0 = bottom line), or `None` past the top.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Bits of the lower trigram (lines 1-3).
    pub fn lower(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    /// Bits of the upper trigram (lines 4-6).
    pub fn upper(&self) -> [u8; 3] {
        [self.0[3], self.0[4], self.0[5]]
    }

    /// The lower trigram.
    pub fn lower_trigram(&self) -> Trigram {
        Trigram::from_valid_bits(self.lower())
    }

    /// The upper trigram.
    pub fn upper_trigram(&self) -> Trigram {
        Trigram::from_valid_bits(self.upper())
    }

    /// Resolve these bits to their King Wen hexagram.
    pub fn hexagram(&self) -> Hexagram {
        Hexagram::from_bits(*self)
    }

    /// Flip every line.
    pub fn complementary(&self) -> Self {
        Self(self.0.map(|b| b ^ 1))
    }

    /// Regroup the middle four lines into two overlapping trigrams.
    ///
    /// The new lower trigram is lines 2-4 and the new upper is lines 3-5;
    /// the bottom and top lines drop out.
    pub fn nuclear(&self) -> Self {
        let b = self.0;
        Self([b[1], b[2], b[3], b[2], b[3], b[4]])
    }
}

impl TryFrom<[u8; 6]> for Bits {
    type Error = CoreError;

    fn try_from(bits: [u8; 6]) -> CoreResult<Self> {
        Self::new(bits)
    }
}

impl From<Bits> for [u8; 6] {
    fn from(bits: Bits) -> Self {
        bits.0
    }
}

impl std::fmt::Display for Bits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for b in self.0 {
            write!(f, "{b}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bits(raw: [u8; 6]) -> Bits {
        Bits::new(raw).unwrap()
    }

    #[test]
    fn nuclear_and_complementary_of_the_family() {
        let primary = bits([1, 0, 1, 0, 1, 1]);
        assert_eq!(primary.nuclear().as_array(), [0, 1, 0, 1, 0, 1]);
        assert_eq!(primary.complementary().as_array(), [0, 1, 0, 1, 0, 0]);

        assert_eq!(primary.hexagram().number(), 37);
        assert_eq!(primary.nuclear().hexagram().number(), 64);
        assert_eq!(primary.complementary().hexagram().number(), 40);
    }

    #[test]
    fn nuclear_of_pure_hexagrams_is_itself() {
        let heaven = bits([1; 6]);
        let earth = bits([0; 6]);
        assert_eq!(heaven.nuclear(), heaven);
        assert_eq!(earth.nuclear(), earth);
    }

    #[test]
    fn trigram_halves() {
        let b = bits([1, 1, 0, 0, 1, 0]);
        assert_eq!(b.lower(), [1, 1, 0]);
        assert_eq!(b.upper(), [0, 1, 0]);
        assert_eq!(b.lower_trigram(), Trigram::Dui);
        assert_eq!(b.upper_trigram(), Trigram::Kan);
        assert_eq!(Bits::from_trigrams(Trigram::Dui, Trigram::Kan), b);
    }

    #[test]
    fn construction_rejects_bad_input() {
        assert_eq!(Bits::new([1, 0, 2, 0, 0, 0]), Err(CoreError::InvalidBit(2)));
        assert_eq!(
            Bits::from_slice(&[1, 0, 1]),
            Err(CoreError::BitLength {
                expected: 6,
                found: 3
            })
        );
        assert_eq!(
            Bits::from_slice(&[1, 0, 1, 0, 1, 0, 1]),
            Err(CoreError::BitLength {
                expected: 6,
                found: 7
            })
        );
    }

    #[test]
    fn parse_bit_strings() {
        assert_eq!(Bits::parse("101011").unwrap(), bits([1, 0, 1, 0, 1, 1]));
        assert_eq!(Bits::parse("1,0,1,0,1,1").unwrap(), bits([1, 0, 1, 0, 1, 1]));
        assert_eq!(Bits::parse("10102x"), Err(CoreError::InvalidDigit('2')));
        assert!(matches!(
            Bits::parse("1010"),
            Err(CoreError::BitLength { found: 4, .. })
        ));
    }

    #[test]
    fn get_past_top_is_none() {
        let b = bits([0, 0, 0, 0, 0, 1]);
        assert_eq!(b.get(5), Some(1));
        assert_eq!(b.get(6), None);
    }

    #[test]
    fn display_and_serde() {
        let b = bits([1, 0, 1, 0, 1, 1]);
        assert_eq!(b.to_string(), "101011");
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, "[1,0,1,0,1,1]");
        assert!(serde_json::from_str::<Bits>("[1,0,1,0,1,3]").is_err());
    }

    fn any_bits() -> impl Strategy<Value = Bits> {
        prop::array::uniform6(0u8..=1).prop_map(|raw| Bits::new(raw).unwrap())
    }

    proptest! {
        #[test]
        fn complementary_is_an_involution(b in any_bits()) {
            prop_assert_eq!(b.complementary().complementary(), b);
        }

        #[test]
        fn complementary_differs_everywhere(b in any_bits()) {
            let c = b.complementary();
            for i in 0..Bits::LEN {
                prop_assert_ne!(b.get(i), c.get(i));
            }
        }

        #[test]
        fn nuclear_shares_the_middle_lines(b in any_bits()) {
            let n = b.nuclear();
            prop_assert_eq!(n.get(2), b.get(3));
            prop_assert_eq!(n.get(3), b.get(2));
            prop_assert_eq!(n.get(1), n.get(3));
            prop_assert_eq!(n.get(2), n.get(4));
        }

        #[test]
        fn resolution_is_deterministic(b in any_bits()) {
            prop_assert_eq!(b.hexagram(), b.hexagram());
            prop_assert_eq!(b.hexagram().bits(), b);
        }
    }
}
