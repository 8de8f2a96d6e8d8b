//! Line values and six-line sequences.
//!
//! A line is cast with three coins and lands on 6, 7, 8 or 9. Six lines,
//! cast from the bottom up, make one hexagram. Old lines (6 and 9) are
//! changing: they flip polarity to form the relation hexagram.

pub mod toss;

pub use toss::{Coin, CoinToss, toss_line};

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::bits::Bits;
use crate::error::{CoreError, CoreResult};
use crate::hexagram::Hexagram;

/// The value of a single cast line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LineValue {
    /// 6: yin, changing into yang.
    OldYin,
    /// 7: yang, stable.
    YoungYang,
    /// 8: yin, stable.
    YoungYin,
    /// 9: yang, changing into yin.
    OldYang,
}

impl LineValue {
    /// All line values in numeric order.
    pub const ALL: [Self; 4] = [Self::OldYin, Self::YoungYang, Self::YoungYin, Self::OldYang];

    /// The traditional number of this line (6-9).
    pub fn value(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Build a line value from its number.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            6 => Some(Self::OldYin),
            7 => Some(Self::YoungYang),
            8 => Some(Self::YoungYin),
            9 => Some(Self::OldYang),
            _ => None,
        }
    }

    /// Whether the line is solid (7 or 9).
    pub fn is_yang(self) -> bool {
        matches!(self, Self::YoungYang | Self::OldYang)
    }

    /// Whether the line is broken (6 or 8).
    pub fn is_yin(self) -> bool {
        !self.is_yang()
    }

    /// Whether the line is old and therefore changing (6 or 9).
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// The yin/yang bit of this line: 1 for yang, 0 for yin.
    pub fn bit(self) -> u8 {
        u8::from(self.is_yang())
    }

    /// The settled form of this line: 6 becomes 7, 9 becomes 8.
    pub fn mutated(self) -> Self {
        match self {
            Self::OldYin => Self::YoungYang,
            Self::OldYang => Self::YoungYin,
            other => other,
        }
    }

    /// A short human-readable description.
    pub fn label(self) -> &'static str {
        match self {
            Self::OldYin => "old yin (changing)",
            Self::YoungYang => "young yang",
            Self::YoungYin => "young yin",
            Self::OldYang => "old yang (changing)",
        }
    }
}

impl TryFrom<u8> for LineValue {
    type Error = CoreError;

    fn try_from(value: u8) -> CoreResult<Self> {
        Self::from_value(value).ok_or(CoreError::InvalidLineValue(value))
    }
}

impl From<LineValue> for u8 {
    fn from(line: LineValue) -> Self {
        line.value()
    }
}

impl std::fmt::Display for LineValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Six lines ordered bottom (index 0) to top (index 5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lines([LineValue; 6]);

impl Lines {
    /// Number of lines in a hexagram.
    pub const COUNT: usize = 6;

    /// Wrap six line values, bottom first.
    pub fn new(lines: [LineValue; 6]) -> Self {
        Self(lines)
    }

    /// Cast six lines with three coins each, from the bottom up.
    pub fn toss(rng: &mut StdRng) -> Self {
        let lines = Self(std::array::from_fn(|_| toss_line(rng)));
        log::debug!("tossed lines {lines}");
        lines
    }

    /// Build lines from the six coin tosses that produced them.
    pub fn from_tosses(tosses: &[CoinToss; 6]) -> Self {
        Self(std::array::from_fn(|i| tosses[i].line()))
    }

    /// Build lines from raw numbers, bottom first.
    pub fn from_values(values: &[u8]) -> CoreResult<Self> {
        if values.len() != Self::COUNT {
            return Err(CoreError::LineCount(values.len()));
        }
        let mut lines = [LineValue::YoungYin; 6];
        for (slot, value) in lines.iter_mut().zip(values) {
            *slot = LineValue::try_from(*value)?;
        }
        Ok(Self(lines))
    }

    /// Parse lines from text such as `"9,8,9,8,9,8"` or `"989898"`.
    ///
    /// Commas and whitespace separate values; every other character must be
    /// a digit.
    pub fn parse(input: &str) -> CoreResult<Self> {
        let mut values = Vec::with_capacity(Self::COUNT);
        for c in input.chars() {
            if c == ',' || c.is_whitespace() {
                continue;
            }
            let digit = c.to_digit(10).ok_or(CoreError::InvalidDigit(c))?;
            values.push(digit as u8);
        }
        Self::from_values(&values)
    }

    /// The line values, bottom first.
    pub fn values(&self) -> &[LineValue; 6] {
        &self.0
    }

    /// Iterate over the lines, bottom first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = LineValue> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }

    /// Project the lines onto yin/yang bits.
    pub fn bits(&self) -> Bits {
        Bits::from_lines(self)
    }

    /// Settle every changing line into its opposite.
    pub fn mutate(&self) -> Self {
        Self(self.0.map(LineValue::mutated))
    }

    /// Zero-based indices of the changing lines, bottom first.
    pub fn changing_indices(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_changing())
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether any line is changing.
    pub fn has_changing(&self) -> bool {
        self.0.iter().any(|line| line.is_changing())
    }

    /// The hexagram formed by the lines as cast.
    pub fn primary(&self) -> Hexagram {
        self.bits().hexagram()
    }

    /// The hexagram formed after the changing lines settle.
    pub fn relation(&self) -> Hexagram {
        self.mutate().bits().hexagram()
    }
}

impl std::fmt::Display for Lines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", values.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    use super::LineValue::{OldYang, OldYin, YoungYang, YoungYin};

    #[test]
    fn line_value_numbers() {
        let values: Vec<u8> = LineValue::ALL.iter().map(|v| v.value()).collect();
        assert_eq!(values, vec![6, 7, 8, 9]);
        assert_eq!(LineValue::from_value(5), None);
        assert_eq!(LineValue::from_value(10), None);
        assert_eq!(LineValue::try_from(9), Ok(OldYang));
        assert_eq!(LineValue::try_from(3), Err(CoreError::InvalidLineValue(3)));
    }

    #[test]
    fn polarity_and_change() {
        assert!(YoungYang.is_yang() && OldYang.is_yang());
        assert!(YoungYin.is_yin() && OldYin.is_yin());
        assert!(OldYin.is_changing() && OldYang.is_changing());
        assert!(!YoungYin.is_changing() && !YoungYang.is_changing());
        assert_eq!(OldYang.bit(), 1);
        assert_eq!(OldYin.bit(), 0);
    }

    #[test]
    fn mutation_rule() {
        assert_eq!(OldYin.mutated(), YoungYang);
        assert_eq!(OldYang.mutated(), YoungYin);
        assert_eq!(YoungYang.mutated(), YoungYang);
        assert_eq!(YoungYin.mutated(), YoungYin);
    }

    #[test]
    fn alternating_old_yang_settles_to_all_yin() {
        let lines = Lines::from_values(&[9, 8, 9, 8, 9, 8]).unwrap();
        assert_eq!(lines.bits().as_array(), [1, 0, 1, 0, 1, 0]);

        let mutated = lines.mutate();
        assert_eq!(mutated, Lines::new([YoungYin; 6]));
        assert_eq!(mutated.bits().as_array(), [0; 6]);
        assert_eq!(lines.relation().number(), 2);
    }

    #[test]
    fn mutate_without_changing_lines_is_identity() {
        let lines = Lines::from_values(&[7, 8, 7, 7, 8, 8]).unwrap();
        assert!(!lines.has_changing());
        assert_eq!(lines.mutate(), lines);
        assert_eq!(lines.primary(), lines.relation());
    }

    #[test]
    fn changing_indices_bottom_first() {
        let lines = Lines::from_values(&[6, 7, 9, 8, 8, 9]).unwrap();
        assert_eq!(lines.changing_indices(), vec![0, 2, 5]);
        assert!(lines.has_changing());
    }

    #[test]
    fn from_values_rejects_bad_input() {
        assert_eq!(
            Lines::from_values(&[7, 7, 7]),
            Err(CoreError::LineCount(3))
        );
        assert_eq!(
            Lines::from_values(&[7, 7, 7, 7, 7, 5]),
            Err(CoreError::InvalidLineValue(5))
        );
    }

    #[test]
    fn parse_accepts_separators() {
        let a = Lines::parse("9,8,9,8,9,8").unwrap();
        let b = Lines::parse("9 8 9 8 9 8").unwrap();
        let c = Lines::parse("989898").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(Lines::parse("9,8,x"), Err(CoreError::InvalidDigit('x')));
        assert_eq!(Lines::parse("9,8"), Err(CoreError::LineCount(2)));
    }

    #[test]
    fn toss_is_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(Lines::toss(&mut rng1), Lines::toss(&mut rng2));
    }

    #[test]
    fn display_and_serde() {
        let lines = Lines::from_values(&[6, 7, 8, 9, 7, 8]).unwrap();
        assert_eq!(lines.to_string(), "6,7,8,9,7,8");
        let json = serde_json::to_string(&lines).unwrap();
        assert_eq!(json, "[6,7,8,9,7,8]");
        let back: Lines = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lines);
        assert!(serde_json::from_str::<Lines>("[6,7,8,9,7,5]").is_err());
    }
}
