// In: src/layout/word.rs

//! A two-limb 128-bit unsigned word.
//!
//! The `word128` comparator reduces both identifiers to this type and compares
//! magnitudes. Two forms of the "greater than" test are kept: the
//! short-circuit boolean expression and the select form that branches once on
//! the upper limb. They are equivalent; the benches measure both.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct U128Word {
    upper: u64,
    lower: u64,
}

impl U128Word {
    pub const fn new(upper: u64, lower: u64) -> Self {
        Self { upper, lower }
    }

    #[inline(always)]
    pub const fn upper(&self) -> u64 {
        self.upper
    }

    #[inline(always)]
    pub const fn lower(&self) -> u64 {
        self.lower
    }

    /// `upper > upper || (upper == upper && lower > lower)`
    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        (self.upper > other.upper) || (self.upper == other.upper && self.lower > other.lower)
    }

    /// Same result as [`U128Word::greater_than`], branching once on the upper limb.
    #[inline]
    pub fn greater_than_select(&self, other: &Self) -> bool {
        if self.upper != other.upper {
            self.upper > other.upper
        } else {
            self.lower > other.lower
        }
    }

    #[inline]
    pub fn less_than(&self, other: &Self) -> bool {
        (self.upper < other.upper) || (self.upper == other.upper && self.lower < other.lower)
    }

    #[inline]
    pub fn less_than_select(&self, other: &Self) -> bool {
        if self.upper != other.upper {
            self.upper < other.upper
        } else {
            self.lower < other.lower
        }
    }
}

impl Ord for U128Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.upper
            .cmp(&other.upper)
            .then_with(|| self.lower.cmp(&other.lower))
    }
}

impl PartialOrd for U128Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u128> for U128Word {
    fn from(value: u128) -> Self {
        Self::new((value >> 64) as u64, value as u64)
    }
}

impl From<U128Word> for u128 {
    fn from(word: U128Word) -> Self {
        (u128::from(word.upper) << 64) | u128::from(word.lower)
    }
}
