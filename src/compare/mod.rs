// In: src/compare/mod.rs

//! The comparison strategies and the `Strategy` selector.
//!
//! Every strategy answers the same two questions, `greater_than` and
//! `compare`, and must agree with [`field_scan`] on every pair of identifiers.
//! The strategies differ only in how they reach the answer:
//!
//! - `field_scan`: field by field, byte by byte. The reference.
//! - `tail_word`: scalar head, then the tail as one 64-bit word.
//! - `word128`: both identifiers reduced to 128-bit unsigned words.
//! - `vector`: SSE2/SSSE3/AVX2 or NEON byte compares with a scalar fallback.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::capability::{self, CpuFeatures, Requirement};
use crate::error::GuidOrderError;
use crate::layout::Identifier;

mod arch;
pub mod field_scan;
pub mod tail_word;
pub mod vector;
pub mod word128;

#[cfg(test)]
mod strategy_tests;

/// A named comparison strategy.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Sequential field scan; the reference for all others.
    FieldScan,
    /// Scalar head, tail compared as one host-order word.
    TailWord,
    /// Two-limb 128-bit unsigned word.
    Word128,
    /// Scalar head, 8-lane tail compare.
    Vector64,
    /// Scalar head, 16-lane compare.
    Vector128,
    /// 16-lane compare after an in-register permutation into wire order.
    Vector128Shuffle,
    /// Scalar head, strict byte wins derived from the unsigned byte maximum.
    Vector128Max,
    /// Both identifiers in one 256-bit vector.
    Vector256,
}

impl Strategy {
    /// Every strategy, in the order reports list them.
    pub const ALL: [Strategy; 8] = [
        Strategy::FieldScan,
        Strategy::TailWord,
        Strategy::Word128,
        Strategy::Vector64,
        Strategy::Vector128,
        Strategy::Vector128Shuffle,
        Strategy::Vector128Max,
        Strategy::Vector256,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::FieldScan => "field_scan",
            Strategy::TailWord => "tail_word",
            Strategy::Word128 => "word128",
            Strategy::Vector64 => "vector64",
            Strategy::Vector128 => "vector128",
            Strategy::Vector128Shuffle => "vector128_shuffle",
            Strategy::Vector128Max => "vector128_max",
            Strategy::Vector256 => "vector256",
        }
    }

    pub fn requirement(self) -> Requirement {
        match self {
            Strategy::FieldScan | Strategy::TailWord | Strategy::Word128 => Requirement::None,
            Strategy::Vector64 | Strategy::Vector128 | Strategy::Vector128Max => {
                Requirement::Vector128
            }
            Strategy::Vector128Shuffle => Requirement::Shuffle128,
            Strategy::Vector256 => Requirement::Vector256,
        }
    }

    /// Whether the host runs this strategy's own kernel rather than the fallback.
    pub fn is_supported(self) -> bool {
        capability::features().supports(self)
    }

    /// The preferred strategy for this host: `Vector128` when a 128-bit byte
    /// compare is available, otherwise `TailWord`.
    pub fn best_available() -> Strategy {
        if Strategy::Vector128.is_supported() {
            Strategy::Vector128
        } else {
            Strategy::TailWord
        }
    }

    /// `true` iff `x` orders strictly after `y`.
    #[inline]
    pub fn greater_than(self, x: &Identifier, y: &Identifier) -> bool {
        match self {
            Strategy::FieldScan => field_scan::greater_than(x, y),
            Strategy::TailWord => tail_word::greater_than(x, y),
            Strategy::Word128 => word128::greater_than(x, y),
            Strategy::Vector64 => vector::greater_than_64(x, y),
            Strategy::Vector128 => vector::greater_than_128(x, y),
            Strategy::Vector128Shuffle => vector::greater_than_128_shuffle(x, y),
            Strategy::Vector128Max => vector::greater_than_128_max(x, y),
            Strategy::Vector256 => vector::greater_than_256(x, y),
        }
    }

    #[inline]
    pub fn compare(self, x: &Identifier, y: &Identifier) -> Ordering {
        match self {
            Strategy::FieldScan => field_scan::compare(x, y),
            Strategy::TailWord => tail_word::compare(x, y),
            Strategy::Word128 => word128::compare(x, y),
            Strategy::Vector64 => vector::compare_64(x, y),
            Strategy::Vector128 => vector::compare_128(x, y),
            Strategy::Vector128Shuffle => vector::compare_128_shuffle(x, y),
            Strategy::Vector128Max => vector::compare_128_max(x, y),
            Strategy::Vector256 => vector::compare_256(x, y),
        }
    }

    /// `greater_than` with vector kernels limited to `allowed`.
    ///
    /// `allowed` is intersected with the host probe, so it can only switch
    /// kernels off. `CpuFeatures::default()` forces every vector strategy onto
    /// its scalar fallback.
    pub fn greater_than_with(self, allowed: &CpuFeatures, x: &Identifier, y: &Identifier) -> bool {
        let caps = allowed.intersection(capability::features());
        match self {
            Strategy::FieldScan | Strategy::TailWord | Strategy::Word128 => {
                self.greater_than(x, y)
            }
            Strategy::Vector64 => vector::greater_than_64_with(&caps, x, y),
            Strategy::Vector128 => vector::greater_than_128_with(&caps, x, y),
            Strategy::Vector128Shuffle => vector::greater_than_128_shuffle_with(&caps, x, y),
            Strategy::Vector128Max => vector::greater_than_128_max_with(&caps, x, y),
            Strategy::Vector256 => vector::greater_than_256_with(&caps, x, y),
        }
    }

    /// `compare` with vector kernels limited to `allowed`; see [`Strategy::greater_than_with`].
    pub fn compare_with(self, allowed: &CpuFeatures, x: &Identifier, y: &Identifier) -> Ordering {
        let caps = allowed.intersection(capability::features());
        match self {
            Strategy::FieldScan | Strategy::TailWord | Strategy::Word128 => self.compare(x, y),
            Strategy::Vector64 => vector::compare_64_with(&caps, x, y),
            Strategy::Vector128 => vector::compare_128_with(&caps, x, y),
            Strategy::Vector128Shuffle => vector::compare_128_shuffle_with(&caps, x, y),
            Strategy::Vector128Max => vector::compare_128_max_with(&caps, x, y),
            Strategy::Vector256 => vector::compare_256_with(&caps, x, y),
        }
    }

    /// `compare` as the signed integer -1, 0 or 1.
    #[inline]
    pub fn compare_sign(self, x: &Identifier, y: &Identifier) -> i32 {
        self.compare(x, y) as i32
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = GuidOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Strategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| GuidOrderError::UnknownStrategy(s.to_string()))
    }
}
