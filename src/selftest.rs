// In: src/selftest.rs

//! Startup self-test.
//!
//! Confirms three things before a comparator is trusted:
//! 1.  The mixed-endian external byte form and the textual formatter agree on
//!     a known identifier.
//! 2.  The field-scan reference agrees with byte-wise and 128-bit integer
//!     ordering of the canonical bytes.
//! 3.  Each requested strategy agrees with the reference on every ordered pair
//!     of the reference identifiers and, in exhaustive mode, on single-byte
//!     mutations of them.
//!
//! A failure here means a kernel is wrong on this host; it is reported as
//! `GuidOrderError::SelfTestFailed` and never silently ignored.

use serde::Serialize;
use std::cmp::Ordering;
use std::time::Instant;

use crate::compare::{field_scan, Strategy};
use crate::error::GuidOrderError;
use crate::layout::corpus::REFERENCE_IDENTIFIERS;
use crate::layout::{Identifier, MixedEndianBytes, IDENTIFIER_LEN};

/// Mixed-endian bytes of a known identifier and the text they must format to.
const FORMATTER_SAMPLE: [u8; IDENTIFIER_LEN] = [
    0x09, 0x10, 0x00, 0x00, 0x09, 0x00, 0x08, 0x00, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, 0x00,
];
const FORMATTER_EXPECTED: &str = "00001009-0009-0008-0706-050403020100";

/// Byte values substituted at each position in exhaustive mode.
const MUTATION_VALUES: [u8; 6] = [0x00, 0x01, 0x7F, 0x80, 0xFE, 0xFF];

/// Summary of a successful self-test run.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SelfTestReport {
    /// Strategies checked against the reference.
    pub strategies: Vec<Strategy>,
    /// Of those, the ones that ran their own kernel rather than the fallback.
    pub native: Vec<Strategy>,
    /// Ordered pairs compared per strategy.
    pub pairs_per_strategy: usize,
    pub exhaustive: bool,
}

/// Runs the self-test over every strategy.
pub fn run_all(exhaustive: bool) -> Result<SelfTestReport, GuidOrderError> {
    run(&Strategy::ALL, exhaustive)
}

/// Runs the self-test for the given strategies.
pub fn run(strategies: &[Strategy], exhaustive: bool) -> Result<SelfTestReport, GuidOrderError> {
    let start = Instant::now();

    check_formatter()?;

    let pairs = test_pairs(exhaustive);
    check_reference(&pairs)?;
    for &strategy in strategies {
        check_strategy(strategy, &pairs)?;
    }

    let report = SelfTestReport {
        strategies: strategies.to_vec(),
        native: strategies.iter().copied().filter(|s| s.is_supported()).collect(),
        pairs_per_strategy: pairs.len(),
        exhaustive,
    };

    log::info!(
        "Self-test passed: {} strategies ({} native), {} pairs each, in {:?}",
        report.strategies.len(),
        report.native.len(),
        report.pairs_per_strategy,
        start.elapsed()
    );
    log_metric!(
        "event" = "self_test",
        "strategies" = report.strategies.len(),
        "pairs" = report.pairs_per_strategy,
        "exhaustive" = exhaustive,
        "elapsed_us" = start.elapsed().as_micros()
    );

    Ok(report)
}

//==================================================================================
// Checks
//==================================================================================

fn check_formatter() -> Result<(), GuidOrderError> {
    let id = Identifier::from_external(&MixedEndianBytes(FORMATTER_SAMPLE));
    let text = id.to_string();
    if text != FORMATTER_EXPECTED {
        return Err(GuidOrderError::SelfTestFailed(format!(
            "mixed-endian bytes formatted as {text}, expected {FORMATTER_EXPECTED}"
        )));
    }
    if MixedEndianBytes::from_identifier(&id) != MixedEndianBytes(FORMATTER_SAMPLE) {
        return Err(GuidOrderError::SelfTestFailed(format!(
            "{text} does not serialize back to its mixed-endian bytes"
        )));
    }
    Ok(())
}

fn check_reference(pairs: &[(Identifier, Identifier)]) -> Result<(), GuidOrderError> {
    for (x, y) in pairs {
        let (xb, yb) = (x.to_canonical_bytes(), y.to_canonical_bytes());
        let by_bytes = xb.cmp(&yb);
        let by_integer = u128::from_be_bytes(xb).cmp(&u128::from_be_bytes(yb));
        let by_fields = field_scan::compare(x, y);
        if by_bytes != by_integer || by_bytes != by_fields {
            return Err(GuidOrderError::SelfTestFailed(format!(
                "reference disagreement on {x} vs {y}: \
                 bytes {by_bytes:?}, integer {by_integer:?}, fields {by_fields:?}"
            )));
        }
    }
    Ok(())
}

fn check_strategy(
    strategy: Strategy,
    pairs: &[(Identifier, Identifier)],
) -> Result<(), GuidOrderError> {
    for (x, y) in pairs {
        let expected = field_scan::compare(x, y);
        let got = strategy.compare(x, y);
        let greater = strategy.greater_than(x, y);
        if got != expected || greater != (expected == Ordering::Greater) {
            log::error!(
                "Strategy '{}' disagrees with the reference on {} vs {}",
                strategy,
                x,
                y
            );
            return Err(GuidOrderError::SelfTestFailed(format!(
                "{strategy}: {x} vs {y} gave {got:?} (greater_than = {greater}), \
                 expected {expected:?}"
            )));
        }
    }
    Ok(())
}

//==================================================================================
// Pair generation
//==================================================================================

fn test_pairs(exhaustive: bool) -> Vec<(Identifier, Identifier)> {
    let mut pairs = Vec::with_capacity(REFERENCE_IDENTIFIERS.len() * REFERENCE_IDENTIFIERS.len());
    for x in REFERENCE_IDENTIFIERS.iter() {
        for y in REFERENCE_IDENTIFIERS.iter() {
            pairs.push((*x, *y));
        }
    }

    if exhaustive {
        for base in REFERENCE_IDENTIFIERS.iter() {
            let bytes = base.to_canonical_bytes();
            for position in 0..IDENTIFIER_LEN {
                for value in MUTATION_VALUES {
                    let mut mutated = bytes;
                    mutated[position] = value;
                    let mutated = Identifier::from_canonical_bytes(mutated);
                    pairs.push((*base, mutated));
                    pairs.push((mutated, *base));
                }
            }
        }
    }

    pairs
}
