//! Vector comparators.
//!
//! All variants find the first unequal byte in wire order with a per-byte
//! equality mask and then compare that byte pair unsigned. They differ in how
//! they cope with the host-order head fields:
//!
//! - `*_64` and `*_128` resolve `a`, `b`, `c` with scalar code first. Once the
//!   heads are equal their bytes are equal in any order, so the tail (already
//!   in wire order) is the only place a difference can remain.
//! - `*_128_shuffle` and `*_256` permute the head bytes into wire order inside
//!   the register and scan all sixteen bytes at once.
//! - `*_128_max` derives strict per-byte "greater" masks from the unsigned
//!   byte maximum of both sides; the side whose first strict win comes first
//!   is the greater one.
//!
//! Every function falls back to the sequential field scan when the probe did
//! not confirm the instruction set it needs. The crate-internal `*_with` forms
//! take the feature set explicitly so a restricted set can force that path.

use std::cmp::Ordering;

use super::arch;
use super::field_scan::{self, head_order};
use crate::capability::{features, CpuFeatures};
use crate::layout::Identifier;
use crate::traits::differing_order;

const ALL_EQUAL_8: u32 = 0xFF;
const ALL_EQUAL_16: u32 = 0xFFFF;

/// Orders the byte pair at the first cleared bit of `eq_mask`.
#[inline(always)]
fn order_at_first_unequal(x: &[u8], y: &[u8], eq_mask: u32, all_equal: u32) -> Ordering {
    if eq_mask == all_equal {
        return Ordering::Equal;
    }
    let first = (!eq_mask).trailing_zeros() as usize;
    differing_order(x[first], y[first])
}

#[inline(always)]
fn greater_at_first_unequal(x: &[u8], y: &[u8], eq_mask: u32, all_equal: u32) -> bool {
    if eq_mask == all_equal {
        return false;
    }
    let first = (!eq_mask).trailing_zeros() as usize;
    x[first] > y[first]
}

//==================================================================================
// 1. Scalar head, 8-lane tail
//==================================================================================

pub fn greater_than_64(x: &Identifier, y: &Identifier) -> bool {
    greater_than_64_with(features(), x, y)
}

pub fn compare_64(x: &Identifier, y: &Identifier) -> Ordering {
    compare_64_with(features(), x, y)
}

pub(crate) fn greater_than_64_with(caps: &CpuFeatures, x: &Identifier, y: &Identifier) -> bool {
    if let Some(order) = head_order(x, y) {
        return order == Ordering::Greater;
    }
    match arch::eq_mask_64(caps, x.tail(), y.tail()) {
        Some(mask) => greater_at_first_unequal(x.tail(), y.tail(), mask, ALL_EQUAL_8),
        None => field_scan::tail_order(x, y) == Ordering::Greater,
    }
}

pub(crate) fn compare_64_with(caps: &CpuFeatures, x: &Identifier, y: &Identifier) -> Ordering {
    if let Some(order) = head_order(x, y) {
        return order;
    }
    match arch::eq_mask_64(caps, x.tail(), y.tail()) {
        Some(mask) => order_at_first_unequal(x.tail(), y.tail(), mask, ALL_EQUAL_8),
        None => field_scan::tail_order(x, y),
    }
}

//==================================================================================
// 2. Scalar head, 16-lane compare
//==================================================================================

pub fn greater_than_128(x: &Identifier, y: &Identifier) -> bool {
    greater_than_128_with(features(), x, y)
}

pub fn compare_128(x: &Identifier, y: &Identifier) -> Ordering {
    compare_128_with(features(), x, y)
}

pub(crate) fn greater_than_128_with(caps: &CpuFeatures, x: &Identifier, y: &Identifier) -> bool {
    if let Some(order) = head_order(x, y) {
        return order == Ordering::Greater;
    }
    // Only ordered bytes can still differ, so no shuffle is needed.
    let (xb, yb) = (x.as_native_bytes(), y.as_native_bytes());
    match arch::eq_mask_128(caps, xb, yb) {
        Some(mask) => greater_at_first_unequal(xb, yb, mask, ALL_EQUAL_16),
        None => field_scan::tail_order(x, y) == Ordering::Greater,
    }
}

pub(crate) fn compare_128_with(caps: &CpuFeatures, x: &Identifier, y: &Identifier) -> Ordering {
    if let Some(order) = head_order(x, y) {
        return order;
    }
    let (xb, yb) = (x.as_native_bytes(), y.as_native_bytes());
    match arch::eq_mask_128(caps, xb, yb) {
        Some(mask) => order_at_first_unequal(xb, yb, mask, ALL_EQUAL_16),
        None => field_scan::tail_order(x, y),
    }
}

//==================================================================================
// 3. In-register shuffle into wire order
//==================================================================================

pub fn greater_than_128_shuffle(x: &Identifier, y: &Identifier) -> bool {
    greater_than_128_shuffle_with(features(), x, y)
}

pub fn compare_128_shuffle(x: &Identifier, y: &Identifier) -> Ordering {
    compare_128_shuffle_with(features(), x, y)
}

pub(crate) fn greater_than_128_shuffle_with(
    caps: &CpuFeatures,
    x: &Identifier,
    y: &Identifier,
) -> bool {
    match arch::shuffled_first_difference(caps, x.as_native_bytes(), y.as_native_bytes()) {
        Some(Some((l, r))) => l > r,
        Some(None) => false,
        None => field_scan::greater_than(x, y),
    }
}

pub(crate) fn compare_128_shuffle_with(
    caps: &CpuFeatures,
    x: &Identifier,
    y: &Identifier,
) -> Ordering {
    match arch::shuffled_first_difference(caps, x.as_native_bytes(), y.as_native_bytes()) {
        Some(Some((l, r))) => differing_order(l, r),
        Some(None) => Ordering::Equal,
        None => field_scan::compare(x, y),
    }
}

//==================================================================================
// 4. Unsigned byte maximum
//==================================================================================

pub fn greater_than_128_max(x: &Identifier, y: &Identifier) -> bool {
    greater_than_128_max_with(features(), x, y)
}

pub fn compare_128_max(x: &Identifier, y: &Identifier) -> Ordering {
    compare_128_max_with(features(), x, y)
}

pub(crate) fn greater_than_128_max_with(
    caps: &CpuFeatures,
    x: &Identifier,
    y: &Identifier,
) -> bool {
    if let Some(order) = head_order(x, y) {
        return order == Ordering::Greater;
    }
    match arch::strict_greater_masks_128(caps, x.as_native_bytes(), y.as_native_bytes()) {
        Some((x_wins, y_wins)) => x_wins.trailing_zeros() < y_wins.trailing_zeros(),
        None => field_scan::tail_order(x, y) == Ordering::Greater,
    }
}

pub(crate) fn compare_128_max_with(
    caps: &CpuFeatures,
    x: &Identifier,
    y: &Identifier,
) -> Ordering {
    if let Some(order) = head_order(x, y) {
        return order;
    }
    match arch::strict_greater_masks_128(caps, x.as_native_bytes(), y.as_native_bytes()) {
        // The earlier first win is the greater side; no wins on either side means equal.
        Some((x_wins, y_wins)) => y_wins.trailing_zeros().cmp(&x_wins.trailing_zeros()),
        None => field_scan::tail_order(x, y),
    }
}

//==================================================================================
// 5. Both identifiers in one 256-bit vector
//==================================================================================

pub fn greater_than_256(x: &Identifier, y: &Identifier) -> bool {
    greater_than_256_with(features(), x, y)
}

pub fn compare_256(x: &Identifier, y: &Identifier) -> Ordering {
    compare_256_with(features(), x, y)
}

pub(crate) fn greater_than_256_with(caps: &CpuFeatures, x: &Identifier, y: &Identifier) -> bool {
    match arch::wide_first_difference(caps, x.as_native_bytes(), y.as_native_bytes()) {
        Some(Some((l, r))) => l > r,
        Some(None) => false,
        None => field_scan::greater_than(x, y),
    }
}

pub(crate) fn compare_256_with(caps: &CpuFeatures, x: &Identifier, y: &Identifier) -> Ordering {
    match arch::wide_first_difference(caps, x.as_native_bytes(), y.as_native_bytes()) {
        Some(Some((l, r))) => differing_order(l, r),
        Some(None) => Ordering::Equal,
        None => field_scan::compare(x, y),
    }
}
