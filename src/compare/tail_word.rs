//! Tail-as-word reduction.
//!
//! After the head fields are resolved, the eight tail bytes of each side are
//! loaded as one host-order `u64`. Because the tail is never byte-swapped, the
//! first differing byte in wire order is found from the XOR of the two words:
//! on little-endian hosts it holds the least significant differing bit, on
//! big-endian hosts the most significant one. The bit index is rounded down to
//! a byte boundary before extracting the byte pair, since the order is decided
//! by whole bytes.

use std::cmp::Ordering;

use crate::layout::Identifier;
use crate::traits::{differing_order, HasUnsigned};

#[inline(always)]
fn load_tail(id: &Identifier) -> u64 {
    u64::from_ne_bytes(id.tail)
}

/// Finds the first differing tail byte pair (wire order) of two tail words.
#[inline(always)]
pub(crate) fn first_differing_tail_bytes(x_tail: u64, y_tail: u64) -> Option<(u8, u8)> {
    let diff = x_tail ^ y_tail;
    if diff == 0 {
        return None;
    }

    let bit = if cfg!(target_endian = "little") {
        diff.trailing_zeros()
    } else {
        63 - diff.leading_zeros()
    };
    // Align to byte boundaries.
    let shift = bit - bit % 8;
    Some(((x_tail >> shift) as u8, (y_tail >> shift) as u8))
}

/// The most significant differing field pair, widened to `u32`.
///
/// Head fields are reported through their unsigned view; a tail difference is
/// reported as the differing byte pair. Equal identifiers report `None`.
pub fn most_significant_difference(x: &Identifier, y: &Identifier) -> Option<(u32, u32)> {
    if x.a != y.a {
        return Some((x.a.to_unsigned(), y.a.to_unsigned()));
    }
    if x.b != y.b {
        return Some((x.b.to_unsigned().into(), y.b.to_unsigned().into()));
    }
    if x.c != y.c {
        return Some((x.c.to_unsigned().into(), y.c.to_unsigned().into()));
    }
    first_differing_tail_bytes(load_tail(x), load_tail(y)).map(|(l, r)| (l.into(), r.into()))
}

pub fn greater_than(x: &Identifier, y: &Identifier) -> bool {
    if x.a != y.a {
        return x.a.to_unsigned() > y.a.to_unsigned();
    }
    if x.b != y.b {
        return x.b.to_unsigned() > y.b.to_unsigned();
    }
    if x.c != y.c {
        return x.c.to_unsigned() > y.c.to_unsigned();
    }
    match first_differing_tail_bytes(load_tail(x), load_tail(y)) {
        Some((l, r)) => l > r,
        None => false,
    }
}

pub fn compare(x: &Identifier, y: &Identifier) -> Ordering {
    match most_significant_difference(x, y) {
        Some((l, r)) => differing_order(l, r),
        None => Ordering::Equal,
    }
}
