//! Sequential field scan: the reference comparator.
//!
//! Compares `a`, then `b`, then `c` through their unsigned views, then the tail
//! one unsigned byte at a time, stopping at the first inequality. Every other
//! kernel is checked against this one.

use std::cmp::Ordering;

use crate::layout::Identifier;
use crate::traits::{differing_order, HasUnsigned};

/// Orders two identifiers by their head fields alone.
///
/// Returns `None` when `a`, `b` and `c` are all equal and the tail decides.
/// Shared by every kernel that resolves the head with scalar code first.
#[inline(always)]
pub(crate) fn head_order(x: &Identifier, y: &Identifier) -> Option<Ordering> {
    if x.a != y.a {
        return Some(differing_order(x.a.to_unsigned(), y.a.to_unsigned()));
    }
    if x.b != y.b {
        return Some(differing_order(x.b.to_unsigned(), y.b.to_unsigned()));
    }
    if x.c != y.c {
        return Some(differing_order(x.c.to_unsigned(), y.c.to_unsigned()));
    }
    None
}

/// Byte-at-a-time tail comparison.
#[inline(always)]
pub(crate) fn tail_order(x: &Identifier, y: &Identifier) -> Ordering {
    for (l, r) in x.tail.iter().zip(y.tail.iter()) {
        if l != r {
            return differing_order(*l, *r);
        }
    }
    Ordering::Equal
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
    for (l, r) in x.tail.iter().zip(y.tail.iter()) {
        if l != r {
            return l > r;
        }
    }
    false
}

pub fn compare(x: &Identifier, y: &Identifier) -> Ordering {
    head_order(x, y).unwrap_or_else(|| tail_order(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::corpus::*;

    #[test]
    fn test_matches_canonical_bytes_on_corpus() {
        for x in REFERENCE_IDENTIFIERS.iter() {
            for y in REFERENCE_IDENTIFIERS.iter() {
                let expected = x.to_canonical_bytes().cmp(&y.to_canonical_bytes());
                assert_eq!(compare(x, y), expected, "{} vs {}", x, y);
                assert_eq!(greater_than(x, y), expected == Ordering::Greater, "{} > {}", x, y);
            }
        }
    }

    #[test]
    fn test_head_fields_compare_unsigned() {
        assert!(greater_than(&HIGH_C, &LOW_C));
        assert_eq!(compare(&LOW_C, &HIGH_C), Ordering::Less);

        let high_a = Identifier::from_fields(0x8000_0000, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0);
        let low_a = Identifier::from_fields(
            0x7FFF_FFFF,
            0xFFFF,
            0xFFFF,
            0xFF,
            0xFF,
            0xFF,
            0xFF,
            0xFF,
            0xFF,
            0xFF,
            0xFF,
        );
        assert!(greater_than(&high_a, &low_a));
    }

    #[test]
    fn test_head_order_is_none_for_equal_heads() {
        assert_eq!(head_order(&BASE_B6, &BASE_B7), None);
        assert_eq!(head_order(&BASE_A, &BASE_B), Some(Ordering::Less));
    }
}
