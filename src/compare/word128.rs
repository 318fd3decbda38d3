//! 128-bit unsigned-word comparison: reduce both sides with `to_u128` and
//! compare limbs. The simplest kernel to reason about, and a second oracle.

use std::cmp::Ordering;

use crate::layout::Identifier;

pub fn greater_than(x: &Identifier, y: &Identifier) -> bool {
    x.to_u128().greater_than_select(&y.to_u128())
}

pub fn compare(x: &Identifier, y: &Identifier) -> Ordering {
    x.to_u128().cmp(&y.to_u128())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::corpus::REFERENCE_IDENTIFIERS;

    #[test]
    fn test_word_order_equals_canonical_byte_order() {
        for x in REFERENCE_IDENTIFIERS.iter() {
            for y in REFERENCE_IDENTIFIERS.iter() {
                let expected = x.to_canonical_bytes().cmp(&y.to_canonical_bytes());
                assert_eq!(compare(x, y), expected, "{} vs {}", x, y);
                assert_eq!(greater_than(x, y), expected == Ordering::Greater);
            }
        }
    }
}
