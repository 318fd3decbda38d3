//! This module defines the identifier value type and its admissible
//! representations.
//!
//! - `identifier`: the mixed-endian in-memory struct, the canonical byte form
//!   and the textual form.
//! - `word`: the two-limb 128-bit unsigned word used by the `word128` kernel.
//! - `external`: conversion from identifiers produced by other libraries.
//! - `corpus`: the fixed reference identifiers.

pub mod corpus;
pub mod external;
pub mod identifier;
pub mod word;

pub use external::{ExternalIdentifier, MixedEndianBytes};
pub use identifier::{Identifier, IdentifierFields, IDENTIFIER_LEN};
pub use word::U128Word;

/// Builds an identifier from its eleven field values.
#[allow(clippy::too_many_arguments)]
pub const fn identifier_from_fields(
    a: u32,
    b: u16,
    c: u16,
    d: u8,
    e: u8,
    f: u8,
    g: u8,
    h: u8,
    i: u8,
    j: u8,
    k: u8,
) -> Identifier {
    Identifier::from_fields(a, b, c, d, e, f, g, h, i, j, k)
}

/// Builds an identifier from any producer of the eleven fields.
pub fn identifier_from_external<E>(external: &E) -> Identifier
where
    E: ExternalIdentifier + ?Sized,
{
    Identifier::from_external(external)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_from_fields_matches_associated_form() {
        const ID: Identifier = identifier_from_fields(0x1009, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0);
        assert_eq!(ID, Identifier::from_fields(0x1009, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0));
        assert_eq!(ID.to_string(), "00001009-0009-0008-0706-050403020100");
    }

    #[test]
    fn test_identifier_from_external_accepts_every_producer() {
        let expected = identifier_from_fields(0x1009, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0);
        let mixed = MixedEndianBytes([
            0x09, 0x10, 0x00, 0x00, 0x09, 0x00, 0x08, 0x00, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02,
            0x01, 0x00,
        ]);
        assert_eq!(identifier_from_external(&mixed), expected);
        assert_eq!(identifier_from_external(&expected.field_view()), expected);
        assert_eq!(
            identifier_from_external(&0x0000_1009_0009_0008_0706_0504_0302_0100u128),
            expected
        );

        let producer: &dyn ExternalIdentifier = &mixed;
        assert_eq!(identifier_from_external(producer), expected);
    }
}
