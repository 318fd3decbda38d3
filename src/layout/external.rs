// In: src/layout/external.rs

//! Conversion from identifiers produced elsewhere.
//!
//! An external identifier is anything that can hand over the eleven field
//! values of the shared `a-b-c-d..k` decomposition. Nothing else about the
//! external type is relied upon.

use super::identifier::{Identifier, IdentifierFields, IDENTIFIER_LEN};

/// A producer of the eleven identifier fields.
pub trait ExternalIdentifier {
    fn to_fields(&self) -> IdentifierFields;
}

impl Identifier {
    /// Field-for-field reinterpretation of an external identifier.
    pub fn from_external<E>(external: &E) -> Self
    where
        E: ExternalIdentifier + ?Sized,
    {
        Identifier::from(external.to_fields())
    }
}

impl ExternalIdentifier for IdentifierFields {
    fn to_fields(&self) -> IdentifierFields {
        *self
    }
}

/// A 128-bit integer holding the identifier in canonical (big-endian) order.
impl ExternalIdentifier for u128 {
    fn to_fields(&self) -> IdentifierFields {
        let v = *self;
        IdentifierFields {
            a: (v >> 96) as u32,
            b: (v >> 80) as u16,
            c: (v >> 64) as u16,
            d: (v >> 56) as u8,
            e: (v >> 48) as u8,
            f: (v >> 40) as u8,
            g: (v >> 32) as u8,
            h: (v >> 24) as u8,
            i: (v >> 16) as u8,
            j: (v >> 8) as u8,
            k: v as u8,
        }
    }
}

/// The common 16-byte serialization of the external format: `a`, `b` and `c`
/// little-endian regardless of host, `d..k` as-is.
///
/// This is an explicit byte-level reinterpretation; the startup self-test
/// validates it against the canonical formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedEndianBytes(pub [u8; IDENTIFIER_LEN]);

impl ExternalIdentifier for MixedEndianBytes {
    fn to_fields(&self) -> IdentifierFields {
        let bytes = &self.0;
        IdentifierFields {
            a: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            b: u16::from_le_bytes([bytes[4], bytes[5]]),
            c: u16::from_le_bytes([bytes[6], bytes[7]]),
            d: bytes[8],
            e: bytes[9],
            f: bytes[10],
            g: bytes[11],
            h: bytes[12],
            i: bytes[13],
            j: bytes[14],
            k: bytes[15],
        }
    }
}

impl MixedEndianBytes {
    /// Serializes an identifier into the mixed-endian byte form.
    pub fn from_identifier(id: &Identifier) -> Self {
        let v = id.field_view();
        let mut bytes = [0u8; IDENTIFIER_LEN];
        bytes[0..4].copy_from_slice(&v.a.to_le_bytes());
        bytes[4..6].copy_from_slice(&v.b.to_le_bytes());
        bytes[6..8].copy_from_slice(&v.c.to_le_bytes());
        bytes[8..].copy_from_slice(&v.tail());
        Self(bytes)
    }
}
