// In: src/layout/identifier.rs

//! The `Identifier` value type and its two admissible byte representations.
//!
//! In memory an identifier is a `#[repr(C)]` struct of a 32-bit and two
//! 16-bit head fields in host byte order, followed by eight tail bytes that are
//! already in wire order. The canonical wire form is the big-endian
//! concatenation of all eleven fields; its byte-wise lexicographic order is
//! the one and only ordering every comparison kernel must reproduce.

use bytemuck::{Pod, Zeroable};
use std::cmp::Ordering;
use std::fmt;

use super::word::U128Word;
use crate::error::GuidOrderError;
use crate::traits::HasUnsigned;

/// Size in bytes of an identifier, in memory and on the wire.
pub const IDENTIFIER_LEN: usize = 16;

//==================================================================================
// 1. Field View
//==================================================================================

/// The eleven fields of an identifier, in canonical order, as unsigned values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentifierFields {
    pub a: u32,
    pub b: u16,
    pub c: u16,
    pub d: u8,
    pub e: u8,
    pub f: u8,
    pub g: u8,
    pub h: u8,
    pub i: u8,
    pub j: u8,
    pub k: u8,
}

impl IdentifierFields {
    /// The tail fields `d..k` as one array, in wire order.
    pub fn tail(&self) -> [u8; 8] {
        [self.d, self.e, self.f, self.g, self.h, self.i, self.j, self.k]
    }
}

//==================================================================================
// 2. The Identifier
//==================================================================================

/// A 128-bit identifier with the mixed-endian memory layout of the well-known
/// `{a-b-c-d..k}` format.
///
/// The head fields are stored signed (the external binary layout does so) and
/// are only ever compared through their unsigned view. Fields are private: an
/// identifier cannot change after construction.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Identifier {
    pub(crate) a: i32,
    pub(crate) b: i16,
    pub(crate) c: i16,
    pub(crate) tail: [u8; 8],
}

impl Identifier {
    /// The all-zero identifier; the minimum under canonical order.
    pub const MIN: Identifier = Identifier::from_fields(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0);

    /// The all-`0xFF` identifier; the maximum under canonical order.
    pub const MAX: Identifier = Identifier::from_fields(
        0xFFFF_FFFF,
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

    /// Builds an identifier from its eleven field values.
    #[allow(clippy::too_many_arguments)]
    pub const fn from_fields(
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
    ) -> Self {
        Self {
            a: a as i32,
            b: b as i16,
            c: c as i16,
            tail: [d, e, f, g, h, i, j, k],
        }
    }

    /// Builds an identifier from its canonical (big-endian wire order) bytes.
    pub fn from_canonical_bytes(bytes: [u8; IDENTIFIER_LEN]) -> Self {
        let a = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let b = u16::from_be_bytes([bytes[4], bytes[5]]);
        let c = u16::from_be_bytes([bytes[6], bytes[7]]);
        let mut tail = [0u8; 8];
        tail.copy_from_slice(&bytes[8..]);
        Self {
            a: a as i32,
            b: b as i16,
            c: c as i16,
            tail,
        }
    }

    /// Builds an identifier from a slice holding exactly 16 canonical bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, GuidOrderError> {
        let array: [u8; IDENTIFIER_LEN] =
            bytes.try_into().map_err(|_| GuidOrderError::InvalidLength {
                expected: IDENTIFIER_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self::from_canonical_bytes(array))
    }

    /// Exposes the raw fields without any byte-order transformation.
    pub fn field_view(&self) -> IdentifierFields {
        let [d, e, f, g, h, i, j, k] = self.tail;
        IdentifierFields {
            a: self.a.to_unsigned(),
            b: self.b.to_unsigned(),
            c: self.c.to_unsigned(),
            d,
            e,
            f,
            g,
            h,
            i,
            j,
            k,
        }
    }

    /// The tail bytes `d..k`; already in wire order on every host.
    #[inline(always)]
    pub fn tail(&self) -> &[u8; 8] {
        &self.tail
    }

    /// The identifier exactly as it sits in memory (host-order head fields).
    #[inline(always)]
    pub fn as_native_bytes(&self) -> &[u8; IDENTIFIER_LEN] {
        bytemuck::cast_ref(self)
    }

    /// Produces the canonical wire-order bytes.
    ///
    /// This is the reference every comparison kernel is checked against.
    pub fn to_canonical_bytes(&self) -> [u8; IDENTIFIER_LEN] {
        let mut bytes = *self.as_native_bytes();
        if cfg!(target_endian = "little") {
            bytes[0..4].reverse();
            bytes[4..6].reverse();
            bytes[6..8].reverse();
        }
        bytes
    }

    /// Reduces the identifier to a 128-bit unsigned word whose magnitude order
    /// equals canonical order.
    pub fn to_u128(&self) -> U128Word {
        let upper = (u64::from(self.a.to_unsigned()) << 32)
            | (u64::from(self.b.to_unsigned()) << 16)
            | u64::from(self.c.to_unsigned());
        let lower = u64::from_be_bytes(self.tail);
        U128Word::new(upper, lower)
    }
}

impl From<IdentifierFields> for Identifier {
    fn from(fields: IdentifierFields) -> Self {
        Identifier::from_fields(
            fields.a, fields.b, fields.c, fields.d, fields.e, fields.f, fields.g, fields.h,
            fields.i, fields.j, fields.k,
        )
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Identifier::MIN
    }
}

//==================================================================================
// 3. Ordering
//==================================================================================

/// Canonical order, computed by the sequential field scan.
impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        crate::compare::field_scan::compare(self, other)
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//==================================================================================
// 4. Textual Form (diagnostics only)
//==================================================================================

/// Renders the 8-4-4-4-12 hexadecimal grouping in canonical field order.
impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.field_view();
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            v.a, v.b, v.c, v.d, v.e, v.f, v.g, v.h, v.i, v.j, v.k
        )
    }
}

impl fmt::UpperHex for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.field_view();
        write!(
            f,
            "{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
            v.a, v.b, v.c, v.d, v.e, v.f, v.g, v.h, v.i, v.j, v.k
        )
    }
}

//==================================================================================
// 5. Unit Tests
//==================================================================================
