//! Reference identifiers shared by the self-test, the unit tests and the benches.
//!
//! The set is built around one base value and variants that differ from it at
//! chosen positions: in the head, in the middle of the tail, and in the last
//! two tail bytes with values whose low bits agree but high bits differ.

use super::identifier::Identifier;

pub const BASE_A: Identifier = Identifier::from_fields(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
pub const BASE_A2: Identifier = Identifier::from_fields(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 11);
pub const BASE_B: Identifier = Identifier::from_fields(0x10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0);
pub const BASE_B2: Identifier = Identifier::from_fields(0x0910, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0);
pub const BASE_B3: Identifier = Identifier::from_fields(0x1009, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0);
pub const BASE_B4: Identifier = Identifier::from_fields(0x1009, 9, 8, 7, 6, 5, 4, 3, 10, 1, 0);
pub const BASE_B5: Identifier = Identifier::from_fields(0x1009, 9, 8, 7, 6, 5, 4, 3, 0, 1, 3);
pub const BASE_B6: Identifier = Identifier::from_fields(0x1009, 9, 8, 7, 6, 5, 4, 3, 0, 0x01, 0xC0);
pub const BASE_B7: Identifier = Identifier::from_fields(0x1009, 9, 8, 7, 6, 5, 4, 3, 0, 0xF0, 0xF0);
/// Saturated everywhere except the top byte of `a`.
pub const NEAR_MAX: Identifier = Identifier::from_fields(
    0x00FF_FFFF,
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
/// `c` above the signed 16-bit range.
pub const HIGH_C: Identifier = Identifier::from_fields(0x1009, 9, 0xFFFF, 0, 0, 0, 0, 0, 0, 0, 0);
/// `c` just above zero; must order below [`HIGH_C`].
pub const LOW_C: Identifier = Identifier::from_fields(0x1009, 9, 0x0001, 0, 0, 0, 0, 0, 0, 0, 0);

/// Every reference identifier, including both extremes.
pub const REFERENCE_IDENTIFIERS: [Identifier; 14] = [
    BASE_A,
    BASE_B,
    BASE_B2,
    BASE_B3,
    BASE_A2,
    BASE_B4,
    BASE_B5,
    BASE_B6,
    BASE_B7,
    NEAR_MAX,
    HIGH_C,
    LOW_C,
    Identifier::MIN,
    Identifier::MAX,
];
