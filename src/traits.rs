//! This module defines shared traits used across the comparison kernels.
//!
//! The head fields of an identifier are stored as signed integers to keep the
//! binary layout of the external format, but ordering is always unsigned.
//! `HasUnsigned` gives every kernel one way to get at the unsigned view.

use num_traits::{PrimInt, Unsigned};
use std::cmp::Ordering;

/// A trait that maps a signed integer type to its unsigned counterpart.
pub trait HasUnsigned: Copy {
    type Unsigned: PrimInt + Unsigned;

    /// Reinterprets the bit pattern as the unsigned counterpart.
    fn to_unsigned(self) -> Self::Unsigned;
}

// Implement the trait for all primitive signed integer types.
macro_rules! impl_signed_unsigned_pair {
    ($S:ty, $U:ty) => {
        impl HasUnsigned for $S {
            type Unsigned = $U;
            #[inline(always)]
            fn to_unsigned(self) -> $U {
                self as $U
            }
        }
    };
}

impl_signed_unsigned_pair!(i8, u8);
impl_signed_unsigned_pair!(i16, u16);
impl_signed_unsigned_pair!(i32, u32);
impl_signed_unsigned_pair!(i64, u64);
impl_signed_unsigned_pair!(i128, u128);

/// Three-way comparison of two values already known to differ.
///
/// Every kernel locates the first differing field or byte and then needs only
/// "less" or "greater"; equality is decided before this is called.
#[inline(always)]
pub fn differing_order<T>(me: T, them: T) -> Ordering
where
    T: PrimInt + Unsigned,
{
    if me < them {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}
