//! Capability-gated entry points to the architecture-specific kernels.
//!
//! Each wrapper returns `None` when `caps` lacks the instruction set, and the
//! calling strategy then takes its scalar path. This is the only place where
//! the `unsafe` kernels are called, so `caps` must never claim more than the
//! host probe found.

#[cfg(target_arch = "x86_64")]
mod x86;

#[cfg(all(target_arch = "aarch64", target_endian = "little"))]
mod neon;

use crate::capability::CpuFeatures;

/// Sixteen-lane byte equality mask (bit `i` set when byte `i` matches).
#[allow(unused_variables)]
#[inline]
pub(crate) fn eq_mask_128(caps: &CpuFeatures, x: &[u8; 16], y: &[u8; 16]) -> Option<u32> {
    #[cfg(target_arch = "x86_64")]
    {
        if caps.sse2 {
            // SAFETY: `caps` is bounded by the host probe, which found SSE2.
            return Some(unsafe { x86::eq_mask_128_sse2(x, y) });
        }
    }
    #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
    {
        if caps.neon {
            // SAFETY: `caps` is bounded by the host probe, which found NEON.
            return Some(unsafe { neon::eq_mask_128(x, y) });
        }
    }
    None
}

/// Eight-lane byte equality mask.
#[allow(unused_variables)]
#[inline]
pub(crate) fn eq_mask_64(caps: &CpuFeatures, x: &[u8; 8], y: &[u8; 8]) -> Option<u32> {
    #[cfg(target_arch = "x86_64")]
    {
        if caps.sse2 {
            // SAFETY: `caps` is bounded by the host probe, which found SSE2.
            return Some(unsafe { x86::eq_mask_64_sse2(x, y) });
        }
    }
    #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
    {
        if caps.neon {
            // SAFETY: `caps` is bounded by the host probe, which found NEON.
            return Some(unsafe { neon::eq_mask_64(x, y) });
        }
    }
    None
}

/// Per-byte strict greater-than masks `(x > y, y > x)`.
#[allow(unused_variables)]
#[inline]
pub(crate) fn strict_greater_masks_128(
    caps: &CpuFeatures,
    x: &[u8; 16],
    y: &[u8; 16],
) -> Option<(u32, u32)> {
    #[cfg(target_arch = "x86_64")]
    {
        if caps.sse2 {
            // SAFETY: `caps` is bounded by the host probe, which found SSE2.
            return Some(unsafe { x86::strict_greater_masks_128_sse2(x, y) });
        }
    }
    #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
    {
        if caps.neon {
            // SAFETY: `caps` is bounded by the host probe, which found NEON.
            return Some(unsafe { neon::strict_greater_masks_128(x, y) });
        }
    }
    None
}

/// First differing wire-order byte pair after an in-register permutation.
///
/// The outer `Option` is the capability gate; the inner one is `None` when the
/// identifiers are equal.
#[allow(unused_variables)]
#[inline]
pub(crate) fn shuffled_first_difference(
    caps: &CpuFeatures,
    x: &[u8; 16],
    y: &[u8; 16],
) -> Option<Option<(u8, u8)>> {
    #[cfg(target_arch = "x86_64")]
    {
        if caps.ssse3 {
            // SAFETY: `caps` is bounded by the host probe, which found SSSE3.
            return Some(unsafe { x86::shuffled_first_difference_ssse3(x, y) });
        }
    }
    #[cfg(all(target_arch = "aarch64", target_endian = "little"))]
    {
        if caps.neon {
            // SAFETY: `caps` is bounded by the host probe, which found NEON.
            return Some(unsafe { neon::shuffled_first_difference(x, y) });
        }
    }
    None
}

/// First differing wire-order byte pair using one 256-bit vector for both sides.
#[allow(unused_variables)]
#[inline]
pub(crate) fn wide_first_difference(
    caps: &CpuFeatures,
    x: &[u8; 16],
    y: &[u8; 16],
) -> Option<Option<(u8, u8)>> {
    #[cfg(target_arch = "x86_64")]
    {
        if caps.avx2 {
            // SAFETY: `caps` is bounded by the host probe, which found AVX2.
            return Some(unsafe { x86::wide_first_difference_avx2(x, y) });
        }
    }
    None
}
