//! x86_64 kernels (SSE2, SSSE3, AVX2).
//!
//! Every function here is `unsafe` because it is compiled with a
//! `#[target_feature]` the caller must have confirmed through the capability
//! probe. Inputs are the in-memory bytes of identifiers; loads are unaligned.

use std::arch::x86_64::*;

#[inline(always)]
unsafe fn load128(bytes: &[u8; 16]) -> __m128i {
    _mm_loadu_si128(bytes.as_ptr() as *const __m128i)
}

/// Bit `i` is set when byte `i` of both inputs is equal.
#[target_feature(enable = "sse2")]
pub(super) unsafe fn eq_mask_128_sse2(x: &[u8; 16], y: &[u8; 16]) -> u32 {
    let cmp = _mm_cmpeq_epi8(load128(x), load128(y));
    _mm_movemask_epi8(cmp) as u32
}

/// Eight-lane variant of [`eq_mask_128_sse2`] for the tail alone.
#[target_feature(enable = "sse2")]
pub(super) unsafe fn eq_mask_64_sse2(x: &[u8; 8], y: &[u8; 8]) -> u32 {
    let a = _mm_loadl_epi64(x.as_ptr() as *const __m128i);
    let b = _mm_loadl_epi64(y.as_ptr() as *const __m128i);
    (_mm_movemask_epi8(_mm_cmpeq_epi8(a, b)) as u32) & 0xFF
}

/// Per-byte strict "greater" masks `(x > y, y > x)` computed through the
/// unsigned byte maximum of both inputs.
#[target_feature(enable = "sse2")]
pub(super) unsafe fn strict_greater_masks_128_sse2(x: &[u8; 16], y: &[u8; 16]) -> (u32, u32) {
    let a = load128(x);
    let b = load128(y);

    let max = _mm_max_epu8(a, b);
    let x_is_max = _mm_cmpeq_epi8(max, a);
    let y_is_max = _mm_cmpeq_epi8(max, b);
    let both = _mm_cmpeq_epi8(x_is_max, y_is_max);

    let equal_mask = _mm_movemask_epi8(both) as u32;
    let x_mask = _mm_movemask_epi8(x_is_max) as u32;
    let y_mask = _mm_movemask_epi8(y_is_max) as u32;
    (x_mask ^ equal_mask, y_mask ^ equal_mask)
}

/// Permutes both identifiers into wire order and returns the first differing
/// byte pair, or `None` if all sixteen bytes match.
#[target_feature(enable = "ssse3")]
pub(super) unsafe fn shuffled_first_difference_ssse3(
    x: &[u8; 16],
    y: &[u8; 16],
) -> Option<(u8, u8)> {
    // Reverse `a`, `b`, `c` into wire order; the tail stays in place.
    let shuffle = _mm_setr_epi8(3, 2, 1, 0, 5, 4, 7, 6, 8, 9, 10, 11, 12, 13, 14, 15);
    let a = _mm_shuffle_epi8(load128(x), shuffle);
    let b = _mm_shuffle_epi8(load128(y), shuffle);

    let mask = _mm_movemask_epi8(_mm_cmpeq_epi8(a, b)) as u32;
    if mask == 0xFFFF {
        return None;
    }
    let first = (!mask).trailing_zeros() as usize;

    let mut wire_x = [0u8; 16];
    let mut wire_y = [0u8; 16];
    _mm_storeu_si128(wire_x.as_mut_ptr() as *mut __m128i, a);
    _mm_storeu_si128(wire_y.as_mut_ptr() as *mut __m128i, b);
    Some((wire_x[first], wire_y[first]))
}

/// Packs `x` into the low lane and `y` into the high lane of one 256-bit
/// vector, permutes both halves into wire order and compares the vector with
/// its lane-swapped self. The low 16 mask bits locate the first difference.
#[target_feature(enable = "avx2")]
pub(super) unsafe fn wide_first_difference_avx2(x: &[u8; 16], y: &[u8; 16]) -> Option<(u8, u8)> {
    let wide = _mm256_inserti128_si256(_mm256_castsi128_si256(load128(x)), load128(y), 1);
    // `vpshufb` indexes within each 128-bit lane, so both halves use 0..15.
    let shuffle = _mm256_setr_epi8(
        3, 2, 1, 0, 5, 4, 7, 6, 8, 9, 10, 11, 12, 13, 14, 15, //
        3, 2, 1, 0, 5, 4, 7, 6, 8, 9, 10, 11, 12, 13, 14, 15,
    );
    let wide = _mm256_shuffle_epi8(wide, shuffle);
    let swapped = _mm256_permute2x128_si256(wide, wide, 0x01);

    let unequal = !(_mm256_movemask_epi8(_mm256_cmpeq_epi8(wide, swapped)) as u32);
    if unequal == 0 {
        return None;
    }
    let first = unequal.trailing_zeros() as usize;

    let mut lanes = [0u8; 32];
    _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, wide);
    Some((lanes[first], lanes[first + 16]))
}
