//! aarch64 NEON kernels (little-endian only).
//!
//! NEON has no byte movemask, so masks are rebuilt by weighting each lane with
//! its bit value and adding each half horizontally.

use std::arch::aarch64::*;

const LANE_BITS: [u8; 16] = [1, 2, 4, 8, 16, 32, 64, 128, 1, 2, 4, 8, 16, 32, 64, 128];
const WIRE_ORDER: [u8; 16] = [3, 2, 1, 0, 5, 4, 7, 6, 8, 9, 10, 11, 12, 13, 14, 15];

#[inline]
#[target_feature(enable = "neon")]
unsafe fn movemask(v: uint8x16_t) -> u32 {
    let bits = vandq_u8(v, vld1q_u8(LANE_BITS.as_ptr()));
    let lo = vaddv_u8(vget_low_u8(bits)) as u32;
    let hi = vaddv_u8(vget_high_u8(bits)) as u32;
    lo | (hi << 8)
}

#[target_feature(enable = "neon")]
pub(super) unsafe fn eq_mask_128(x: &[u8; 16], y: &[u8; 16]) -> u32 {
    movemask(vceqq_u8(vld1q_u8(x.as_ptr()), vld1q_u8(y.as_ptr())))
}

#[target_feature(enable = "neon")]
pub(super) unsafe fn eq_mask_64(x: &[u8; 8], y: &[u8; 8]) -> u32 {
    let eq = vceq_u8(vld1_u8(x.as_ptr()), vld1_u8(y.as_ptr()));
    vaddv_u8(vand_u8(eq, vld1_u8(LANE_BITS.as_ptr()))) as u32
}

#[target_feature(enable = "neon")]
pub(super) unsafe fn strict_greater_masks_128(x: &[u8; 16], y: &[u8; 16]) -> (u32, u32) {
    let a = vld1q_u8(x.as_ptr());
    let b = vld1q_u8(y.as_ptr());

    let max = vmaxq_u8(a, b);
    let x_is_max = vceqq_u8(max, a);
    let y_is_max = vceqq_u8(max, b);
    let both = vceqq_u8(x_is_max, y_is_max);

    let equal_mask = movemask(both);
    (movemask(x_is_max) ^ equal_mask, movemask(y_is_max) ^ equal_mask)
}

#[target_feature(enable = "neon")]
pub(super) unsafe fn shuffled_first_difference(x: &[u8; 16], y: &[u8; 16]) -> Option<(u8, u8)> {
    let order = vld1q_u8(WIRE_ORDER.as_ptr());
    let a = vqtbl1q_u8(vld1q_u8(x.as_ptr()), order);
    let b = vqtbl1q_u8(vld1q_u8(y.as_ptr()), order);

    let mask = movemask(vceqq_u8(a, b));
    if mask == 0xFFFF {
        return None;
    }
    let first = (!mask).trailing_zeros() as usize;

    let mut wire_x = [0u8; 16];
    let mut wire_y = [0u8; 16];
    vst1q_u8(wire_x.as_mut_ptr(), a);
    vst1q_u8(wire_y.as_mut_ptr(), b);
    Some((wire_x[first], wire_y[first]))
}
