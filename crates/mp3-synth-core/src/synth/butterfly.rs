//! 16-point butterfly network
//!
//! Four sum/difference/rotate stages (8-, 4-, 2- and 1-wide) followed by a
//! fixed left-shift correction on four outputs. The same network serves both
//! transform passes.

use super::fixed_point::mul_shift16;
use super::tables::{C64_EVEN1, C64_EVEN2, C64_EVEN3, K_SCALE};

/// One combine step: `x' = x + y`, `y' = (x - y) * w` in Q16.
#[inline(always)]
fn butterfly(v: &mut [i32; 16], i: usize, j: usize, w: i32) {
    let sum = v[i] + v[j];
    let diff = v[i] - v[j];
    v[i] = sum;
    v[j] = mul_shift16(diff, w);
}

/// Run the butterfly network in place.
pub fn butterfly_network(v: &mut [i32; 16]) {
    // 8-wide
    for i in 0..8 {
        butterfly(v, i, 8 + i, C64_EVEN1[i] as i32);
    }

    // 4-wide, within each half
    for i in 0..4 {
        butterfly(v, i, 4 + i, C64_EVEN2[i] as i32);
        butterfly(v, 8 + i, 12 + i, C64_EVEN2[i] as i32);
    }

    // 2-wide, within each group of four
    for g in (0..16).step_by(4) {
        butterfly(v, g, g + 2, C64_EVEN3[0] as i32);
        butterfly(v, g + 1, g + 3, C64_EVEN3[1] as i32);
    }

    // 1-wide over adjacent pairs
    butterfly(v, 0, 1, K_SCALE[0]);
    butterfly(v, 2, 3, K_SCALE[1]);
    butterfly(v, 4, 5, K_SCALE[1]);
    butterfly(v, 6, 7, K_SCALE[2]);
    butterfly(v, 8, 9, K_SCALE[1]);
    butterfly(v, 10, 11, K_SCALE[2]);
    butterfly(v, 12, 13, K_SCALE[2]);
    butterfly(v, 14, 15, K_SCALE[3]);

    // Scale correction between stages
    v[6] <<= 1;
    v[10] <<= 1;
    v[12] <<= 1;
    v[14] <<= 2;
}
