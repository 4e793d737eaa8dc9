//! Fixed-point arithmetic primitives
//!
//! Two multiply conventions coexist in the filter bank and are not
//! interchangeable:
//! - [`mul_shift16`]: truncating `(x * y) >> 16`, used by the butterfly network
//!   and the odd-pass pre-weighting.
//! - [`rounded_dot`]: rounding `(x * y + 0x4000) >> 15`, used only by the
//!   window dot products.

const MAX_16: i32 = i16::MAX as i32;
const MIN_16: i32 = i16::MIN as i32;

/// Clamp a 32-bit value to the i16 range [-32768, 32767].
#[inline(always)]
pub fn saturate16(val: i32) -> i16 {
    val.clamp(MIN_16, MAX_16) as i16
}

/// Q16 multiply: `floor(x * y / 65536)`, no rounding.
///
/// The product is formed at 64 bits so the result is exact whenever the
/// quotient fits in 32 bits.
#[inline(always)]
pub fn mul_shift16(x: i32, y: i32) -> i32 {
    ((x as i64 * y as i64) >> 16) as i32
}

/// Q15 multiply with round-half-up: `(x * y + 0x4000) >> 15`.
#[inline(always)]
pub fn rounded_dot(x: i16, y: i16) -> i32 {
    (x as i32 * y as i32 + 0x4000) >> 15
}

/// Plain saturating multiply to 16 bits (no shift), used by the gain stage.
#[inline(always)]
pub fn scaled_multiply(sample: i16, gain: i16) -> i16 {
    saturate16(sample as i32 * gain as i32)
}

/// Paired 8-term dot product.
///
/// Returns `(even, odd)`: the sum of [`rounded_dot`] terms over the even
/// indices and over the odd indices of the two 16-value windows.
#[inline]
pub fn dot8_pair(x: &[i16; 16], y: &[i16; 16]) -> (i32, i32) {
    let mut even = 0i32;
    let mut odd = 0i32;
    for i in 0..8 {
        even += rounded_dot(x[2 * i], y[2 * i]);
        odd += rounded_dot(x[2 * i + 1], y[2 * i + 1]);
    }
    (even, odd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_saturate16() {
        assert_eq!(saturate16(0), 0);
        assert_eq!(saturate16(32767), 32767);
        assert_eq!(saturate16(32768), 32767);
        assert_eq!(saturate16(-32768), -32768);
        assert_eq!(saturate16(-32769), -32768);
        assert_eq!(saturate16(i32::MIN), -32768);
    }

    #[test]
    fn test_mul_shift16_truncates() {
        // 0.5 * 1.5 in Q16
        assert_eq!(mul_shift16(0x8000, 0x18000), 0xC000);
        // floor, not round: 1 * 0xffff / 65536 = 0.99998 -> 0
        assert_eq!(mul_shift16(1, 0xffff), 0);
        // floor toward negative infinity
        assert_eq!(mul_shift16(-1, 0xffff), -1);
        assert_eq!(mul_shift16(-65536, 0xb504), -0xb504);
    }

    /// Products past 32 bits keep their high bits
    #[test]
    fn test_mul_shift16_wide_product() {
        use crate::synth::tables::K_SCALE;

        let x = 1 << 20;
        assert_eq!(mul_shift16(x, K_SCALE[3]), K_SCALE[3] << 4);
        assert_ne!(mul_shift16(x, K_SCALE[3]), x.wrapping_mul(K_SCALE[3]) >> 16);
        assert_eq!(mul_shift16(-x, K_SCALE[3]), -(K_SCALE[3] << 4));
        assert_eq!(mul_shift16(i32::MAX, 0x10000), i32::MAX);
    }

    #[test]
    fn test_rounded_dot() {
        assert_eq!(rounded_dot(16384, 16384), 8192);
        // 1 * 16384 / 32768 = 0.5 rounds up
        assert_eq!(rounded_dot(1, 16384), 1);
        assert_eq!(rounded_dot(1, 16383), 0);
        // -0.5 rounds up to 0
        assert_eq!(rounded_dot(-1, 16384), 0);
        assert_eq!(rounded_dot(-32768, -32768), 32768);
        assert_eq!(rounded_dot(32767, 0x7fff), 32766);
    }

    #[test]
    fn test_conventions_differ() {
        // Same operands, one bit of scale apart
        assert_eq!(mul_shift16(1000, 0x4000), 250);
        assert_eq!(rounded_dot(1000, 0x4000), 500);
    }

    #[test]
    fn test_scaled_multiply() {
        assert_eq!(scaled_multiply(1234, 1), 1234);
        assert_eq!(scaled_multiply(-32768, 1), -32768);
        assert_eq!(scaled_multiply(32767, 1), 32767);
        assert_eq!(scaled_multiply(-32768, -1), 32767);
        assert_eq!(scaled_multiply(20000, 2), 32767);
        assert_eq!(scaled_multiply(-20000, 2), -32768);
        assert_eq!(scaled_multiply(300, -3), -900);
    }

    #[test]
    fn test_dot8_pair_splits_parity() {
        let mut x = [0i16; 16];
        let mut y = [0i16; 16];
        x[2] = 16384;
        y[2] = 16384;
        x[5] = -32768;
        y[5] = 16384;
        assert_eq!(dot8_pair(&x, &y), (8192, -16384));
        assert_eq!(dot8_pair(&[0; 16], &y), (0, 0));
    }

    proptest! {
        #[test]
        fn prop_mul_shift16_is_floor(x in any::<i32>(), y in -65535i32..=65536) {
            let expected = (x as i64 * y as i64).div_euclid(65536);
            prop_assert_eq!(mul_shift16(x, y) as i64, expected);
        }

        #[test]
        fn prop_mul_shift16_identities(x in any::<i32>()) {
            prop_assert_eq!(mul_shift16(x, 0), 0);
            prop_assert_eq!(mul_shift16(x, 65536), x);
        }

        #[test]
        fn prop_rounded_dot_is_nearest(x in any::<i16>(), y in any::<i16>()) {
            // nearest integer to x*y/32768, halves rounded up
            let expected = (2 * x as i64 * y as i64 + 32768).div_euclid(65536);
            prop_assert_eq!(rounded_dot(x, y) as i64, expected);
        }

        #[test]
        fn prop_scaled_multiply_matches_clamp(s in any::<i16>(), g in any::<i16>()) {
            let wide = (s as i64 * g as i64).clamp(-32768, 32767);
            prop_assert_eq!(scaled_multiply(s, g) as i64, wide);
        }
    }
}
