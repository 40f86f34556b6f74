use super::bits::{hi_word, set_hi_word, ABS_MASK_HI, SIGN_MASK_HI};

/// `x` with the sign bit of `y`. Only the high word is touched.
#[inline(always)]
pub fn copysign(x: f64, y: f64) -> f64 {
    set_hi_word(x, (hi_word(x) & ABS_MASK_HI) | (hi_word(y) & SIGN_MASK_HI))
}

/// `|x|`, clearing the sign bit (NaN payloads are kept).
#[inline(always)]
pub fn fabs(x: f64) -> f64 {
    set_hi_word(x, hi_word(x) & ABS_MASK_HI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copysign_moves_only_the_sign() {
        assert_eq!(copysign(3.0, -0.0), -3.0);
        assert_eq!(copysign(-3.0, 1.0), 3.0);
        assert_eq!(copysign(0.0, -1.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(copysign(f64::INFINITY, -2.0), f64::NEG_INFINITY);
        let nan = f64::from_bits(0x7ff8_0000_0000_0abc);
        assert_eq!(copysign(nan, -1.0).to_bits(), 0xfff8_0000_0000_0abc);
    }

    #[test]
    fn fabs_clears_sign() {
        assert_eq!(fabs(-2.5), 2.5);
        assert_eq!(fabs(-0.0).to_bits(), 0);
        assert_eq!(fabs(f64::NEG_INFINITY), f64::INFINITY);
        assert_eq!(fabs(f64::from_bits(0x8000_0000_0000_0001)), f64::from_bits(1));
    }
}
