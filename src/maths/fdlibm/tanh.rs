use super::bits::{abs_hi, hi_word, INF_OR_NAN_HI, ONE_HI};
use super::{expm1, fabs};

const ONE: f64 = 1.0;
const TWO: f64 = 2.0;
const TINY: f64 = 1.0e-300;

/// |x| < 22
const SATURATE_HI: u32 = 0x4036_0000;
/// |x| < 2^-55
const TINY_HI: u32 = 0x3c80_0000;

/// Hyperbolic tangent.
///
/// `tanh(x) = -t/(t+2)` with `t = expm1(-2|x|)` below 1, `1 - 2/(t+2)` with
/// `t = expm1(2|x|)` up to 22, and `1 - tiny` beyond that.
pub fn tanh(x: f64) -> f64 {
    let jx = hi_word(x) as i32;
    let ix = abs_hi(x);

    // x is INF or NaN
    if ix >= INF_OR_NAN_HI {
        return if jx >= 0 { ONE / x + ONE } else { ONE / x - ONE };
    }

    let z = if ix < SATURATE_HI {
        if ix < TINY_HI {
            // tanh(small) = small
            return x * (ONE + x);
        }
        if ix >= ONE_HI {
            let t = expm1(TWO * fabs(x));
            ONE - TWO / (t + TWO)
        } else {
            let t = expm1(-TWO * fabs(x));
            -t / (t + TWO)
        }
    } else {
        // |x| >= 22, return +-1
        ONE - TINY
    };
    if jx >= 0 {
        z
    } else {
        -z
    }
}
