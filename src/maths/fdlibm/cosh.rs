use super::bits::{abs_hi, lo_word, INF_OR_NAN_HI};
use super::{exp, expm1, fabs};

const ONE: f64 = 1.0;
const HALF: f64 = 0.5;
const HUGE: f64 = 1.0e300;

/// |x| < 0.5*ln2
const HALF_LN2_HI: u32 = 0x3fd6_2e43;
/// |x| < 2^-55
const TINY_HI: u32 = 0x3c80_0000;
/// |x| < 22
const EXP_PAIR_HI: u32 = 0x4036_0000;
/// |x| < log(maxdouble)
const EXP_RANGE_HI: u32 = 0x4086_2e42;
const OVERFLOW_HI: u32 = 0x4086_33ce;
const OVERFLOW_LO: u32 = 0x8fb9_f87d;

/// Hyperbolic cosine.
///
/// Near zero `1 + t*t/(2*(1+t))` with `t = expm1(|x|)`, then
/// `(exp(|x|) + 1/exp(|x|))/2` up to 22, `exp(|x|)/2` up to
/// ln(maxdouble) and the split `exp(|x|/2)/2 * exp(|x|/2)` until the
/// result overflows.
pub fn cosh(x: f64) -> f64 {
    let ix = abs_hi(x);

    // x is INF or NaN
    if ix >= INF_OR_NAN_HI {
        return x * x;
    }

    if ix < HALF_LN2_HI {
        let t = expm1(fabs(x));
        let w = ONE + t;
        if ix < TINY_HI {
            // cosh(tiny) = 1
            return w;
        }
        return ONE + (t * t) / (w + w);
    }

    if ix < EXP_PAIR_HI {
        let t = exp(fabs(x));
        return HALF * t + HALF / t;
    }

    if ix < EXP_RANGE_HI {
        return HALF * exp(fabs(x));
    }

    if ix < OVERFLOW_HI || (ix == OVERFLOW_HI && lo_word(x) <= OVERFLOW_LO) {
        let w = exp(HALF * fabs(x));
        let t = HALF * w;
        return t * w;
    }

    // overflow
    HUGE * HUGE
}
