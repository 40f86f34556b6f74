use super::bits::{abs_hi, hi_word, lo_word, INF_OR_NAN_HI, ONE_HI};
use super::{exp, expm1, fabs};

const ONE: f64 = 1.0;
const SHUGE: f64 = 1.0e307;

/// |x| < 22
const EXPM1_RANGE_HI: u32 = 0x4036_0000;
/// |x| < 2^-28
const TINY_HI: u32 = 0x3e30_0000;
/// |x| < log(maxdouble)
const EXP_RANGE_HI: u32 = 0x4086_2e42;
/// High and low words of the overflow threshold, ln(maxdouble) + ln2.
const OVERFLOW_HI: u32 = 0x4086_33ce;
const OVERFLOW_LO: u32 = 0x8fb9_f87d;

/// Hyperbolic sine.
///
/// ```text
/// sinh(x) = (E + E/(E+1))/2  with E = expm1(|x|), for |x| in [0, 22]
///         = exp(|x|)/2                         for |x| in [22, ln(maxdouble)]
///         = exp(|x|/2)/2 * exp(|x|/2)          up to the overflow threshold
/// ```
///
/// Beyond the threshold the result overflows to a signed infinity. sinh is
/// odd, so `sinh(-x)` and `-sinh(x)` agree bit for bit.
pub fn sinh(x: f64) -> f64 {
    let jx = hi_word(x) as i32;
    let ix = abs_hi(x);

    // x is INF or NaN
    if ix >= INF_OR_NAN_HI {
        return x + x;
    }

    let h = if jx < 0 { -0.5 } else { 0.5 };
    let ax = fabs(x);

    if ix < EXPM1_RANGE_HI {
        if ix < TINY_HI && SHUGE + x > ONE {
            // sinh(tiny) = tiny with inexact
            return x;
        }
        let t = expm1(ax);
        if ix < ONE_HI {
            return h * (2.0 * t - t * t / (t + ONE));
        }
        return h * (t + t / (t + ONE));
    }

    if ix < EXP_RANGE_HI {
        return h * exp(ax);
    }

    if ix < OVERFLOW_HI || (ix == OVERFLOW_HI && lo_word(x) <= OVERFLOW_LO) {
        let w = exp(0.5 * ax);
        let t = h * w;
        return t * w;
    }

    x * SHUGE
}
