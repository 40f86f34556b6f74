use super::bits::{abs_hi, lo_word, EXP_BIAS, HI_MANT_BITS, INF_OR_NAN_HI};
use super::fabs;

/// Unbiased binary exponent of `x` as a double.
///
/// Subnormals report the minimum normal exponent, -1022, rather than their
/// true exponent.
pub fn logb(x: f64) -> f64 {
    let ix = abs_hi(x);
    if (ix | lo_word(x)) == 0 {
        return -1.0 / fabs(x);
    }
    if ix >= INF_OR_NAN_HI {
        return x * x;
    }
    let e = (ix >> HI_MANT_BITS) as i32;
    if e == 0 {
        return -1022.0;
    }
    (e - EXP_BIAS) as f64
}
