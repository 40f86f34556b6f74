//! asin(x)
//!
//! For `|x| < 0.5`: `asin(x) = x + x*x^2*R(x^2)` with `R` rational.
//! For `|x| >= 0.5`: `asin(x) = pi/2 - 2*asin(sqrt((1-|x|)/2))`, with the
//! square root split into a chopped head and a correction for
//! `|x| <= 0.975`.

use super::bits::{abs_hi, hi_word, lo_word, zero_lo_word, ONE_HI};
use super::{fabs, sqrt};

const ONE: f64 = 1.00000000000000000000e+00; // 0x3FF00000, 0x00000000
const HUGE: f64 = 1.000e+300;
pub(super) const PIO2_HI: f64 = 1.57079632679489655800e+00; // 0x3FF921FB, 0x54442D18
pub(super) const PIO2_LO: f64 = 6.12323399573676603587e-17; // 0x3C91A626, 0x33145C07
const PIO4_HI: f64 = 7.85398163397448278999e-01; // 0x3FE921FB, 0x54442D18
const PS0: f64 = 1.66666666666666657415e-01; // 0x3FC55555, 0x55555555
const PS1: f64 = -3.25565818622400915405e-01; // 0xBFD4D612, 0x03EB6F7D
const PS2: f64 = 2.01212532134862925881e-01; // 0x3FC9C155, 0x0E884455
const PS3: f64 = -4.00555345006794114027e-02; // 0xBFA48228, 0xB5688F3B
const PS4: f64 = 7.91534994289814532176e-04; // 0x3F49EFE0, 0x7501B288
const PS5: f64 = 3.47933107596021167570e-05; // 0x3F023DE1, 0x0DFDF709
const QS1: f64 = -2.40339491173441421878e+00; // 0xC0033A27, 0x1C8A2D4B
const QS2: f64 = 2.02094576023350569471e+00; // 0x40002AE5, 0x9C598AC8
const QS3: f64 = -6.88283971605453293030e-01; // 0xBFE6066C, 0x1B8D0159
const QS4: f64 = 7.70381505559019352791e-02; // 0x3FB3B8C5, 0xB12E9282

/// |x| < 0.5
const HALF_HI: u32 = 0x3fe0_0000;
/// |x| < 2^-27
const TINY_HI: u32 = 0x3e40_0000;
/// |x| > 0.975
const NEAR_ONE_HI: u32 = 0x3fef_3333;

/// Numerator and denominator of the rational approximation shared with
/// `acos`.
#[inline(always)]
pub(super) fn rational_pq(t: f64) -> (f64, f64) {
    let p = t * (PS0 + t * (PS1 + t * (PS2 + t * (PS3 + t * (PS4 + t * PS5)))));
    let q = ONE + t * (QS1 + t * (QS2 + t * (QS3 + t * QS4)));
    (p, q)
}

#[allow(clippy::eq_op)]
pub fn asin(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let ix = abs_hi(x);
    if ix >= ONE_HI {
        if ((ix - ONE_HI) | lo_word(x)) == 0 {
            // asin(+-1) = +-pi/2
            return x * PIO2_HI + x * PIO2_LO;
        }
        // |x| > 1, or NaN
        return (x - x) / (x - x);
    } else if ix < HALF_HI {
        if ix < TINY_HI && HUGE + x > ONE {
            return x;
        }
        let t = x * x;
        let (p, q) = rational_pq(t);
        let w = p / q;
        return x + x * w;
    }

    // 1 > |x| >= 0.5
    let w = ONE - fabs(x);
    let mut t = w * 0.5;
    let (p, q) = rational_pq(t);
    let s = sqrt(t);
    if ix >= NEAR_ONE_HI {
        let w = p / q;
        t = PIO2_HI - (2.0 * (s + s * w) - PIO2_LO);
    } else {
        let w = zero_lo_word(s);
        let c = (t - w * w) / (s + w);
        let r = p / q;
        let p = 2.0 * s * r - (PIO2_LO - 2.0 * c);
        let q = PIO4_HI - 2.0 * w;
        t = PIO4_HI - (p - q);
    }
    if hx > 0 {
        t
    } else {
        -t
    }
}
