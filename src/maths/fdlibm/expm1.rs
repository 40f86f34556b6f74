//! expm1(x) = exp(x) - 1, accurate for small `x`.
//!
//! Same reduction as `exp`, but the rational approximation carries a
//! correction term `c` for the reduced argument so that no cancellation is
//! lost when `k` is small.

use super::bits::{
    abs_hi, add_to_exponent, hi_word, lo_word, set_hi_word, INF_OR_NAN_HI, MANT_MASK_HI,
    SIGN_MASK_HI,
};
use super::exp::O_THRESHOLD;

const ONE: f64 = 1.0;
const HUGE: f64 = 1.0e+300;
const TINY: f64 = 1.0e-300;
const LN2_HI: f64 = 6.93147180369123816490e-01; // 0x3fe62e42, 0xfee00000
const LN2_LO: f64 = 1.90821492927058770002e-10; // 0x3dea39ef, 0x35793c76
const INVLN2: f64 = 1.44269504088896338700e+00; // 0x3ff71547, 0x652b82fe
const Q1: f64 = -3.33333333333331316428e-02; // BFA11111 111110F4
const Q2: f64 = 1.58730158725481460165e-03; // 3F5A01A0 19FE5585
const Q3: f64 = -7.93650757867487942473e-05; // BF14CE19 9EAADBB7
const Q4: f64 = 4.00821782732936239552e-06; // 3ED0CFCA 86E65239
const Q5: f64 = -2.01099218183624371326e-07; // BE8AFDB7 6E09C32D

/// |x| >= 56*ln2
const SATURATE_HI: u32 = 0x4043_687a;
/// |x| >= 709.78...
const OVERFLOW_HI: u32 = 0x4086_2e42;
const HALF_LN2_HI: u32 = 0x3fd6_2e42;
const THREE_HALVES_LN2_HI: u32 = 0x3ff0_a2b2;
/// |x| < 2^-54
const TINY_ARG_HI: u32 = 0x3c90_0000;

pub fn expm1(x: f64) -> f64 {
    let mut x = x;
    let hx = abs_hi(x);
    let negative = (hi_word(x) & SIGN_MASK_HI) != 0;

    if hx >= SATURATE_HI {
        if hx >= OVERFLOW_HI {
            if hx >= INF_OR_NAN_HI {
                if ((hx & MANT_MASK_HI) | lo_word(x)) != 0 {
                    return x + x;
                }
                // expm1(+-inf) = {inf, -1}
                return if negative { -1.0 } else { x };
            }
            if x > O_THRESHOLD {
                return HUGE * HUGE;
            }
        }
        if negative && x + TINY < 0.0 {
            return TINY - ONE;
        }
    }

    let k: i32;
    let mut c = 0.0;
    if hx > HALF_LN2_HI {
        let (hi, lo);
        if hx < THREE_HALVES_LN2_HI {
            if negative {
                hi = x + LN2_HI;
                lo = -LN2_LO;
                k = -1;
            } else {
                hi = x - LN2_HI;
                lo = LN2_LO;
                k = 1;
            }
        } else {
            k = (INVLN2 * x + if negative { -0.5 } else { 0.5 }) as i32;
            let t = k as f64;
            // t*LN2_HI is exact here
            hi = x - t * LN2_HI;
            lo = t * LN2_LO;
        }
        x = hi - lo;
        c = (hi - x) - lo;
    } else if hx < TINY_ARG_HI {
        return x;
    } else {
        k = 0;
    }

    let hfx = 0.5 * x;
    let hxs = x * hfx;
    let r1 = ONE + hxs * (Q1 + hxs * (Q2 + hxs * (Q3 + hxs * (Q4 + hxs * Q5))));
    let t = 3.0 - r1 * hfx;
    let mut e = hxs * ((r1 - t) / (6.0 - x * t));
    if k == 0 {
        // c is 0
        return x - (x * e - hxs);
    }
    e = x * (e - c) - c;
    e -= hxs;
    if k == -1 {
        return 0.5 * (x - e) - 0.5;
    }
    if k == 1 {
        if x < -0.25 {
            return -2.0 * (e - (x + 0.5));
        }
        return ONE + 2.0 * (x - e);
    }
    if k <= -2 || k > 56 {
        let y = ONE - (e - x);
        return add_to_exponent(y, k) - ONE;
    }
    let y = if k < 20 {
        // t = 1 - 2^-k
        let t = set_hi_word(ONE, 0x3ff0_0000 - (0x0020_0000 >> k));
        t - (e - x)
    } else {
        // t = 2^-k
        let t = set_hi_word(ONE, ((0x3ff - k) as u32) << 20);
        (x - (e + t)) + ONE
    };
    add_to_exponent(y, k)
}
