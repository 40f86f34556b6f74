use super::bits::{
    hi_word, lo_word, set_hi_word, with_hi_lo, INF_OR_NAN_HI, MIN_NORMAL_HI, SIGN_MASK_HI,
};

/// (682-0.03306235651)*2**20
const B1: u32 = 715_094_163;
/// (664-0.03306235651)*2**20
const B2: u32 = 696_219_795;

const C: f64 = 5.42857142857142815906e-01; // 19/35     = 0x3FE15F15, 0xF15F15F1
const D: f64 = -7.05306122448979611050e-01; // -864/1225 = 0xBFE691DE, 0x2532C834
const E: f64 = 1.41428571428571436819e+00; // 99/70     = 0x3FF6A0EA, 0x0EA0EA0F
const F: f64 = 1.60714285714285720630e+00; // 45/28     = 0x3FF9B6DB, 0x6DB6DB6E
const G: f64 = 3.57142857142857150787e-01; // 5/14      = 0x3FD6DB6D, 0xB6DB6DB7

const TWO54_HI: u32 = 0x4350_0000;

/// Cube root.
///
/// A 5-bit estimate comes from dividing the exponent bits by three, a
/// rational step lifts it to 23 bits and one Newton step finishes it.
pub fn cbrt(x: f64) -> f64 {
    let hx_signed = hi_word(x);
    let sign = hx_signed & SIGN_MASK_HI;
    let hx = hx_signed ^ sign;
    if hx >= INF_OR_NAN_HI {
        return x + x;
    }
    if (hx | lo_word(x)) == 0 {
        return x;
    }

    // x <- |x|
    let x = set_hi_word(x, hx);
    let mut t = if hx < MIN_NORMAL_HI {
        let t = with_hi_lo(TWO54_HI, 0) * x;
        set_hi_word(t, hi_word(t) / 3 + B2)
    } else {
        with_hi_lo(hx / 3 + B1, 0)
    };

    // new cbrt to 23 bits
    let r = t * t / x;
    let s = C + r * t;
    t *= G + F / (s + E + D / s);

    // chop to 20 bits and make it larger than cbrt(x)
    t = with_hi_lo(hi_word(t) + 1, 0);

    // one Newton step to 53 bits
    let s = t * t;
    let mut r = x / s;
    let w = t + t;
    r = (r - t) / (w + r);
    t += t * r;

    set_hi_word(t, hi_word(t) | sign)
}
