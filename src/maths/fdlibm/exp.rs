//! exp(x)
//!
//! Reduce `x = k*ln2 + r` with `|r| <= 0.5*ln2`, approximate `exp(r)` with a
//! rational function in `r` built from a degree-5 Remez polynomial, then
//! scale by `2^k` through the exponent field.

use super::bits::{abs_hi, add_to_exponent, hi_word, lo_word, INF_OR_NAN_HI, MANT_MASK_HI};

const ONE: f64 = 1.0;
const HALF: [f64; 2] = [0.5, -0.5];
const HUGE: f64 = 1.0e+300;
const TWOM1000: f64 = 9.33263618503218878990e-302; // 2**-1000=0x01700000,0
pub(crate) const O_THRESHOLD: f64 = 7.09782712893383973096e+02; // 0x40862E42, 0xFEFA39EF
pub(crate) const U_THRESHOLD: f64 = -7.45133219101941108420e+02; // 0xc0874910, 0xD52D3051
const LN2_HI: [f64; 2] = [
    6.93147180369123816490e-01,  // 0x3fe62e42, 0xfee00000
    -6.93147180369123816490e-01, // 0xbfe62e42, 0xfee00000
];
const LN2_LO: [f64; 2] = [
    1.90821492927058770002e-10,  // 0x3dea39ef, 0x35793c76
    -1.90821492927058770002e-10, // 0xbdea39ef, 0x35793c76
];
const INVLN2: f64 = 1.44269504088896338700e+00; // 0x3ff71547, 0x652b82fe
pub(super) const P1: f64 = 1.66666666666666019037e-01; // 0x3FC55555, 0x5555553E
pub(super) const P2: f64 = -2.77777777770155933842e-03; // 0xBF66C16C, 0x16BEBD93
pub(super) const P3: f64 = 6.61375632143793436117e-05; // 0x3F11566A, 0xAF25DE2C
pub(super) const P4: f64 = -1.65339022054652515390e-06; // 0xBEBBBD41, 0xC5D26BF1
pub(super) const P5: f64 = 4.13813679705723846039e-08; // 0x3E663769, 0x72BEA4D0

/// |x| >= 709.78...: overflow or underflow possible.
const HUGE_ARG_HI: u32 = 0x4086_2e42;
/// |x| > 0.5*ln2
const HALF_LN2_HI: u32 = 0x3fd6_2e42;
/// |x| < 1.5*ln2
const THREE_HALVES_LN2_HI: u32 = 0x3ff0_a2b2;
/// |x| < 2^-28
const TINY_ARG_HI: u32 = 0x3e30_0000;

pub fn exp(x: f64) -> f64 {
    let mut x = x;
    let hx = abs_hi(x);
    let xsb = (hi_word(x) >> 31) as usize;
    let mut hi = 0.0;
    let mut lo = 0.0;
    let mut k: i32 = 0;

    if hx >= HUGE_ARG_HI {
        if hx >= INF_OR_NAN_HI {
            if ((hx & MANT_MASK_HI) | lo_word(x)) != 0 {
                return x + x;
            }
            // exp(+-inf) = {inf, 0}
            return if xsb == 0 { x } else { 0.0 };
        }
        if x > O_THRESHOLD {
            return HUGE * HUGE;
        }
        if x < U_THRESHOLD {
            return TWOM1000 * TWOM1000;
        }
    }

    if hx > HALF_LN2_HI {
        if hx < THREE_HALVES_LN2_HI {
            hi = x - LN2_HI[xsb];
            lo = LN2_LO[xsb];
            k = 1 - 2 * xsb as i32;
        } else {
            k = (INVLN2 * x + HALF[xsb]) as i32;
            let t = k as f64;
            // t*LN2_HI is exact here
            hi = x - t * LN2_HI[0];
            lo = t * LN2_LO[0];
        }
        x = hi - lo;
    } else if hx < TINY_ARG_HI {
        return ONE + x;
    }

    let t = x * x;
    let c = x - t * (P1 + t * (P2 + t * (P3 + t * (P4 + t * P5))));
    if k == 0 {
        return ONE - ((x * c) / (c - 2.0) - x);
    }
    let y = ONE - ((lo - (x * c) / (2.0 - c)) - hi);
    if k >= -1021 {
        add_to_exponent(y, k)
    } else {
        add_to_exponent(y, k + 1000) * TWOM1000
    }
}
