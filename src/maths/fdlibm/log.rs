//! log(x), natural logarithm.
//!
//! Write `x = 2^k * (1+f)` with `sqrt(2)/2 < 1+f < sqrt(2)`, then
//! `log(1+f) = 2s + s*R(s^2)` with `s = f/(2+f)` and `R` a Remez polynomial.
//! The result is reassembled as `k*ln2_hi + (f - (hfsq - (s*(hfsq+R) +
//! k*ln2_lo)))` so that the hi part stays exact.

use super::bits::{
    hi_word, lo_word, set_hi_word, ABS_MASK_HI, INF_OR_NAN_HI, MANT_MASK_HI, MIN_NORMAL_HI,
};

pub(crate) const LN2_HI: f64 = 6.93147180369123816490e-01; // 3fe62e42 fee00000
pub(crate) const LN2_LO: f64 = 1.90821492927058770002e-10; // 3dea39ef 35793c76
pub(crate) const TWO54: f64 = 1.80143985094819840000e+16; // 43500000 00000000
const LG1: f64 = 6.666666666666735130e-01; // 3FE55555 55555593
const LG2: f64 = 3.999999999940941908e-01; // 3FD99999 9997FA04
const LG3: f64 = 2.857142874366239149e-01; // 3FD24924 94229359
const LG4: f64 = 2.222219843214978396e-01; // 3FCC71C5 1D8E78AF
const LG5: f64 = 1.818357216161805012e-01; // 3FC74664 96CB03DE
const LG6: f64 = 1.531383769920937332e-01; // 3FC39A09 D078C69F
const LG7: f64 = 1.479819860511658591e-01; // 3FC2F112 DF3E5244
const ZERO: f64 = 0.0;

#[allow(clippy::eq_op)]
pub fn log(x: f64) -> f64 {
    let mut x = x;
    let mut hx = hi_word(x) as i32;
    let lx = lo_word(x);

    let mut k: i32 = 0;
    if hx < MIN_NORMAL_HI as i32 {
        if ((hx as u32 & ABS_MASK_HI) | lx) == 0 {
            // log(+-0) = -inf
            return -TWO54 / ZERO;
        }
        if hx < 0 {
            // log(-#) = NaN
            return (x - x) / ZERO;
        }
        // subnormal, scale up
        k -= 54;
        x *= TWO54;
        hx = hi_word(x) as i32;
    }
    if hx >= INF_OR_NAN_HI as i32 {
        return x + x;
    }
    k += (hx >> 20) - 1023;
    hx &= MANT_MASK_HI as i32;
    let i = (hx + 0x95f64) & 0x0010_0000;
    // normalize x or x/2
    x = set_hi_word(x, (hx | (i ^ 0x3ff0_0000)) as u32);
    k += i >> 20;
    let f = x - 1.0;
    if (MANT_MASK_HI as i32 & (2 + hx)) < 3 {
        // |f| < 2^-20
        if f == ZERO {
            if k == 0 {
                return ZERO;
            }
            let dk = k as f64;
            return dk * LN2_HI + dk * LN2_LO;
        }
        let r = f * f * (0.5 - 0.33333333333333333 * f);
        if k == 0 {
            return f - r;
        }
        let dk = k as f64;
        return dk * LN2_HI - ((r - dk * LN2_LO) - f);
    }
    let s = f / (2.0 + f);
    let dk = k as f64;
    let z = s * s;
    let mut i = hx - 0x6147a;
    let w = z * z;
    let j = 0x6b851 - hx;
    let t1 = w * (LG2 + w * (LG4 + w * LG6));
    let t2 = z * (LG1 + w * (LG3 + w * (LG5 + w * LG7)));
    i |= j;
    let r = t2 + t1;
    if i > 0 {
        let hfsq = 0.5 * f * f;
        if k == 0 {
            return f - (hfsq - s * (hfsq + r));
        }
        dk * LN2_HI - ((hfsq - (s * (hfsq + r) + dk * LN2_LO)) - f)
    } else {
        if k == 0 {
            return f - s * (f - r);
        }
        dk * LN2_HI - ((s * (f - r) - dk * LN2_LO) - f)
    }
}
