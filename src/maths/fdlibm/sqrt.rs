//! sqrt(x), bit by bit.
//!
//! Generates the root one bit at a time with integer arithmetic on the two
//! words of `x`, then rounds to nearest. The result is the correctly rounded
//! square root.

use super::bits::{hi_word, lo_word, with_hi_lo, EXP_MASK_HI, SIGN_MASK_HI};

const SIGN: u32 = SIGN_MASK_HI;

#[inline(always)]
fn carry_bit(ix1: u32) -> i32 {
    ((ix1 & SIGN) >> 31) as i32
}

#[allow(clippy::eq_op)]
pub fn sqrt(x: f64) -> f64 {
    let mut ix0 = hi_word(x) as i32;
    let mut ix1 = lo_word(x);

    if (ix0 as u32 & EXP_MASK_HI) == EXP_MASK_HI {
        // sqrt(NaN) = NaN, sqrt(+inf) = +inf, sqrt(-inf) = NaN
        return x * x + x;
    }
    if ix0 <= 0 {
        if ((ix0 as u32 & !SIGN) | ix1) == 0 {
            return x;
        }
        if ix0 < 0 {
            return (x - x) / (x - x);
        }
    }

    // normalize x
    let mut m = ix0 >> 20;
    if m == 0 {
        while ix0 == 0 {
            m -= 21;
            ix0 |= (ix1 >> 11) as i32;
            ix1 <<= 21;
        }
        let mut i = 0;
        while (ix0 & 0x0010_0000) == 0 {
            ix0 <<= 1;
            i += 1;
        }
        m -= i - 1;
        ix0 |= ix1.checked_shr(32 - i as u32).unwrap_or(0) as i32;
        ix1 = ix1.checked_shl(i as u32).unwrap_or(0);
    }
    m -= 1023;
    ix0 = (ix0 & 0x000f_ffff) | 0x0010_0000;
    if (m & 1) != 0 {
        // odd m, double x to make it even
        ix0 += ix0 + carry_bit(ix1);
        ix1 = ix1.wrapping_add(ix1);
    }
    m >>= 1;

    // generate sqrt(x) bit by bit
    ix0 += ix0 + carry_bit(ix1);
    ix1 = ix1.wrapping_add(ix1);
    let mut q: i32 = 0;
    let mut q1: u32 = 0;
    let mut s0: i32 = 0;
    let mut s1: u32 = 0;

    let mut r: i32 = 0x0020_0000;
    while r != 0 {
        let t = s0 + r;
        if t <= ix0 {
            s0 = t + r;
            ix0 -= t;
            q += r;
        }
        ix0 += ix0 + carry_bit(ix1);
        ix1 = ix1.wrapping_add(ix1);
        r >>= 1;
    }

    let mut r: u32 = SIGN;
    while r != 0 {
        let t1 = s1.wrapping_add(r);
        let t = s0;
        if t < ix0 || (t == ix0 && t1 <= ix1) {
            s1 = t1.wrapping_add(r);
            if (t1 & SIGN) == SIGN && (s1 & SIGN) == 0 {
                s0 += 1;
            }
            ix0 -= t;
            if ix1 < t1 {
                ix0 -= 1;
            }
            ix1 = ix1.wrapping_sub(t1);
            q1 = q1.wrapping_add(r);
        }
        ix0 += ix0 + carry_bit(ix1);
        ix1 = ix1.wrapping_add(ix1);
        r >>= 1;
    }

    // round to nearest
    if (ix0 as u32 | ix1) != 0 {
        if q1 == u32::MAX {
            q1 = 0;
            q += 1;
        } else {
            q1 += q1 & 1;
        }
    }
    let mut hi = (q >> 1) + 0x3fe0_0000;
    let mut lo = q1 >> 1;
    if (q & 1) == 1 {
        lo |= SIGN;
    }
    hi += m << 20;
    with_hi_lo(hi as u32, lo)
}
