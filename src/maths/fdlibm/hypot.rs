//! hypot(x, y) = sqrt(x*x + y*y) without undue overflow or underflow.
//!
//! Arguments are rescaled by `2^±600` (or `2^1022` for subnormals) so the
//! squares stay representable, and `x*x + y*y` is evaluated as a sum of
//! exactly split products before the square root.

use super::bits::{
    hi_word, lo_word, set_hi_word, with_hi_lo, ABS_MASK_HI, INF_OR_NAN_HI, ONE_HI,
};
use super::sqrt;

/// `2^600` expressed as an exponent offset in the high word.
const SCALE_600_HI: i32 = 0x2580_0000;
/// a > 2^500
const BIG_HI: i32 = 0x5f30_0000;
/// b < 2^-500
const SMALL_HI: i32 = 0x20b0_0000;
/// x/y > 2^60
const RATIO_HI: i32 = 0x03c0_0000;
/// 2^1022
const TWO1022_HI: u32 = 0x7fd0_0000;

pub fn hypot(x: f64, y: f64) -> f64 {
    let mut ha = (hi_word(x) & ABS_MASK_HI) as i32;
    let mut hb = (hi_word(y) & ABS_MASK_HI) as i32;
    let (mut a, mut b) = if hb > ha {
        core::mem::swap(&mut ha, &mut hb);
        (y, x)
    } else {
        (x, y)
    };
    // a <- |a|, b <- |b|
    a = set_hi_word(a, ha as u32);
    b = set_hi_word(b, hb as u32);
    if ha - hb > RATIO_HI {
        return a + b;
    }
    let mut k: i32 = 0;
    if ha > BIG_HI {
        if ha >= INF_OR_NAN_HI as i32 {
            // Inf or NaN
            let mut w = a + b;
            if ((ha as u32 & 0x000f_ffff) | lo_word(a)) == 0 {
                w = a;
            }
            if ((hb as u32 ^ INF_OR_NAN_HI) | lo_word(b)) == 0 {
                w = b;
            }
            return w;
        }
        // scale a and b by 2^-600
        ha -= SCALE_600_HI;
        hb -= SCALE_600_HI;
        k += 600;
        a = set_hi_word(a, ha as u32);
        b = set_hi_word(b, hb as u32);
    }
    if hb < SMALL_HI {
        if hb <= 0x000f_ffff {
            // subnormal b or zero
            if (hb as u32 | lo_word(b)) == 0 {
                return a;
            }
            let t1 = with_hi_lo(TWO1022_HI, 0);
            b *= t1;
            a *= t1;
            k -= 1022;
        } else {
            // scale a and b by 2^600
            ha += SCALE_600_HI;
            hb += SCALE_600_HI;
            k -= 600;
            a = set_hi_word(a, ha as u32);
            b = set_hi_word(b, hb as u32);
        }
    }

    // medium size a and b
    let mut w = a - b;
    if w > b {
        let t1 = with_hi_lo(ha as u32, 0);
        let t2 = a - t1;
        w = sqrt(t1 * t1 - (b * (-b) - t2 * (a + t1)));
    } else {
        a += a;
        let y1 = with_hi_lo(hb as u32, 0);
        let y2 = b - y1;
        let t1 = with_hi_lo((ha + 0x0010_0000) as u32, 0);
        let t2 = a - t1;
        w = sqrt(t1 * y1 - (w * (-w) - (t1 * y2 + t2 * b)));
    }
    if k != 0 {
        let t1 = with_hi_lo((ONE_HI as i32 + (k << 20)) as u32, 0);
        return t1 * w;
    }
    w
}
