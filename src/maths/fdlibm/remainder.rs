//! IEEE remainder: `x - n*p` where `n` is `x/p` rounded to the nearest
//! integer, ties to even.

use super::bits::{hi_word, lo_word, set_hi_word, ABS_MASK_HI, INF_OR_NAN_HI, SIGN_MASK_HI};
use super::{fabs, fmod};

/// Largest `|p|` high word for which `p + p` is still finite.
const REDUCE_LIMIT_HI: u32 = 0x7fdf_ffff;
/// Below `2^-1021`, `p / 2` would lose bits; compare `x + x` with `p` instead.
const SMALL_MODULUS_HI: u32 = 0x0020_0000;

pub fn remainder(x: f64, p: f64) -> f64 {
    let mut hx = hi_word(x);
    let lx = lo_word(x);
    let mut hp = hi_word(p);
    let lp = lo_word(p);
    let sx = hx & SIGN_MASK_HI;
    hp &= ABS_MASK_HI;
    hx &= ABS_MASK_HI;

    if (hp | lp) == 0 {
        return (x * p) / (x * p);
    }
    if hx >= INF_OR_NAN_HI || (hp >= INF_OR_NAN_HI && ((hp - INF_OR_NAN_HI) | lp) != 0) {
        return (x * p) / (x * p);
    }

    let mut x = x;
    if hp <= REDUCE_LIMIT_HI {
        // now |x| < 2|p|
        x = fmod(x, p + p);
    }
    if hx == hp && lx == lp {
        return 0.0 * x;
    }
    x = fabs(x);
    let p = fabs(p);
    if hp < SMALL_MODULUS_HI {
        if x + x > p {
            x -= p;
            if x + x >= p {
                x -= p;
            }
        }
    } else {
        let p_half = 0.5 * p;
        if x > p_half {
            x -= p;
            if x >= p_half {
                x -= p;
            }
        }
    }
    set_hi_word(x, hi_word(x) ^ sx)
}
