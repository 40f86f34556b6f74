use super::bits::{hi_word, lo_word, set_hi_word, ABS_MASK_HI, ONE_HI};
use super::log1p;

const ONE: f64 = 1.0;
const HUGE: f64 = 1e300;
const ZERO: f64 = 0.0;
/// |x| < 2^-28
const TINY_HI: u32 = 0x3e30_0000;
const HALF_HI: u32 = 0x3fe0_0000;

/// atanh(x) = 0.5 * log1p(2x + 2x*x/(1-x)) for `|x| < 0.5`, else
/// 0.5 * log1p(2x/(1-x)).
///
/// `|x| > 1` and NaN give NaN, `|x| == 1` gives a signed infinity.
#[allow(clippy::eq_op)]
pub fn atanh(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let lx = lo_word(x);
    let ix = hx as u32 & ABS_MASK_HI;
    // the low word only matters once the high word sits at 1.0
    if (ix | u32::from(lx != 0)) > ONE_HI {
        return (x - x) / (x - x);
    }
    if ix == ONE_HI {
        return x / ZERO;
    }
    if ix < TINY_HI && (HUGE + x) > ZERO {
        return x;
    }
    let x = set_hi_word(x, ix);
    let t = if ix < HALF_HI {
        let t = x + x;
        0.5 * log1p(t + t * x / (ONE - x))
    } else {
        0.5 * log1p((x + x) / (ONE - x))
    };
    if hx >= 0 {
        t
    } else {
        -t
    }
}
