//! `scalb`/`scalbn`: multiply by an integral power of two by exponent
//! arithmetic, without computing `2^n`.

use super::bits::{
    abs_hi, hi_word, lo_word, set_hi_word, EXP_MASK_HI, HI_MANT_BITS, INF_OR_NAN_HI,
};
use super::copysign;
use super::floor;

const TWO54: f64 = 1.80143985094819840000e+16; // 0x43500000, 0x00000000
const TWOM54: f64 = 5.55111512312578270212e-17; // 0x3C900000, 0x00000000
const HUGE: f64 = 1.0e+300;
const TINY: f64 = 1.0e-300;

/// Largest biased exponent of a finite double.
const MAX_BIASED_EXP: i32 = 0x7fe;
/// Clears the exponent field of a high word, keeping sign and mantissa.
const KEEP_SIGN_MANT_HI: u32 = !EXP_MASK_HI;
/// Scale factors beyond this magnitude saturate in `scalb`.
const SCALB_LIMIT: i32 = 65_000;
/// Below this a subnormal input cannot produce a non-zero result.
const UNDERFLOW_N: i32 = -50_000;

/// `x * 2^n`, correctly rounded on underflow.
pub fn scalbn(x: f64, n: i32) -> f64 {
    let mut x = x;
    let mut hx = hi_word(x);
    let mut k = ((hx & EXP_MASK_HI) >> HI_MANT_BITS) as i32;
    if k == 0 {
        if (lo_word(x) | abs_hi(x)) == 0 {
            return x;
        }
        x *= TWO54;
        hx = hi_word(x);
        k = ((hx & EXP_MASK_HI) >> HI_MANT_BITS) as i32 - 54;
        if n < UNDERFLOW_N {
            return TINY * x;
        }
    }
    if k == 0x7ff {
        return x + x;
    }
    // n may sit anywhere in the i32 range
    k = k.saturating_add(n);
    if k > MAX_BIASED_EXP {
        return HUGE * copysign(HUGE, x);
    }
    if k > 0 {
        return set_hi_word(x, (hx & KEEP_SIGN_MANT_HI) | ((k as u32) << HI_MANT_BITS));
    }
    if k <= -54 {
        return TINY * copysign(TINY, x);
    }
    k += 54;
    let x = set_hi_word(x, (hx & KEEP_SIGN_MANT_HI) | ((k as u32) << HI_MANT_BITS));
    x * TWOM54
}

/// `x * 2^fn` for a double-typed scale.
///
/// A NaN in either argument propagates, an infinite scale multiplies or
/// divides by it, a non-integral scale is invalid and the scale saturates at
/// ±65000.
#[allow(clippy::eq_op)]
pub fn scalb(x: f64, fn_: f64) -> f64 {
    if x.is_nan() || fn_.is_nan() {
        return x * fn_;
    }
    if abs_hi(fn_) >= INF_OR_NAN_HI {
        if fn_ > 0.0 {
            return x * fn_;
        }
        return x / (-fn_);
    }
    if floor(fn_) != fn_ {
        return (fn_ - fn_) / (fn_ - fn_);
    }
    if fn_ > SCALB_LIMIT as f64 {
        return scalbn(x, SCALB_LIMIT);
    }
    if -fn_ > SCALB_LIMIT as f64 {
        return scalbn(x, -SCALB_LIMIT);
    }
    scalbn(x, fn_ as i32)
}

/// `x * 2^n` for an integer-typed scale, saturating at ±65000.
pub fn scalb_int(x: f64, n: i32) -> f64 {
    if x.is_nan() {
        return x * n as f64;
    }
    scalbn(x, n.clamp(-SCALB_LIMIT, SCALB_LIMIT))
}
