//! fmod(x,y): exact remainder with truncation toward zero.
//!
//! Works on the integer significands: align exponents and reduce with
//! integer remainders, so the result is exact and independent of rounding.

use super::bits::{EXP_MASK, MANT_MASK, SIGN_MASK};

const IMPLICIT_BIT: u64 = MANT_MASK + 1;
const SIG_BITS: u32 = 52;

/// Splits `|x|` into an integer significand and a shifted exponent so that
/// subnormals and normals share one representation.
#[inline(always)]
fn into_sig_exp(bits: u64) -> (u64, u32) {
    let bits = bits & !SIGN_MASK;
    let sat = bits.saturating_sub(IMPLICIT_BIT);
    (bits - (sat & EXP_MASK), (sat >> SIG_BITS) as u32)
}

/// `(x * 2^e) mod y` for integer significands.
#[inline(always)]
fn reduction(mut x: u64, mut e: u32, y: u64) -> u64 {
    if x >= y {
        x %= y;
    }
    if e <= 8 {
        for _ in 0..e {
            x <<= 1;
            if x >= y {
                x -= y;
            }
        }
        return x;
    }
    while e > 63 {
        x = (((x as u128) << 63) % (y as u128)) as u64;
        e -= 63;
    }
    (((x as u128) << e) % (y as u128)) as u64
}

/// Remainder of `x / y` truncated toward zero; the result takes the sign of
/// `x`.
pub fn fmod(x: f64, y: f64) -> f64 {
    let sx = x.to_bits() & SIGN_MASK;
    let ux = x.to_bits() & !SIGN_MASK;
    let uy = y.to_bits() & !SIGN_MASK;

    if uy == 0 || ux >= EXP_MASK || uy > EXP_MASK {
        return (x * y) / (x * y);
    }
    if ux < uy {
        return x;
    }
    if ux == uy {
        return f64::from_bits(sx);
    }

    let (num, ex) = into_sig_exp(ux);
    let (div, ey) = into_sig_exp(uy);
    let rem = reduction(num, ex - ey, div);
    if rem == 0 {
        return f64::from_bits(sx);
    }

    let ilog = 63 - rem.leading_zeros();
    let shift = ey.min(SIG_BITS - ilog);
    let bits = (rem << shift) + (((ey - shift) as u64) << SIG_BITS);
    f64::from_bits(sx | bits)
}
