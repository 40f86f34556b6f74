//! Trigonometric kernels on `[-pi/4, pi/4]`.
//!
//! Each takes the reduced argument as a head `x` and tail `y` (as produced
//! by [`rem_pio2`](super::rem_pio2)) and evaluates a minimax polynomial.

use super::bits::{abs_hi, hi_word, lo_word, with_hi_lo, zero_lo_word};
use super::fabs;

const ONE: f64 = 1.0;
const HALF: f64 = 5.00000000000000000000e-01; // 0x3FE00000, 0x00000000

const S1: f64 = -1.66666666666666324348e-01; // 0xBFC55555, 0x55555549
const S2: f64 = 8.33333333332248946124e-03; // 0x3F811111, 0x1110F8A6
const S3: f64 = -1.98412698298579493134e-04; // 0xBF2A01A0, 0x19C161D5
const S4: f64 = 2.75573137070700676789e-06; // 0x3EC71DE3, 0x57B1FE7D
const S5: f64 = -2.50507602534068634195e-08; // 0xBE5AE5E6, 0x8A2B9CEB
const S6: f64 = 1.58969099521155010221e-10; // 0x3DE5D93A, 0x5ACFD57C

const C1: f64 = 4.16666666666666019037e-02; // 0x3FA55555, 0x5555554C
const C2: f64 = -1.38888888888741095749e-03; // 0xBF56C16C, 0x16C15177
const C3: f64 = 2.48015872894767294178e-05; // 0x3EFA01A0, 0x19CB1590
const C4: f64 = -2.75573143513906633035e-07; // 0xBE927E4F, 0x809C52AD
const C5: f64 = 2.08757232129817482790e-09; // 0x3E21EE9E, 0xBDB4B1C4
const C6: f64 = -1.13596475577881948265e-11; // 0xBDA8FAE9, 0xBE8838D4

const T: [f64; 13] = [
    3.33333333333334091986e-01,  // 0x3FD55555, 0x55555563
    1.33333333333201242699e-01,  // 0x3FC11111, 0x1110FE7A
    5.39682539762260521377e-02,  // 0x3FABA1BA, 0x1BB341FE
    2.18694882948595424599e-02,  // 0x3F9664F4, 0x8406D637
    8.86323982359930005737e-03,  // 0x3F8226E3, 0xE96E8493
    3.59207910759131235356e-03,  // 0x3F6D6D22, 0xC9560328
    1.45620945432529025516e-03,  // 0x3F57DBC8, 0xFEE08315
    5.88041240820264096874e-04,  // 0x3F4344D8, 0xF2F26501
    2.46463134818469906812e-04,  // 0x3F3026F7, 0x1A8D1068
    7.81794442939557092300e-05,  // 0x3F147E88, 0xA03792A6
    7.14072491382608190305e-05,  // 0x3F12B80F, 0x32F0A7E9
    -1.85586374855275456654e-05, // 0xBEF375CB, 0xDB605373
    2.59073051863633712884e-05,  // 0x3EFB2A70, 0x74BF7AD4
];
const PIO4: f64 = 7.85398163397448278999e-01; // 0x3FE921FB, 0x54442D18
const PIO4LO: f64 = 3.06161699786838301793e-17; // 0x3C81A626, 0x33145C07

/// |x| < 2^-27
const SIN_COS_TINY_HI: u32 = 0x3e40_0000;
/// |x| < 0.3
const COS_SMALL_HI: u32 = 0x3fd3_3333;
/// |x| > 0.78125
const COS_LARGE_HI: u32 = 0x3fe9_0000;
/// |x| < 2^-28
const TAN_TINY_HI: u32 = 0x3e30_0000;
/// |x| >= 0.6744
const TAN_REFLECT_HI: u32 = 0x3fe5_9428;

/// sin(x + y) for `|x| <= pi/4`.
///
/// `iy == 0` means `y` is zero and is ignored.
pub fn kernel_sin(x: f64, y: f64, iy: i32) -> f64 {
    // generate inexact
    if abs_hi(x) < SIN_COS_TINY_HI && x as i32 == 0 {
        return x;
    }
    let z = x * x;
    let v = z * x;
    let r = S2 + z * (S3 + z * (S4 + z * (S5 + z * S6)));
    if iy == 0 {
        x + v * (S1 + z * r)
    } else {
        x - ((z * (HALF * y - v * r) - y) - v * S1)
    }
}

/// cos(x + y) for `|x| <= pi/4`.
///
/// For `|x| >= 0.3` the leading `1 - x*x/2` is split as
/// `(1 - qx) - (x*x/2 - qx)` to keep the subtraction exact.
pub fn kernel_cos(x: f64, y: f64) -> f64 {
    let ix = abs_hi(x);
    if ix < SIN_COS_TINY_HI && x as i32 == 0 {
        return ONE;
    }
    let z = x * x;
    let r = z * (C1 + z * (C2 + z * (C3 + z * (C4 + z * (C5 + z * C6)))));
    if ix < COS_SMALL_HI {
        return ONE - (HALF * z - (z * r - x * y));
    }
    let qx = if ix > COS_LARGE_HI {
        0.28125
    } else {
        // x/4
        with_hi_lo(ix - 0x0020_0000, 0)
    };
    let hz = HALF * z - qx;
    let a = ONE - qx;
    a - (hz - (z * r - x * y))
}

/// -1/w evaluated as `t + a*(1 + t*z + t*v)` with `z + v = w` and `t` a
/// truncated `a = -1/w`.
fn neg_recip(z: f64, v: f64, w: f64) -> f64 {
    let a = -ONE / w;
    let t = zero_lo_word(a);
    let s = ONE + t * z;
    t + a * (s + t * v)
}

/// tan(x + y) for `|x| <= pi/4` when `iy == 1`, `-1/tan(x + y)` when
/// `iy == -1`.
pub fn kernel_tan(x: f64, y: f64, iy: i32) -> f64 {
    let hx = hi_word(x) as i32;
    let ix = abs_hi(x);
    let mut x = x;
    let mut y = y;

    if ix < TAN_TINY_HI && x as i32 == 0 {
        if (ix | lo_word(x)) == 0 && iy == -1 {
            return ONE / fabs(x);
        }
        if iy == 1 {
            return x;
        }
        // compute -1/(x+y) carefully
        let w = x + y;
        let z = zero_lo_word(w);
        let v = y - (z - x);
        return neg_recip(z, v, w);
    }

    let reflect = ix >= TAN_REFLECT_HI;
    if reflect {
        if hx < 0 {
            x = -x;
            y = -y;
        }
        let z = PIO4 - x;
        let w = PIO4LO - y;
        x = z + w;
        y = 0.0;
    }

    let z = x * x;
    let w = z * z;
    // x^5*(T[1]+x^4*T[3]+...+x^20*T[11]) + x^5*(x^2*(T[2]+x^4*T[4]+...+x^22*T[12]))
    let r = T[1] + w * (T[3] + w * (T[5] + w * (T[7] + w * (T[9] + w * T[11]))));
    let v = z * (T[2] + w * (T[4] + w * (T[6] + w * (T[8] + w * (T[10] + w * T[12])))));
    let s = z * x;
    let mut r = y + z * (s * (r + v) + y);
    r += T[0] * s;
    let w = x + r;

    if reflect {
        let v = f64::from(iy);
        let sign = f64::from(1 - ((hx >> 30) & 2));
        return sign * (v - 2.0 * (x - (w * w / (w + v) - r)));
    }
    if iy == 1 {
        return w;
    }
    // -1/(x+r) accurately
    let z = zero_lo_word(w);
    let v = r - (z - x);
    neg_recip(z, v, w)
}
