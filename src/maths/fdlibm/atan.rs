//! atan(x)
//!
//! Reduce `|x|` into one of five intervals around 0, 0.5, 1, 1.5 and
//! infinity, then `atan(x) = atan(c) + atan(t)` with a degree-11 odd
//! polynomial for `atan(t)`.

use super::bits::{abs_hi, hi_word, is_nan_words, lo_word};
use super::fabs;

const ATANHI: [f64; 4] = [
    4.63647609000806093515e-01, // atan(0.5)hi 0x3FDDAC67, 0x0561BB4F
    7.85398163397448278999e-01, // atan(1.0)hi 0x3FE921FB, 0x54442D18
    9.82793723247329054082e-01, // atan(1.5)hi 0x3FEF730B, 0xD281F69B
    1.57079632679489655800e+00, // atan(inf)hi 0x3FF921FB, 0x54442D18
];

const ATANLO: [f64; 4] = [
    2.26987774529616870924e-17, // atan(0.5)lo 0x3C7A2B7F, 0x222F65E2
    3.06161699786838301793e-17, // atan(1.0)lo 0x3C81A626, 0x33145C07
    1.39033110312309984516e-17, // atan(1.5)lo 0x3C700788, 0x7AF0CBBD
    6.12323399573676603587e-17, // atan(inf)lo 0x3C91A626, 0x33145C07
];

const AT: [f64; 11] = [
    3.33333333333329318027e-01,  // 0x3FD55555, 0x5555550D
    -1.99999999998764832476e-01, // 0xBFC99999, 0x9998EBC4
    1.42857142725034663711e-01,  // 0x3FC24924, 0x920083FF
    -1.11111104054623557880e-01, // 0xBFBC71C6, 0xFE231671
    9.09088713343650656196e-02,  // 0x3FB745CD, 0xC54C206E
    -7.69187620504482999495e-02, // 0xBFB3B0F2, 0xAF749A6D
    6.66107313738753120669e-02,  // 0x3FB10D66, 0xA0D03D51
    -5.83357013379057348645e-02, // 0xBFADDE2D, 0x52DEFD9A
    4.97687799461593236017e-02,  // 0x3FA97B4B, 0x24760DEB
    -3.65315727442169155270e-02, // 0xBFA2B444, 0x2C6A6C2F
    1.62858201153657823623e-02,  // 0x3F90AD3A, 0xE322DA11
];

const ONE: f64 = 1.0;
const HUGE: f64 = 1.0e300;

/// |x| >= 2^66
const HUGE_ARG_HI: u32 = 0x4410_0000;
/// |x| < 0.4375
const SMALL_ARG_HI: u32 = 0x3fdc_0000;
/// |x| < 2^-29
const TINY_ARG_HI: u32 = 0x3e20_0000;

pub fn atan(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let ix = abs_hi(x);
    let mut x = x;
    let id: i32;

    if ix >= HUGE_ARG_HI {
        if is_nan_words(ix, lo_word(x)) {
            return x + x;
        }
        if hx > 0 {
            return ATANHI[3] + ATANLO[3];
        }
        return -ATANHI[3] - ATANLO[3];
    }
    if ix < SMALL_ARG_HI {
        if ix < TINY_ARG_HI && HUGE + x > ONE {
            return x;
        }
        id = -1;
    } else {
        x = fabs(x);
        if ix < 0x3ff3_0000 {
            // |x| < 1.1875
            if ix < 0x3fe6_0000 {
                // 7/16 <= |x| < 11/16
                id = 0;
                x = (2.0 * x - ONE) / (2.0 + x);
            } else {
                // 11/16 <= |x| < 19/16
                id = 1;
                x = (x - ONE) / (x + ONE);
            }
        } else if ix < 0x4003_8000 {
            // |x| < 2.4375
            id = 2;
            x = (x - 1.5) / (ONE + 1.5 * x);
        } else {
            // 2.4375 <= |x| < 2^66
            id = 3;
            x = -1.0 / x;
        }
    }

    let z = x * x;
    let w = z * z;
    // odd and even halves of the polynomial
    let s1 = z * (AT[0] + w * (AT[2] + w * (AT[4] + w * (AT[6] + w * (AT[8] + w * AT[10])))));
    let s2 = w * (AT[1] + w * (AT[3] + w * (AT[5] + w * (AT[7] + w * AT[9]))));
    if id < 0 {
        return x - x * (s1 + s2);
    }
    let id = id as usize;
    let z = ATANHI[id] - ((x * (s1 + s2) - ATANLO[id]) - x);
    if hx < 0 {
        -z
    } else {
        z
    }
}
