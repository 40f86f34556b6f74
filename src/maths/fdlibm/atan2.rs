use super::bits::{
    hi_word, is_nan_words, lo_word, set_hi_word, ABS_MASK_HI, INF_OR_NAN_HI, ONE_HI,
    SIGN_MASK_HI,
};
use super::{atan, fabs};

const TINY: f64 = 1.0e-300;
const ZERO: f64 = 0.0;
const PI_O_4: f64 = 7.8539816339744827900E-01; // 0x3FE921FB, 0x54442D18
const PI_O_2: f64 = 1.5707963267948965580E+00; // 0x3FF921FB, 0x54442D18
const PI: f64 = 3.1415926535897931160E+00; // 0x400921FB, 0x54442D18
const PI_LO: f64 = 1.2246467991473531772E-16; // 0x3CA1A626, 0x33145C07

/// atan2(y, x): the angle of the point `(x, y)`, in `[-pi, pi]`.
///
/// Quadrant selection uses `m = 2*sign(x) + sign(y)`; the core is
/// `atan(|y/x|)` with the `pi` correction split into `PI - (z - PI_LO)`.
pub fn atan2(y: f64, x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let ix = hx as u32 & ABS_MASK_HI;
    let lx = lo_word(x);
    let hy = hi_word(y) as i32;
    let iy = hy as u32 & ABS_MASK_HI;
    let ly = lo_word(y);

    if is_nan_words(ix, lx) || is_nan_words(iy, ly) {
        return x + y;
    }
    if hx as u32 == ONE_HI && lx == 0 {
        // x = 1.0
        return atan(y);
    }
    // 2*sign(x) + sign(y)
    let m = ((hy >> 31) & 1) | ((hx >> 30) & 2);

    // y = 0
    if (iy | ly) == 0 {
        match m {
            0 | 1 => return y,
            2 => return PI + TINY,
            _ => return -PI - TINY,
        }
    }
    // x = 0
    if (ix | lx) == 0 {
        return if hy < 0 { -PI_O_2 - TINY } else { PI_O_2 + TINY };
    }
    // x = inf
    if ix == INF_OR_NAN_HI {
        if iy == INF_OR_NAN_HI {
            return match m {
                0 => PI_O_4 + TINY,
                1 => -PI_O_4 - TINY,
                2 => 3.0 * PI_O_4 + TINY,
                _ => -3.0 * PI_O_4 - TINY,
            };
        }
        return match m {
            0 => ZERO,
            1 => -ZERO,
            2 => PI + TINY,
            _ => -PI - TINY,
        };
    }
    // y = inf
    if iy == INF_OR_NAN_HI {
        return if hy < 0 { -PI_O_2 - TINY } else { PI_O_2 + TINY };
    }

    let k = (iy as i32 - ix as i32) >> 20;
    let z = if k > 60 {
        // |y/x| > 2^60
        PI_O_2 + 0.5 * PI_LO
    } else if hx < 0 && k < -60 {
        // |y|/x < -2^60
        0.0
    } else {
        atan(fabs(y / x))
    };
    match m {
        0 => z,
        1 => set_hi_word(z, hi_word(z) ^ SIGN_MASK_HI),
        2 => PI - (z - PI_LO),
        _ => (z - PI_LO) - PI,
    }
}
