//! log1p(x) = log(1+x), accurate near zero.
//!
//! `1+x` is formed as `2^k * (1+f)` with a correction term `c` for the
//! rounding error in `u = 1+x`; the polynomial is the one `log` uses.

use super::bits::{hi_word, set_hi_word, ABS_MASK_HI, INF_OR_NAN_HI};
use super::log::{LN2_HI, LN2_LO, TWO54};

const LP1: f64 = 6.666666666666735130e-01; // 3FE55555 55555593
const LP2: f64 = 3.999999999940941908e-01; // 3FD99999 9997FA04
const LP3: f64 = 2.857142874366239149e-01; // 3FD24924 94229359
const LP4: f64 = 2.222219843214978396e-01; // 3FCC71C5 1D8E78AF
const LP5: f64 = 1.818357216161805012e-01; // 3FC74664 96CB03DE
const LP6: f64 = 1.531383769920937332e-01; // 3FC39A09 D078C69F
const LP7: f64 = 1.479819860511658591e-01; // 3FC2F112 DF3E5244
const ZERO: f64 = 0.0;

/// x < 0.41422
const SQRT2_M1_HI: i32 = 0x3fda_827a;
/// |x| < 2^-29
const TINY_HI: u32 = 0x3e20_0000;
/// |x| < 2^-54
const TINIER_HI: u32 = 0x3c90_0000;
/// x > -0.2929
const NEG_BOUND_HI: i32 = 0xbfd2_bec3u32 as i32;
/// 1+x rounds to x beyond 2^53
const TWO53_HI: i32 = 0x4340_0000;

#[allow(clippy::eq_op)]
pub fn log1p(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let ax = hi_word(x) & ABS_MASK_HI;

    let mut k: i32 = 1;
    let mut f = 0.0;
    let mut c = 0.0;
    let mut hu: i32 = 0;

    if hx < SQRT2_M1_HI {
        if ax >= 0x3ff0_0000 {
            // x <= -1.0
            if x == -1.0 {
                return -TWO54 / ZERO;
            }
            return (x - x) / (x - x);
        }
        if ax < TINY_HI {
            if TWO54 + x > ZERO && ax < TINIER_HI {
                return x;
            }
            return x - x * x * 0.5;
        }
        if hx > 0 || hx <= NEG_BOUND_HI {
            // -0.2929 < x < 0.41422
            k = 0;
            f = x;
            hu = 1;
        }
    }
    if hx >= INF_OR_NAN_HI as i32 {
        return x + x;
    }
    if k != 0 {
        let mut u;
        if hx < TWO53_HI {
            u = 1.0 + x;
            hu = hi_word(u) as i32;
            k = (hu >> 20) - 1023;
            // correction term
            c = if k > 0 { 1.0 - (u - x) } else { x - (u - 1.0) };
            c /= u;
        } else {
            u = x;
            hu = hi_word(u) as i32;
            k = (hu >> 20) - 1023;
            c = 0.0;
        }
        hu &= 0x000f_ffff;
        if hu < 0x6a09e {
            // normalize u
            u = set_hi_word(u, (hu | 0x3ff0_0000) as u32);
        } else {
            // normalize u/2
            k += 1;
            u = set_hi_word(u, (hu | 0x3fe0_0000) as u32);
            hu = (0x0010_0000 - hu) >> 2;
        }
        f = u - 1.0;
    }
    let hfsq = 0.5 * f * f;
    let dk = k as f64;
    if hu == 0 {
        // |f| < 2^-20
        if f == ZERO {
            if k == 0 {
                return ZERO;
            }
            c += dk * LN2_LO;
            return dk * LN2_HI + c;
        }
        let r = hfsq * (1.0 - 0.66666666666666666 * f);
        if k == 0 {
            return f - r;
        }
        return dk * LN2_HI - ((r - (dk * LN2_LO + c)) - f);
    }
    let s = f / (2.0 + f);
    let z = s * s;
    let r = z * (LP1 + z * (LP2 + z * (LP3 + z * (LP4 + z * (LP5 + z * (LP6 + z * LP7))))));
    if k == 0 {
        return f - (hfsq - s * (hfsq + r));
    }
    dk * LN2_HI - ((hfsq - (s * (hfsq + r) + (dk * LN2_LO + c))) - f)
}
