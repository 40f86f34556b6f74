use super::asin::{rational_pq, PIO2_HI, PIO2_LO};
use super::bits::{abs_hi, hi_word, lo_word, zero_lo_word, ONE_HI};
use super::sqrt;

const PI: f64 = 3.14159265358979311600e+00; // 0x400921FB, 0x54442D18
const HALF_HI: u32 = 0x3fe0_0000;
/// |x| <= 2^-57
const TINY_HI: u32 = 0x3c60_0000;

/// acos(x), using the same rational approximation as `asin`.
///
/// `acos(x) = pi/2 - asin(x)` for `|x| < 0.5`; otherwise
/// `acos(x) = 2*asin(sqrt((1-x)/2))` (mirrored through `pi` for `x < 0`).
#[allow(clippy::eq_op)]
pub fn acos(x: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let ix = abs_hi(x);
    if ix >= ONE_HI {
        if ((ix - ONE_HI) | lo_word(x)) == 0 {
            if hx > 0 {
                return 0.0;
            }
            return PI + 2.0 * PIO2_LO;
        }
        return (x - x) / (x - x);
    }
    if ix < HALF_HI {
        if ix <= TINY_HI {
            return PIO2_HI + PIO2_LO;
        }
        let z = x * x;
        let (p, q) = rational_pq(z);
        let r = p / q;
        PIO2_HI - (x - (PIO2_LO - x * r))
    } else if hx < 0 {
        // x < -0.5
        let z = (1.0 + x) * 0.5;
        let (p, q) = rational_pq(z);
        let s = sqrt(z);
        let r = p / q;
        let w = r * s - PIO2_LO;
        PI - 2.0 * (s + w)
    } else {
        // x > 0.5
        let z = (1.0 - x) * 0.5;
        let s = sqrt(z);
        let df = zero_lo_word(s);
        let c = (z - df * df) / (s + df);
        let (p, q) = rational_pq(z);
        let r = p / q;
        let w = r * s + c;
        2.0 * (df + w)
    }
}
