use super::bits::{hi_word, lo_word, set_hi_word, ABS_MASK_HI, INF_OR_NAN_HI, MIN_NORMAL_HI};
use super::log;
use super::log::TWO54;

const IVLN10: f64 = 4.34294481903251816668e-01; // 0x3FDBCB7B, 0x1526E50E
const LOG10_2HI: f64 = 3.01029995663611771306e-01; // 0x3FD34413, 0x509F6000
const LOG10_2LO: f64 = 3.69423907715893078616e-13; // 0x3D59FEF3, 0x11F12B36
const ZERO: f64 = 0.0;

/// Base-10 logarithm as `n*log10(2) + log(x')/ln(10)` with `x = 2^n * x'`.
///
/// `log10(10^n) == n` for small integer `n`.
#[allow(clippy::eq_op)]
pub fn log10(x: f64) -> f64 {
    let mut x = x;
    let mut hx = hi_word(x) as i32;
    let lx = lo_word(x);

    let mut k: i32 = 0;
    if hx < MIN_NORMAL_HI as i32 {
        if ((hx as u32 & ABS_MASK_HI) | lx) == 0 {
            return -TWO54 / ZERO;
        }
        if hx < 0 {
            return (x - x) / ZERO;
        }
        k -= 54;
        x *= TWO54;
        hx = hi_word(x) as i32;
    }
    if hx >= INF_OR_NAN_HI as i32 {
        return x + x;
    }
    k += (hx >> 20) - 1023;
    let i = ((k as u32) & 0x8000_0000) >> 31;
    hx = (hx & 0x000f_ffff) | ((0x3ff - i as i32) << 20);
    let y = (k + i as i32) as f64;
    x = set_hi_word(x, hx as u32);
    let z = y * LOG10_2LO + IVLN10 * log(x);
    z + y * LOG10_2HI
}
