use super::bits::{abs_hi, INF_OR_NAN_HI};
use super::{kernel_cos, kernel_sin, rem_pio2};

/// |x| ~< pi/4
const PIO4_HI: u32 = 0x3fe9_21fb;

/// Cosine, reduced and dispatched the same way as [`sin`](super::sin).
#[allow(clippy::eq_op)]
pub fn cos(x: f64) -> f64 {
    let ix = abs_hi(x);
    if ix <= PIO4_HI {
        return kernel_cos(x, 0.0);
    }
    // cos(Inf or NaN) is NaN
    if ix >= INF_OR_NAN_HI {
        return x - x;
    }
    let (n, y0, y1) = rem_pio2(x);
    match n & 3 {
        0 => kernel_cos(y0, y1),
        1 => -kernel_sin(y0, y1, 1),
        2 => -kernel_cos(y0, y1),
        _ => kernel_sin(y0, y1, 1),
    }
}
