use super::bits::{abs_hi, INF_OR_NAN_HI};
use super::{kernel_cos, kernel_sin, rem_pio2};

/// |x| ~< pi/4
const PIO4_HI: u32 = 0x3fe9_21fb;

/// Sine. Arguments beyond pi/4 are reduced by [`rem_pio2`] and dispatched
/// to the sine or cosine kernel by quadrant.
#[allow(clippy::eq_op)]
pub fn sin(x: f64) -> f64 {
    let ix = abs_hi(x);
    if ix <= PIO4_HI {
        return kernel_sin(x, 0.0, 0);
    }
    // sin(Inf or NaN) is NaN
    if ix >= INF_OR_NAN_HI {
        return x - x;
    }
    let (n, y0, y1) = rem_pio2(x);
    match n & 3 {
        0 => kernel_sin(y0, y1, 1),
        1 => kernel_cos(y0, y1),
        2 => -kernel_sin(y0, y1, 1),
        _ => -kernel_cos(y0, y1),
    }
}
