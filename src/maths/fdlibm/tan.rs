use super::bits::{abs_hi, INF_OR_NAN_HI};
use super::{kernel_tan, rem_pio2};

/// |x| ~< pi/4
const PIO4_HI: u32 = 0x3fe9_21fb;

/// Tangent. Odd quadrants use the `-1/tan` form of [`kernel_tan`].
#[allow(clippy::eq_op)]
pub fn tan(x: f64) -> f64 {
    let ix = abs_hi(x);
    if ix <= PIO4_HI {
        return kernel_tan(x, 0.0, 1);
    }
    // tan(Inf or NaN) is NaN
    if ix >= INF_OR_NAN_HI {
        return x - x;
    }
    let (n, y0, y1) = rem_pio2(x);
    // 1 for even n, -1 for odd n
    kernel_tan(y0, y1, 1 - ((n & 1) << 1))
}
