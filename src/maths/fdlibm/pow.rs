//! pow(x, y) = x**y
//!
//! 1. `log2(x) = w1 + w2` to about 64 bits, with `w1` carrying 20 trailing
//!    zero bits.
//! 2. `y*log2(x) = n + y'` through a split multiplication of `y = y1 + y2`.
//! 3. `x**y = 2**n * exp(y'*ln2)`.
//!
//! The special cases (zeros, infinities, NaN, negative bases) are resolved
//! before any of that, in the order fdlibm checks them. `(±1)**±inf` is NaN.

use super::bits::{
    hi_word, lo_word, with_hi_lo, zero_lo_word, ABS_MASK_HI, INF_OR_NAN_HI, MIN_NORMAL_HI, ONE_HI,
};
use super::exp::{P1, P2, P3, P4, P5};
use super::{fabs, scalbn, sqrt};

const BP: [f64; 2] = [1.0, 1.5];
const DP_H: [f64; 2] = [0.0, 5.84962487220764160156e-01]; // 0x3FE2B803, 0x40000000
const DP_L: [f64; 2] = [0.0, 1.35003920212974897128e-08]; // 0x3E4CFDEB, 0x43CFD006
const ZERO: f64 = 0.0;
const ONE: f64 = 1.0;
const TWO: f64 = 2.0;
const TWO53: f64 = 9007199254740992.0; // 0x43400000, 0x00000000
const HUGE: f64 = 1.0e300;
const TINY: f64 = 1.0e-300;
// poly coefs for (3/2)*(log(x)-2s-2/3*s**3
const L1: f64 = 5.99999999999994648725e-01; // 0x3FE33333, 0x33333303
const L2: f64 = 4.28571428578550184252e-01; // 0x3FDB6DB6, 0xDB6FABFF
const L3: f64 = 3.33333329818377432918e-01; // 0x3FD55555, 0x518F264D
const L4: f64 = 2.72728123808534006489e-01; // 0x3FD17460, 0xA91D4101
const L5: f64 = 2.30660745775561754067e-01; // 0x3FCD864A, 0x93C9DB65
const L6: f64 = 2.06975017800338417784e-01; // 0x3FCA7E28, 0x4A454EEF
const LG2: f64 = 6.93147180559945286227e-01; // 0x3FE62E42, 0xFEFA39EF
const LG2_H: f64 = 6.93147182464599609375e-01; // 0x3FE62E43, 0x00000000
const LG2_L: f64 = -1.90465429995776804525e-09; // 0xBE205C61, 0x0CA86C39
const OVT: f64 = 8.0085662595372944372e-17; // -(1024-log2(ovfl+.5ulp))
const CP: f64 = 9.61796693925975554329e-01; // 0x3FEEC709, 0xDC3A03FD =2/(3ln2)
const CP_H: f64 = 9.61796700954437255859e-01; // 0x3FEEC709, 0xE0000000 =(float)cp
const CP_L: f64 = -7.02846165095275826516e-09; // 0xBE3E2FE0, 0x145B01F5 =tail of cp_h
const IVLN2: f64 = 1.44269504088896338700e+00; // 0x3FF71547, 0x652B82FE =1/ln2
const IVLN2_H: f64 = 1.44269502162933349609e+00; // 0x3FF71547, 0x60000000 =24b 1/ln2
const IVLN2_L: f64 = 1.92596299112661746887e-08; // 0x3E54AE0B, 0xF85DDF44 =1/ln2 tail

/// |y| >= 2^53: every such y is an even integer
const TWO53_HI: i32 = 0x4340_0000;
/// |y| > 2^31
const Y_HUGE_HI: i32 = 0x41e0_0000;
/// |y| > 2^64: x**y must overflow or underflow unless x is 1
const Y_VERY_HUGE_HI: i32 = 0x43f0_0000;
/// High word of the largest double below 1.0.
const BELOW_ONE_HI: i32 = 0x3fef_ffff;
/// z >= 1024
const OVERFLOW_Z_HI: i32 = 0x4090_0000;
/// |z| >= 1075
const UNDERFLOW_Z_HI: i32 = 0x4090_cc00;
/// High word of -1075.
const NEG_1075_HI: u32 = 0xc090_cc00;

/// Parity of `y` when `x < 0`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum YKind {
    NonInteger,
    Odd,
    Even,
}

fn classify_y(iy: i32, ly: u32) -> YKind {
    if iy >= TWO53_HI {
        return YKind::Even;
    }
    if iy < ONE_HI as i32 {
        return YKind::NonInteger;
    }
    let k = (iy >> 20) - 0x3ff;
    let (j, trailing_zero_free) = if k > 20 {
        let shift = (52 - k) as u32;
        let j = ly >> shift;
        (j, (j << shift) == ly)
    } else if ly == 0 {
        let shift = (20 - k) as u32;
        let j = (iy as u32) >> shift;
        (j, (j << shift) == iy as u32)
    } else {
        return YKind::NonInteger;
    };
    match (trailing_zero_free, j & 1) {
        (false, _) => YKind::NonInteger,
        (true, 1) => YKind::Odd,
        (true, _) => YKind::Even,
    }
}

#[allow(clippy::eq_op)]
pub fn pow(x: f64, y: f64) -> f64 {
    let hx = hi_word(x) as i32;
    let lx = lo_word(x);
    let hy = hi_word(y) as i32;
    let ly = lo_word(y);
    let mut ix = hx & ABS_MASK_HI as i32;
    let iy = hy & ABS_MASK_HI as i32;
    let inf_hi = INF_OR_NAN_HI as i32;
    let one_hi = ONE_HI as i32;

    // y == zero: x**0 = 1
    if (iy as u32 | ly) == 0 {
        return ONE;
    }

    // +-NaN return x+y
    if ix > inf_hi || (ix == inf_hi && lx != 0) || iy > inf_hi || (iy == inf_hi && ly != 0) {
        return x + y;
    }

    let yisint = if hx < 0 { classify_y(iy, ly) } else { YKind::NonInteger };

    // special value of y
    if ly == 0 {
        if iy == inf_hi {
            // y is +-inf
            if ((ix - one_hi) as u32 | lx) == 0 {
                // (+-1)**+-inf is NaN
                return y - y;
            }
            if ix >= one_hi {
                // (|x|>1)**+-inf = inf,0
                return if hy >= 0 { y } else { ZERO };
            }
            // (|x|<1)**-,+inf = inf,0
            return if hy < 0 { -y } else { ZERO };
        }
        if iy == one_hi {
            return if hy < 0 { ONE / x } else { x };
        }
        if hy == 0x4000_0000 {
            // y is 2
            return x * x;
        }
        if hy == 0x3fe0_0000 && hx >= 0 {
            // y is 0.5, x >= +0
            return sqrt(x);
        }
    }

    let mut ax = fabs(x);
    // special value of x
    if lx == 0 && (ix == inf_hi || ix == 0 || ix == one_hi) {
        // x is +-0,+-inf,+-1
        let mut z = ax;
        if hy < 0 {
            z = ONE / z;
        }
        if hx < 0 {
            if ix == one_hi && yisint == YKind::NonInteger {
                // (-1)**non-int is NaN
                z = (z - z) / (z - z);
            } else if yisint == YKind::Odd {
                // (x<0)**odd = -(|x|**odd)
                z = -z;
            }
        }
        return z;
    }

    // (x<0)**(non-int) is NaN
    if hx < 0 && yisint == YKind::NonInteger {
        return (x - x) / (x - x);
    }

    // sign of result: -ve**odd is negative
    let s = if hx < 0 && yisint == YKind::Odd { -ONE } else { ONE };

    let (t1, t2) = if iy > Y_HUGE_HI {
        if iy > Y_VERY_HUGE_HI {
            if ix <= BELOW_ONE_HI {
                return if hy < 0 { HUGE * HUGE } else { TINY * TINY };
            }
            if ix >= one_hi {
                return if hy > 0 { HUGE * HUGE } else { TINY * TINY };
            }
        }
        // over/underflow if x is not close to one
        if ix < BELOW_ONE_HI {
            return if hy < 0 { s * HUGE * HUGE } else { s * TINY * TINY };
        }
        if ix > one_hi {
            return if hy > 0 { s * HUGE * HUGE } else { s * TINY * TINY };
        }
        // |1-x| <= 2^-20, so log(x) is x-x^2/2+x^3/3-x^4/4
        let t = ax - ONE; // 20 trailing zeros
        let w = (t * t) * (0.5 - t * (0.3333333333333333333333 - t * 0.25));
        let u = IVLN2_H * t; // 21 significant bits
        let v = t * IVLN2_L - w * IVLN2;
        let t1 = zero_lo_word(u + v);
        (t1, v - (t1 - u))
    } else {
        let mut n: i32 = 0;
        // subnormal x
        if ix < MIN_NORMAL_HI as i32 {
            ax *= TWO53;
            n -= 53;
            ix = hi_word(ax) as i32;
        }
        n += (ix >> 20) - 0x3ff;
        let j = ix & 0x000f_ffff;
        // normalize ix and pick the interval
        ix = j | one_hi;
        let k: usize = if j <= 0x3988e {
            // |x| < sqrt(3/2)
            0
        } else if j < 0xbb67a {
            // |x| < sqrt(3)
            1
        } else {
            n += 1;
            ix -= 0x0010_0000;
            0
        };
        ax = with_hi_lo(ix as u32, lo_word(ax));

        // ss = s_h+s_l = (x-1)/(x+1) or (x-1.5)/(x+1.5)
        let u = ax - BP[k];
        let v = ONE / (ax + BP[k]);
        let ss = u * v;
        let s_h = zero_lo_word(ss);
        // t_h = ax+bp[k] high
        let t_h = with_hi_lo(
            (((ix >> 1) | 0x2000_0000) + 0x0008_0000 + ((k as i32) << 18)) as u32,
            0,
        );
        let t_l = ax - (t_h - BP[k]);
        let s_l = v * ((u - s_h * t_h) - s_h * t_l);

        // log(ax)
        let mut s2 = ss * ss;
        let mut r = s2 * s2 * (L1 + s2 * (L2 + s2 * (L3 + s2 * (L4 + s2 * (L5 + s2 * L6)))));
        r += s_l * (s_h + ss);
        s2 = s_h * s_h;
        let t_h = zero_lo_word(3.0 + s2 + r);
        let t_l = r - ((t_h - 3.0) - s2);
        // u+v = ss*(1+...)
        let u = s_h * t_h;
        let v = s_l * t_h + t_l * ss;
        // 2/(3log2)*(ss+...)
        let p_h = zero_lo_word(u + v);
        let p_l = v - (p_h - u);
        let z_h = CP_H * p_h;
        let z_l = CP_L * p_h + p_l * CP + DP_L[k];
        // log2(ax) = (ss+..)*2/(3*log2) = n + dp_h + z_h + z_l
        let t = f64::from(n);
        let t1 = zero_lo_word(((z_h + z_l) + DP_H[k]) + t);
        (t1, z_l - (((t1 - t) - DP_H[k]) - z_h))
    };

    // split y into y1+y2 and compute (y1+y2)*(t1+t2)
    let y1 = zero_lo_word(y);
    let p_l = (y - y1) * t1 + y * t2;
    let mut p_h = y1 * t1;
    let mut z = p_l + p_h;
    let j = hi_word(z) as i32;
    let i = lo_word(z);
    if j >= OVERFLOW_Z_HI {
        // z >= 1024
        if ((j - OVERFLOW_Z_HI) as u32 | i) != 0 || p_l + OVT > z - p_h {
            return s * HUGE * HUGE;
        }
    } else if (j & ABS_MASK_HI as i32) >= UNDERFLOW_Z_HI {
        // z <= -1075
        if (j as u32 != NEG_1075_HI || i != 0) || p_l <= z - p_h {
            return s * TINY * TINY;
        }
    }

    // 2**(p_h+p_l)
    let i = j & ABS_MASK_HI as i32;
    let mut k = (i >> 20) - 0x3ff;
    let mut n: i32 = 0;
    if i > 0x3fe0_0000 {
        // |z| > 0.5, n = [z+0.5]
        n = j.wrapping_add(0x0010_0000 >> (k + 1));
        k = ((n & ABS_MASK_HI as i32) >> 20) - 0x3ff;
        let t = with_hi_lo((n & !(0x000f_ffff >> k)) as u32, 0);
        n = ((n & 0x000f_ffff) | 0x0010_0000) >> (20 - k);
        if j < 0 {
            n = -n;
        }
        p_h -= t;
    }
    let t = zero_lo_word(p_l + p_h);
    let u = t * LG2_H;
    let v = (p_l - (t - p_h)) * LG2 + t * LG2_L;
    z = u + v;
    let w = v - (z - u);
    let t = z * z;
    let t1 = z - t * (P1 + t * (P2 + t * (P3 + t * (P4 + t * P5))));
    let r = (z * t1) / (t1 - TWO) - (w + z * w);
    z = ONE - (r - z);
    let j = (hi_word(z) as i32).wrapping_add(n << 20);
    z = if (j >> 20) <= 0 {
        // subnormal output
        scalbn(z, n)
    } else {
        with_hi_lo(j as u32, lo_word(z))
    };
    s * z
}
