//! Argument reduction by pi/2.
//!
//! `rem_pio2(x)` returns `n` and `y0 + y1 = x - n*pi/2` with `|y0 + y1|`
//! at most about pi/4. Three regimes:
//!
//! - `|x| < 3pi/4`: a single subtraction of a 33+53 bit pi/2;
//! - `|x| <= 2^19 * pi/2`: Cody-Waite with up to three pi/2 pieces;
//! - larger: Payne-Hanek over 24-bit limbs of 2/pi.

#![allow(clippy::needless_range_loop)]

use super::bits::{abs_hi, hi_word, lo_word, with_hi_lo, INF_OR_NAN_HI};
use super::{fabs, floor, scalbn};

/// 2/pi in 24-bit limbs, 1584 bits in total.
const TWO_OVER_PI: [i32; 66] = [
    0xa2f983, 0x6e4e44, 0x1529fc, 0x2757d1, 0xf534dd, 0xc0db62, 0x95993c, 0x439041, 0xfe5163,
    0xabdebb, 0xc561b7, 0x246e3a, 0x424dd2, 0xe00649, 0x2eea09, 0xd1921c, 0xfe1deb, 0x1cb129,
    0xa73ee8, 0x8235f5, 0x2ebb44, 0x84e99c, 0x7026b4, 0x5f7e41, 0x3991d6, 0x398353, 0x39f49c,
    0x845f8b, 0xbdf928, 0x3b1ff8, 0x97ffde, 0x05980f, 0xef2f11, 0x8b5a0a, 0x6d1f6d, 0x367ecf,
    0x27cb09, 0xb74f46, 0x3f669e, 0x5fea2d, 0x7527ba, 0xc7ebe5, 0xf17b3d, 0x0739f7, 0x8a5292,
    0xea6bfb, 0x5fb11f, 0x8d5d08, 0x560330, 0x46fc7b, 0x6babf0, 0xcfbc20, 0x9af436, 0x1da9e3,
    0x91615e, 0xe61b08, 0x659985, 0x5f14a0, 0x68408d, 0xffd880, 0x4d7327, 0x310606, 0x1556ca,
    0x73a8c9, 0x60e27b, 0xc08c6b,
];

/// High words of n*pi/2 for n = 1..=32; a match flags possible cancellation.
const NPIO2_HW: [u32; 32] = [
    0x3ff921fb, 0x400921fb, 0x4012d97c, 0x401921fb, 0x401f6a7a, 0x4022d97c, 0x4025fdbb,
    0x402921fb, 0x402c463a, 0x402f6a7a, 0x4031475c, 0x4032d97c, 0x40346b9c, 0x4035fdbb,
    0x40378fdb, 0x403921fb, 0x403ab41b, 0x403c463a, 0x403dd85a, 0x403f6a7a, 0x40407e4c,
    0x4041475c, 0x4042106c, 0x4042d97c, 0x4043a28c, 0x40446b9c, 0x404534ac, 0x4045fdbb,
    0x4046c6cb, 0x40478fdb, 0x404858eb, 0x404921fb,
];

const ZERO: f64 = 0.0;
const HALF: f64 = 5.00000000000000000000e-01; // 0x3FE00000, 0x00000000
const TWO24: f64 = 1.67772160000000000000e+07; // 0x41700000, 0x00000000
const INVPIO2: f64 = 6.36619772367581382433e-01; // 0x3FE45F30, 0x6DC9C883
const PIO2_1: f64 = 1.57079632673412561417e+00; // 0x3FF921FB, 0x54400000
const PIO2_1T: f64 = 6.07710050650619224932e-11; // 0x3DD0B461, 0x1A626331
const PIO2_2: f64 = 6.07710050630396597660e-11; // 0x3DD0B461, 0x1A600000
const PIO2_2T: f64 = 2.02226624879595063154e-21; // 0x3BA3198A, 0x2E037073
const PIO2_3: f64 = 2.02226624871116645580e-21; // 0x3BA3198A, 0x2E000000
const PIO2_3T: f64 = 8.47842766036889956997e-32; // 0x397B839A, 0x252049C1

/// |x| ~<= pi/4
const PIO4_HI: u32 = 0x3fe9_21fb;
/// |x| < 3pi/4
const THREE_PIO4_HI: u32 = 0x4002_d97c;
/// High word of pi/2.
const PIO2_HI: u32 = 0x3ff9_21fb;
/// |x| ~<= 2^19*(pi/2)
const MEDIUM_HI: u32 = 0x4139_21fb;

/// Reduces `x` by multiples of pi/2.
///
/// Returns `(n, y0, y1)` where `x - n*pi/2 = y0 + y1` to well beyond double
/// precision. Infinities and NaN give `(0, NaN, NaN)`.
#[allow(clippy::eq_op)]
pub fn rem_pio2(x: f64) -> (i32, f64, f64) {
    let hx = hi_word(x) as i32;
    let ix = abs_hi(x);

    // no reduction needed
    if ix <= PIO4_HI {
        return (0, x, ZERO);
    }

    // n = +-1
    if ix < THREE_PIO4_HI {
        if hx > 0 {
            let mut z = x - PIO2_1;
            if ix != PIO2_HI {
                // 33+53 bit pi is good enough
                let y0 = z - PIO2_1T;
                return (1, y0, (z - y0) - PIO2_1T);
            }
            // near pi/2, use 33+33+53 bit pi
            z -= PIO2_2;
            let y0 = z - PIO2_2T;
            return (1, y0, (z - y0) - PIO2_2T);
        }
        let mut z = x + PIO2_1;
        if ix != PIO2_HI {
            let y0 = z + PIO2_1T;
            return (-1, y0, (z - y0) + PIO2_1T);
        }
        z += PIO2_2;
        let y0 = z + PIO2_2T;
        return (-1, y0, (z - y0) + PIO2_2T);
    }

    if ix <= MEDIUM_HI {
        let t = fabs(x);
        let n = (t * INVPIO2 + HALF) as i32;
        let fn_ = f64::from(n);
        let mut r = t - fn_ * PIO2_1;
        // 1st round good to 85 bits
        let mut w = fn_ * PIO2_1T;
        let mut y0 = r - w;
        if n >= 32 || ix == NPIO2_HW[(n - 1) as usize] {
            let j = (ix >> 20) as i32;
            let exponent_drop = |y: f64| j - ((hi_word(y) >> 20) & 0x7ff) as i32;
            if exponent_drop(y0) > 16 {
                // 2nd iteration, good to 118 bits
                let t = r;
                w = fn_ * PIO2_2;
                r = t - w;
                w = fn_ * PIO2_2T - ((t - r) - w);
                y0 = r - w;
                if exponent_drop(y0) > 49 {
                    // 3rd iteration, 151 bits
                    let t = r;
                    w = fn_ * PIO2_3;
                    r = t - w;
                    w = fn_ * PIO2_3T - ((t - r) - w);
                    y0 = r - w;
                }
            }
        }
        let y1 = (r - y0) - w;
        return if hx < 0 { (-n, -y0, -y1) } else { (n, y0, y1) };
    }

    // inf or NaN
    if ix >= INF_OR_NAN_HI {
        let y = x - x;
        return (0, y, y);
    }

    // z = scalbn(|x|, ilogb(x)-23)
    let e0 = (ix >> 20) as i32 - 1046;
    let mut z = with_hi_lo((ix as i32 - (e0 << 20)) as u32, lo_word(x));
    let mut tx = [ZERO; 3];
    for limb in tx.iter_mut().take(2) {
        *limb = f64::from(z as i32);
        z = (z - *limb) * TWO24;
    }
    tx[2] = z;
    // skip zero terms
    let mut nx = 3;
    while tx[nx - 1] == ZERO {
        nx -= 1;
    }
    let (n, y0, y1) = kernel_rem_pio2(&tx[..nx], e0);
    if hx < 0 {
        (-n, -y0, -y1)
    } else {
        (n, y0, y1)
    }
}

/// pi/2 in 24-bit pieces.
const PIO2_CHUNKS: [f64; 8] = [
    1.57079625129699707031e+00, // 0x3FF921FB, 0x40000000
    7.54978941586159635335e-08, // 0x3E74442D, 0x00000000
    5.39030252995776476554e-15, // 0x3CF84698, 0x80000000
    3.28200341580791294123e-22, // 0x3B78CC51, 0x60000000
    1.27065575308067607349e-29, // 0x39F01B83, 0x80000000
    1.22933308981111328932e-36, // 0x387A2520, 0x40000000
    2.73370053816464559624e-44, // 0x36E38222, 0x80000000
    2.16741683877804819444e-51, // 0x3569F31D, 0x00000000
];

const ONE: f64 = 1.0;
const TWON24: f64 = 5.96046447753906250000e-08; // 0x3E700000, 0x00000000

/// Terms of 2/pi needed for double precision output.
const JK: usize = 4;

/// Payne-Hanek reduction of `x * 2^e0`, where `x` holds up to three 24-bit
/// limbs. Returns `n mod 8` and the two-term result.
fn kernel_rem_pio2(x: &[f64], e0: i32) -> (i32, f64, f64) {
    let mut iq = [0i32; 20];
    let mut f = [ZERO; 20];
    let mut fq = [ZERO; 20];
    let mut q = [ZERO; 20];

    let jk = JK;
    let jp = jk;
    let jx = x.len() - 1;
    // determine jv and q0, note that 3 > q0
    let jv = ((e0 - 3) / 24).max(0);
    let mut q0 = e0 - 24 * (jv + 1);

    // f[0..=jx+jk] where f[jx+jk] = TWO_OVER_PI[jv+jk]
    let mut j = jv - jx as i32;
    for slot in f.iter_mut().take(jx + jk + 1) {
        *slot = if j < 0 { ZERO } else { f64::from(TWO_OVER_PI[j as usize]) };
        j += 1;
    }

    let convolve = |f: &[f64; 20], i: usize| -> f64 {
        let mut fw = ZERO;
        for j in 0..=jx {
            fw += x[j] * f[jx + i - j];
        }
        fw
    };
    for i in 0..=jk {
        q[i] = convolve(&f, i);
    }

    let mut jz = jk;
    loop {
        // distill q[] into iq[] reversingly
        let mut z = q[jz];
        let mut i = 0;
        let mut j = jz;
        while j > 0 {
            let fw = f64::from((TWON24 * z) as i32);
            iq[i] = (z - TWO24 * fw) as i32;
            z = q[j - 1] + fw;
            i += 1;
            j -= 1;
        }

        // compute n
        z = scalbn(z, q0);
        // trim off integer >= 8
        z -= 8.0 * floor(z * 0.125);
        let mut n = z as i32;
        z -= f64::from(n);
        let mut ih = 0;
        if q0 > 0 {
            // need iq[jz-1] to determine n
            let i = iq[jz - 1] >> (24 - q0);
            n += i;
            iq[jz - 1] -= i << (24 - q0);
            ih = iq[jz - 1] >> (23 - q0);
        } else if q0 == 0 {
            ih = iq[jz - 1] >> 23;
        } else if z >= HALF {
            ih = 2;
        }

        if ih > 0 {
            // q > 0.5
            n += 1;
            let mut carry = false;
            for limb in iq.iter_mut().take(jz) {
                // compute 1-q
                if carry {
                    *limb = 0x00ff_ffff - *limb;
                } else if *limb != 0 {
                    carry = true;
                    *limb = 0x0100_0000 - *limb;
                }
            }
            // rare case: chance is 1 in 12
            match q0 {
                1 => iq[jz - 1] &= 0x007f_ffff,
                2 => iq[jz - 1] &= 0x003f_ffff,
                _ => {}
            }
            if ih == 2 {
                z = ONE - z;
                if carry {
                    z -= scalbn(ONE, q0);
                }
            }
        }

        // check if recomputation is needed
        if z == ZERO && iq[jk..jz].iter().all(|&limb| limb == 0) {
            // k = no. of terms needed
            let mut k = 1;
            while iq[jk - k] == 0 {
                k += 1;
            }
            // add q[jz+1] to q[jz+k]
            for i in (jz + 1)..=(jz + k) {
                f[jx + i] = f64::from(TWO_OVER_PI[jv as usize + i]);
                q[i] = convolve(&f, i);
            }
            jz += k;
            continue;
        }

        // chop off zero terms
        if z == ZERO {
            jz -= 1;
            q0 -= 24;
            while iq[jz] == 0 {
                jz -= 1;
                q0 -= 24;
            }
        } else {
            // break z into 24-bit if necessary
            z = scalbn(z, -q0);
            if z >= TWO24 {
                let fw = f64::from((TWON24 * z) as i32);
                iq[jz] = (z - TWO24 * fw) as i32;
                jz += 1;
                q0 += 24;
                iq[jz] = fw as i32;
            } else {
                iq[jz] = z as i32;
            }
        }

        // convert integer "bit" chunk to floating-point value
        let mut fw = scalbn(ONE, q0);
        for i in (0..=jz).rev() {
            q[i] = fw * f64::from(iq[i]);
            fw *= TWON24;
        }

        // compute PIO2_CHUNKS[0..=jp] * q[jz..=0]
        for i in (0..=jz).rev() {
            let mut fw = ZERO;
            let mut k = 0;
            while k <= jp && k <= jz - i {
                fw += PIO2_CHUNKS[k] * q[i + k];
                k += 1;
            }
            fq[jz - i] = fw;
        }

        // compress fq[] into y[]
        let mut fw = ZERO;
        for i in (0..=jz).rev() {
            fw += fq[i];
        }
        let y0 = if ih == 0 { fw } else { -fw };
        fw = fq[0] - fw;
        for i in 1..=jz {
            fw += fq[i];
        }
        let y1 = if ih == 0 { fw } else { -fw };
        return (n & 7, y0, y1);
    }
}
