use super::bits::{
    hi_word, lo_word, with_hi_lo, ABS_MASK_HI, EXP_BIAS, HI_MANT_BITS, MANT_MASK_HI,
};

/// Largest integral value not greater than `x`, by clearing fraction bits.
#[inline]
pub fn floor(x: f64) -> f64 {
    let mut i0 = hi_word(x) as i32;
    let mut i1 = lo_word(x);
    let j0 = ((i0 >> HI_MANT_BITS) & 0x7ff) - EXP_BIAS;

    if j0 < 20 {
        if j0 < 0 {
            // |x| < 1: +0 for non-negative, -1 for negative non-zero
            if i0 >= 0 {
                i0 = 0;
                i1 = 0;
            } else if ((i0 as u32 & ABS_MASK_HI) | i1) != 0 {
                i0 = 0xbff0_0000u32 as i32;
                i1 = 0;
            }
        } else {
            let i = MANT_MASK_HI >> j0;
            if ((i0 as u32 & i) | i1) == 0 {
                return x;
            }
            if i0 < 0 {
                i0 += 0x0010_0000 >> j0;
            }
            i0 &= !(i as i32);
            i1 = 0;
        }
    } else if j0 > 51 {
        if j0 == 0x400 {
            return x + x;
        }
        return x;
    } else {
        let i = u32::MAX >> (j0 - 20);
        if (i1 & i) == 0 {
            return x;
        }
        if i0 < 0 {
            if j0 == 20 {
                i0 += 1;
            } else {
                let j = i1.wrapping_add(1 << (52 - j0));
                if j < i1 {
                    i0 += 1;
                }
                i1 = j;
            }
        }
        i1 &= !i;
    }
    with_hi_lo(i0 as u32, i1)
}
