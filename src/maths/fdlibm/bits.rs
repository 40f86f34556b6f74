//! High/low word access for IEEE-754 doubles.
//!
//! fdlibm classifies its arguments by looking at the top 32 bits of a double
//! (sign, 11-bit exponent, top 20 mantissa bits) and occasionally patches the
//! low 32 bits. These helpers go through `to_bits`/`from_bits`, so the word
//! split is the same on every target byte order.

/// Sign bit of a double.
pub const SIGN_MASK: u64 = (-0.0f64).to_bits();
/// Biased exponent field; equal to the bit pattern of +inf.
pub const EXP_MASK: u64 = f64::INFINITY.to_bits();
/// Stored mantissa bits.
pub const MANT_MASK: u64 = !(SIGN_MASK | EXP_MASK);

/// Sign bit of the high word.
pub const SIGN_MASK_HI: u32 = (SIGN_MASK >> 32) as u32;
/// Everything but the sign in the high word.
pub const ABS_MASK_HI: u32 = !SIGN_MASK_HI;
/// Exponent field of the high word.
pub const EXP_MASK_HI: u32 = (EXP_MASK >> 32) as u32;
/// Mantissa bits held in the high word.
pub const MANT_MASK_HI: u32 = (MANT_MASK >> 32) as u32;
/// Masked high words at or above this value are infinite or NaN.
pub const INF_OR_NAN_HI: u32 = EXP_MASK_HI;
/// High word of 1.0.
pub const ONE_HI: u32 = (1.0f64.to_bits() >> 32) as u32;
/// Masked high words below this value are zero or subnormal.
pub const MIN_NORMAL_HI: u32 = (f64::MIN_POSITIVE.to_bits() >> 32) as u32;

/// Width of the stored mantissa held in the high word.
pub(crate) const HI_MANT_BITS: u32 = 20;
pub(crate) const EXP_BIAS: i32 = 1023;

#[inline(always)]
pub fn hi_word(x: f64) -> u32 {
    (x.to_bits() >> 32) as u32
}

#[inline(always)]
pub fn lo_word(x: f64) -> u32 {
    x.to_bits() as u32
}

#[inline(always)]
pub fn with_hi_lo(hi: u32, lo: u32) -> f64 {
    f64::from_bits(((hi as u64) << 32) | lo as u64)
}

/// Replaces the high word of `x`, keeping the low word.
#[inline(always)]
pub fn set_hi_word(x: f64, hi: u32) -> f64 {
    with_hi_lo(hi, lo_word(x))
}

/// Replaces the low word of `x`, keeping the high word.
#[inline(always)]
pub fn set_lo_word(x: f64, lo: u32) -> f64 {
    with_hi_lo(hi_word(x), lo)
}

/// `x` truncated to its high word (the `__LO(x) = 0` idiom).
#[inline(always)]
pub fn zero_lo_word(x: f64) -> f64 {
    with_hi_lo(hi_word(x), 0)
}

/// Adds `k` to the biased exponent stored in the high word.
///
/// No range checking: callers guarantee the result stays a normal number.
#[inline(always)]
pub(crate) fn add_to_exponent(x: f64, k: i32) -> f64 {
    set_hi_word(x, hi_word(x).wrapping_add((k << HI_MANT_BITS) as u32))
}

/// Masked high word of `x`.
#[inline(always)]
pub(crate) fn abs_hi(x: f64) -> u32 {
    hi_word(x) & ABS_MASK_HI
}

/// True when the words `(ix, lx)` of `|x|` encode a NaN.
#[inline(always)]
pub(crate) fn is_nan_words(ix: u32, lx: u32) -> bool {
    ix > INF_OR_NAN_HI || (ix == INF_OR_NAN_HI && lx != 0)
}
