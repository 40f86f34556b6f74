//! Pure fdlibm 5.3 kernels.
//!
//! Every function here reproduces the historical fdlibm result bit for bit,
//! special values included. None of them report errors; exceptional inputs
//! flow through the usual IEEE identities (`x - x`, `x * x`, `huge * huge`).
//! The diagnostic policy lives in [`crate::maths::policy`].

#![allow(clippy::excessive_precision)]
#![allow(clippy::unreadable_literal)]

pub mod bits;

mod acos;
mod asin;
mod atan;
mod atan2;
mod atanh;
mod cbrt;
mod copysign;
mod cos;
mod cosh;
mod exp;
mod expm1;
mod floor;
mod fmod;
mod hypot;
mod log;
mod log10;
mod log1p;
mod logb;
mod pow;
mod rem_pio2;
mod remainder;
mod scalb;
mod sin;
mod sinh;
mod sqrt;
mod tan;
mod tanh;
mod trig;

pub use acos::acos;
pub use asin::asin;
pub use atan::atan;
pub use atan2::atan2;
pub use atanh::atanh;
pub use cbrt::cbrt;
pub use copysign::{copysign, fabs};
pub use cos::cos;
pub use cosh::cosh;
pub use exp::exp;
pub use expm1::expm1;
pub use floor::floor;
pub use fmod::fmod;
pub use hypot::hypot;
pub use log::log;
pub use log10::log10;
pub use log1p::log1p;
pub use logb::logb;
pub use pow::pow;
pub use rem_pio2::rem_pio2;
pub use remainder::remainder;
pub use scalb::{scalb, scalb_int, scalbn};
pub use sin::sin;
pub use sinh::sinh;
pub use sqrt::sqrt;
pub use tan::tan;
pub use tanh::tanh;
pub use trig::{kernel_cos, kernel_sin, kernel_tan};
