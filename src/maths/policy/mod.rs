//! Library-mode wrappers around the fdlibm kernels.
//!
//! A [`Libm`] calls the kernel for its result, then, in
//! [`LibVersion::Posix`] mode, checks the same conditions fdlibm's `w_*.c`
//! wrappers check and hands any violation to its [`ExceptionHandler`].
//! The returned value is always the kernel's, in either mode.
//!
//! ```
//! use strictmath::{ErrnoHandler, ErrorKind, LibVersion, Libm};
//!
//! let libm = Libm::new(LibVersion::Posix, ErrnoHandler::new());
//! assert!(libm.sqrt(-1.0).is_nan());
//! assert_eq!(libm.handler().errno(), Some(ErrorKind::Domain));
//! ```

mod error;
mod handler;

use core::fmt;
use core::str::FromStr;

pub use error::{DomainError, ErrorKind, ParseLibVersionError};
pub use handler::{ErrnoHandler, ExceptionHandler, TracingHandler};

use super::fdlibm;

/// |x| above which cosh overflows.
const COSH_OVERFLOW: f64 = 7.10475860073943863426e+02;
/// x above which exp overflows.
const EXP_OVERFLOW: f64 = 7.09782712893383973096e+02;
/// x below which exp underflows.
const EXP_UNDERFLOW: f64 = -7.45133219101941108420e+02;

/// How wrappers treat exceptional arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LibVersion {
    /// Return the IEEE result silently.
    #[default]
    Ieee,
    /// Return the IEEE result and report violations to the handler.
    Posix,
}

impl LibVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            LibVersion::Ieee => "ieee",
            LibVersion::Posix => "posix",
        }
    }
}

impl fmt::Display for LibVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LibVersion {
    type Err = ParseLibVersionError;

    /// Accepts `ieee`, `posix` and the C spellings `_IEEE_`, `_POSIX_`, in
    /// any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name
            .strip_prefix('_')
            .and_then(|n| n.strip_suffix('_'))
            .unwrap_or(name);
        if name.eq_ignore_ascii_case("ieee") {
            Ok(LibVersion::Ieee)
        } else if name.eq_ignore_ascii_case("posix") {
            Ok(LibVersion::Posix)
        } else {
            Err(ParseLibVersionError::new())
        }
    }
}

/// fdlibm entry points bound to a library mode and a handler.
#[derive(Debug, Clone, Default)]
pub struct Libm<H: ExceptionHandler = TracingHandler> {
    version: LibVersion,
    handler: H,
}

impl Libm<TracingHandler> {
    /// Silent IEEE mode.
    pub fn ieee() -> Self {
        Self::new(LibVersion::Ieee, TracingHandler)
    }

    /// POSIX mode reporting through `tracing`.
    pub fn posix() -> Self {
        Self::new(LibVersion::Posix, TracingHandler)
    }
}

impl<H: ExceptionHandler> Libm<H> {
    pub fn new(version: LibVersion, handler: H) -> Self {
        Self { version, handler }
    }

    /// POSIX mode with a custom handler.
    pub fn with_handler(handler: H) -> Self {
        Self::new(LibVersion::Posix, handler)
    }

    pub fn version(&self) -> LibVersion {
        self.version
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    #[inline]
    fn checks(&self) -> bool {
        self.version == LibVersion::Posix
    }

    #[cold]
    fn report(&self, error: DomainError) {
        self.handler.report(&error);
    }

    pub fn acos(&self, x: f64) -> f64 {
        let z = fdlibm::acos(x);
        if self.checks() && fdlibm::fabs(x) > 1.0 {
            self.report(DomainError::AcosOutOfRange { x });
        }
        z
    }

    pub fn asin(&self, x: f64) -> f64 {
        let z = fdlibm::asin(x);
        if self.checks() && fdlibm::fabs(x) > 1.0 {
            self.report(DomainError::AsinOutOfRange { x });
        }
        z
    }

    pub fn atan(&self, x: f64) -> f64 {
        fdlibm::atan(x)
    }

    pub fn atan2(&self, y: f64, x: f64) -> f64 {
        let z = fdlibm::atan2(y, x);
        if self.checks() && x == 0.0 && y == 0.0 {
            self.report(DomainError::Atan2ZeroZero { y, x });
        }
        z
    }

    pub fn atanh(&self, x: f64) -> f64 {
        let z = fdlibm::atanh(x);
        if self.checks() {
            let y = fdlibm::fabs(x);
            if y > 1.0 {
                self.report(DomainError::AtanhOutOfRange { x });
            } else if y == 1.0 {
                self.report(DomainError::AtanhPole { x });
            }
        }
        z
    }

    pub fn cbrt(&self, x: f64) -> f64 {
        fdlibm::cbrt(x)
    }

    pub fn cos(&self, x: f64) -> f64 {
        fdlibm::cos(x)
    }

    pub fn cosh(&self, x: f64) -> f64 {
        let z = fdlibm::cosh(x);
        if self.checks() && fdlibm::fabs(x) > COSH_OVERFLOW {
            self.report(DomainError::CoshOverflow { x });
        }
        z
    }

    pub fn exp(&self, x: f64) -> f64 {
        let z = fdlibm::exp(x);
        if self.checks() && x.is_finite() {
            if x > EXP_OVERFLOW {
                self.report(DomainError::ExpOverflow { x });
            } else if x < EXP_UNDERFLOW {
                self.report(DomainError::ExpUnderflow { x });
            }
        }
        z
    }

    pub fn expm1(&self, x: f64) -> f64 {
        fdlibm::expm1(x)
    }

    pub fn fmod(&self, x: f64, y: f64) -> f64 {
        let z = fdlibm::fmod(x, y);
        if self.checks() && !x.is_nan() && y == 0.0 {
            self.report(DomainError::FmodZeroModulus { x, y });
        }
        z
    }

    pub fn hypot(&self, x: f64, y: f64) -> f64 {
        let z = fdlibm::hypot(x, y);
        if self.checks() && !z.is_finite() && x.is_finite() && y.is_finite() {
            self.report(DomainError::HypotOverflow { x, y });
        }
        z
    }

    pub fn log(&self, x: f64) -> f64 {
        let z = fdlibm::log(x);
        if self.checks() && x <= 0.0 {
            if x == 0.0 {
                self.report(DomainError::LogZero { x });
            } else {
                self.report(DomainError::LogNegative { x });
            }
        }
        z
    }

    pub fn log10(&self, x: f64) -> f64 {
        let z = fdlibm::log10(x);
        if self.checks() && x <= 0.0 {
            if x == 0.0 {
                self.report(DomainError::Log10Zero { x });
            } else {
                self.report(DomainError::Log10Negative { x });
            }
        }
        z
    }

    pub fn log1p(&self, x: f64) -> f64 {
        fdlibm::log1p(x)
    }

    pub fn logb(&self, x: f64) -> f64 {
        fdlibm::logb(x)
    }

    /// `pow(0, 0)` and `pow(NaN, 0)` return 1 without a report.
    pub fn pow(&self, x: f64, y: f64) -> f64 {
        let z = fdlibm::pow(x, y);
        if !self.checks() || y.is_nan() || x.is_nan() {
            return z;
        }
        let finite_args = x.is_finite() && y.is_finite();
        if x == 0.0 {
            if y < 0.0 && y.is_finite() {
                self.report(DomainError::PowZeroNegative { x, y });
            }
        } else if !z.is_finite() && finite_args {
            if z.is_nan() {
                self.report(DomainError::PowNegativeNonInteger { x, y });
            } else {
                self.report(DomainError::PowOverflow { x, y });
            }
        } else if z == 0.0 && finite_args {
            self.report(DomainError::PowUnderflow { x, y });
        }
        z
    }

    pub fn remainder(&self, x: f64, p: f64) -> f64 {
        let z = fdlibm::remainder(x, p);
        // a NaN dividend is still reported
        if self.checks() && p == 0.0 {
            self.report(DomainError::RemainderZeroModulus { x, p });
        }
        z
    }

    pub fn scalb(&self, x: f64, n: f64) -> f64 {
        let z = fdlibm::scalb(x, n);
        if self.checks() {
            self.check_scalb(x, n, z);
        }
        z
    }

    /// Integer-scale [`scalb`](Self::scalb); the scale is always finite.
    pub fn scalb_int(&self, x: f64, n: i32) -> f64 {
        let z = fdlibm::scalb_int(x, n);
        if self.checks() {
            self.check_scalb(x, f64::from(n), z);
        }
        z
    }

    fn check_scalb(&self, x: f64, n: f64, z: f64) {
        if z.is_infinite() && x.is_finite() {
            self.report(DomainError::ScalbOverflow { x, n });
        } else if z == 0.0 && z != x {
            self.report(DomainError::ScalbUnderflow { x, n });
        } else if !n.is_finite() {
            self.report(DomainError::ScalbNonFiniteScale { x, n });
        }
    }

    pub fn sin(&self, x: f64) -> f64 {
        fdlibm::sin(x)
    }

    pub fn sinh(&self, x: f64) -> f64 {
        let z = fdlibm::sinh(x);
        if self.checks() && !z.is_finite() && x.is_finite() {
            self.report(DomainError::SinhOverflow { x });
        }
        z
    }

    pub fn sqrt(&self, x: f64) -> f64 {
        let z = fdlibm::sqrt(x);
        if self.checks() && x < 0.0 {
            self.report(DomainError::SqrtNegative { x });
        }
        z
    }

    pub fn tan(&self, x: f64) -> f64 {
        fdlibm::tan(x)
    }

    pub fn tanh(&self, x: f64) -> f64 {
        fdlibm::tanh(x)
    }
}
