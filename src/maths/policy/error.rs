use core::fmt;

use thiserror::Error;

/// errno-style class of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Argument outside the function's domain (`EDOM`).
    Domain,
    /// Result not representable: overflow, underflow or a pole (`ERANGE`).
    Range,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Domain => "domain",
            ErrorKind::Range => "range",
        })
    }
}

/// A domain, pole or range violation detected by a wrapper in POSIX mode.
///
/// Each variant carries the offending arguments. The value the wrapper
/// returns is unaffected by the report.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("acos({x}): argument outside [-1, 1]")]
    AcosOutOfRange { x: f64 },
    #[error("asin({x}): argument outside [-1, 1]")]
    AsinOutOfRange { x: f64 },
    #[error("atan2({y}, {x}): both arguments are zero")]
    Atan2ZeroZero { y: f64, x: f64 },
    #[error("hypot({x}, {y}): result overflows")]
    HypotOverflow { x: f64, y: f64 },
    #[error("cosh({x}): result overflows")]
    CoshOverflow { x: f64 },
    #[error("exp({x}): result overflows")]
    ExpOverflow { x: f64 },
    #[error("exp({x}): result underflows")]
    ExpUnderflow { x: f64 },
    #[error("log({x}): logarithm of zero")]
    LogZero { x: f64 },
    #[error("log({x}): logarithm of a negative number")]
    LogNegative { x: f64 },
    #[error("log10({x}): logarithm of zero")]
    Log10Zero { x: f64 },
    #[error("log10({x}): logarithm of a negative number")]
    Log10Negative { x: f64 },
    #[error("pow({x}, {y}): result overflows")]
    PowOverflow { x: f64, y: f64 },
    #[error("pow({x}, {y}): result underflows")]
    PowUnderflow { x: f64, y: f64 },
    #[error("pow({x}, {y}): zero raised to a negative power")]
    PowZeroNegative { x: f64, y: f64 },
    #[error("pow({x}, {y}): negative base raised to a non-integer power")]
    PowNegativeNonInteger { x: f64, y: f64 },
    #[error("sinh({x}): result overflows")]
    SinhOverflow { x: f64 },
    #[error("sqrt({x}): square root of a negative number")]
    SqrtNegative { x: f64 },
    #[error("fmod({x}, {y}): zero modulus")]
    FmodZeroModulus { x: f64, y: f64 },
    #[error("remainder({x}, {p}): zero modulus")]
    RemainderZeroModulus { x: f64, p: f64 },
    #[error("atanh({x}): argument outside [-1, 1]")]
    AtanhOutOfRange { x: f64 },
    #[error("atanh({x}): pole at +-1")]
    AtanhPole { x: f64 },
    #[error("scalb({x}, {n}): result overflows")]
    ScalbOverflow { x: f64, n: f64 },
    #[error("scalb({x}, {n}): result underflows")]
    ScalbUnderflow { x: f64, n: f64 },
    #[error("scalb({x}, {n}): scale factor is not finite")]
    ScalbNonFiniteScale { x: f64, n: f64 },
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        use DomainError::*;
        match self {
            AcosOutOfRange { .. }
            | AsinOutOfRange { .. }
            | Atan2ZeroZero { .. }
            | LogNegative { .. }
            | Log10Negative { .. }
            | PowZeroNegative { .. }
            | PowNegativeNonInteger { .. }
            | SqrtNegative { .. }
            | FmodZeroModulus { .. }
            | RemainderZeroModulus { .. }
            | AtanhOutOfRange { .. }
            | AtanhPole { .. } => ErrorKind::Domain,
            HypotOverflow { .. }
            | CoshOverflow { .. }
            | ExpOverflow { .. }
            | ExpUnderflow { .. }
            | LogZero { .. }
            | Log10Zero { .. }
            | PowOverflow { .. }
            | PowUnderflow { .. }
            | SinhOverflow { .. }
            | ScalbOverflow { .. }
            | ScalbUnderflow { .. }
            | ScalbNonFiniteScale { .. } => ErrorKind::Range,
        }
    }

    /// The numeric code `__kernel_standard` used for this violation.
    ///
    /// `None` for violations that only ever set `errno` directly.
    pub fn code(&self) -> Option<u8> {
        use DomainError::*;
        let code = match self {
            AcosOutOfRange { .. } => 1,
            AsinOutOfRange { .. } => 2,
            Atan2ZeroZero { .. } => 3,
            HypotOverflow { .. } => 4,
            CoshOverflow { .. } => 5,
            ExpOverflow { .. } => 6,
            ExpUnderflow { .. } => 7,
            LogZero { .. } => 16,
            LogNegative { .. } => 17,
            Log10Zero { .. } => 18,
            Log10Negative { .. } => 19,
            PowOverflow { .. } => 21,
            PowUnderflow { .. } => 22,
            PowZeroNegative { .. } => 23,
            PowNegativeNonInteger { .. } => 24,
            SinhOverflow { .. } => 25,
            SqrtNegative { .. } => 26,
            FmodZeroModulus { .. } => 27,
            RemainderZeroModulus { .. } => 28,
            AtanhOutOfRange { .. } => 30,
            AtanhPole { .. } => 31,
            ScalbOverflow { .. } => 32,
            ScalbUnderflow { .. } => 33,
            ScalbNonFiniteScale { .. } => return None,
        };
        Some(code)
    }

    /// Name of the wrapper that detected the violation.
    pub fn function(&self) -> &'static str {
        use DomainError::*;
        match self {
            AcosOutOfRange { .. } => "acos",
            AsinOutOfRange { .. } => "asin",
            Atan2ZeroZero { .. } => "atan2",
            HypotOverflow { .. } => "hypot",
            CoshOverflow { .. } => "cosh",
            ExpOverflow { .. } | ExpUnderflow { .. } => "exp",
            LogZero { .. } | LogNegative { .. } => "log",
            Log10Zero { .. } | Log10Negative { .. } => "log10",
            PowOverflow { .. }
            | PowUnderflow { .. }
            | PowZeroNegative { .. }
            | PowNegativeNonInteger { .. } => "pow",
            SinhOverflow { .. } => "sinh",
            SqrtNegative { .. } => "sqrt",
            FmodZeroModulus { .. } => "fmod",
            RemainderZeroModulus { .. } => "remainder",
            AtanhOutOfRange { .. } | AtanhPole { .. } => "atanh",
            ScalbOverflow { .. } | ScalbUnderflow { .. } | ScalbNonFiniteScale { .. } => "scalb",
        }
    }
}

/// Returned when a library mode name is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown library version, expected `ieee` or `posix`")]
pub struct ParseLibVersionError(());

impl ParseLibVersionError {
    pub(crate) fn new() -> Self {
        Self(())
    }
}
