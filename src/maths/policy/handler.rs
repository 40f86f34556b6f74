use core::cell::Cell;

use super::error::{DomainError, ErrorKind};

/// Receives every violation a POSIX-mode [`Libm`](super::Libm) detects.
///
/// Reporting cannot fail and cannot change the result the wrapper returns.
pub trait ExceptionHandler {
    fn report(&self, error: &DomainError);
}

impl<H: ExceptionHandler + ?Sized> ExceptionHandler for &H {
    fn report(&self, error: &DomainError) {
        (**self).report(error)
    }
}

/// Fan out to both handlers, first `A` then `B`.
impl<A: ExceptionHandler, B: ExceptionHandler> ExceptionHandler for (A, B) {
    fn report(&self, error: &DomainError) {
        self.0.report(error);
        self.1.report(error);
    }
}

/// Emits one `tracing` warning per violation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHandler;

impl ExceptionHandler for TracingHandler {
    fn report(&self, error: &DomainError) {
        tracing::warn!(
            function = error.function(),
            code = error.code(),
            kind = %error.kind(),
            "{error}"
        );
    }
}

/// Keeps the most recent violation, the way C code reads `errno` after a
/// call.
///
/// The state lives in a [`Cell`], so a handler belongs to one thread.
#[derive(Debug, Default)]
pub struct ErrnoHandler {
    last: Cell<Option<DomainError>>,
}

impl ErrnoHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last violation reported, if any.
    pub fn last_error(&self) -> Option<DomainError> {
        self.last.get()
    }

    /// `EDOM`/`ERANGE` analogue of the last violation.
    pub fn errno(&self) -> Option<ErrorKind> {
        self.last.get().map(|err| err.kind())
    }

    /// Returns the last violation and resets the indicator.
    pub fn take(&self) -> Option<DomainError> {
        self.last.take()
    }

    pub fn clear(&self) {
        self.last.set(None);
    }
}

impl ExceptionHandler for ErrnoHandler {
    fn report(&self, error: &DomainError) {
        self.last.set(Some(*error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errno_keeps_the_latest() {
        let errno = ErrnoHandler::new();
        assert_eq!(errno.last_error(), None);
        errno.report(&DomainError::SqrtNegative { x: -1.0 });
        errno.report(&DomainError::LogZero { x: 0.0 });
        assert_eq!(errno.errno(), Some(ErrorKind::Range));
        assert_eq!(errno.take(), Some(DomainError::LogZero { x: 0.0 }));
        assert_eq!(errno.last_error(), None);
    }

    #[test]
    fn pair_reports_to_both() {
        let a = ErrnoHandler::new();
        let b = ErrnoHandler::new();
        (&a, &b).report(&DomainError::AtanhPole { x: 1.0 });
        assert_eq!(a.last_error(), Some(DomainError::AtanhPole { x: 1.0 }));
        assert_eq!(b.errno(), Some(ErrorKind::Domain));
        a.clear();
        assert_eq!(a.errno(), None);
    }
}
