// Unchecked boundary: recoverable errors escalate to a fatal panic payload.
use std::error::Error as StdError;
use std::fmt;
use std::panic;

use crate::core::error::Error;
use crate::core::func::Func;
use crate::core::scalar::Scalar;

/// Fatal failure raised at the unchecked boundary.
///
/// Carries the original [`Error`] as its cause so diagnostics survive the
/// escalation. Produced only by [`Unchecked`] and [`UncheckedFunc`].
#[derive(Debug)]
pub struct Fatal {
    cause: Error,
}

impl Fatal {
    pub fn new(cause: Error) -> Self {
        Self { cause }
    }

    pub fn cause(&self) -> &Error {
        &self.cause
    }
}

impl fmt::Display for Fatal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fatal: {}", self.cause)
    }
}

impl StdError for Fatal {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.cause)
    }
}

/// Scalar wrapper for call sites that cannot surface a `Result`.
///
/// `value` never returns an [`Error`]; a failing origin aborts the calling
/// thread via a panic whose payload is a [`Fatal`]. This is an explicit
/// conversion boundary, not a second error channel.
pub struct Unchecked<S> {
    origin: S,
}

impl<S: Scalar> Unchecked<S> {
    pub fn new(origin: S) -> Self {
        Self { origin }
    }

    pub fn value(&self) -> S::Item {
        match self.origin.value() {
            Ok(item) => item,
            Err(err) => panic::panic_any(Fatal::new(err)),
        }
    }
}

/// Func wrapper with the same escalation rule as [`Unchecked`].
pub struct UncheckedFunc<F> {
    origin: F,
}

impl<F> UncheckedFunc<F> {
    pub fn new(origin: F) -> Self {
        Self { origin }
    }

    pub fn apply<X>(&self, input: X) -> F::Output
    where
        F: Func<X>,
    {
        match self.origin.apply(input) {
            Ok(output) => output,
            Err(err) => panic::panic_any(Fatal::new(err)),
        }
    }
}
