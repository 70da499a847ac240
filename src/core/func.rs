// Single-argument function capability with constant and fallback variants.
use crate::core::error::Error;

/// A single-argument computation that may fail.
pub trait Func<X> {
    type Output;

    fn apply(&self, input: X) -> Result<Self::Output, Error>;
}

impl<X, Y, F> Func<X> for F
where
    F: Fn(X) -> Result<Y, Error>,
{
    type Output = Y;

    fn apply(&self, input: X) -> Result<Y, Error> {
        self(input)
    }
}

/// Func that ignores its input and returns a clone of a fixed result.
pub struct ConstFunc<T> {
    result: T,
}

impl<T> ConstFunc<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

impl<X, T: Clone> Func<X> for ConstFunc<T> {
    type Output = T;

    fn apply(&self, _input: X) -> Result<T, Error> {
        Ok(self.result.clone())
    }
}

/// Applies the primary func; on failure, hands the error to the fallback
/// func instead of propagating it.
pub struct FuncWithFallback<F, G> {
    primary: F,
    fallback: G,
}

impl<F, G> FuncWithFallback<F, G> {
    pub fn new(primary: F, fallback: G) -> Self {
        Self { primary, fallback }
    }
}

impl<X, F, G> Func<X> for FuncWithFallback<F, G>
where
    F: Func<X>,
    G: Func<Error, Output = F::Output>,
{
    type Output = F::Output;

    fn apply(&self, input: X) -> Result<F::Output, Error> {
        match self.primary.apply(input) {
            Ok(output) => Ok(output),
            Err(err) => self.fallback.apply(err),
        }
    }
}
