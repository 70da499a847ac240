// Lazy values with explicit memoization; the trait sits at the capability boundary only.
use std::cell::RefCell;

use crate::core::error::Error;

/// A deferred, re-invocable computation that may fail.
///
/// Plain closures of shape `Fn() -> Result<T, Error>` are scalars, so most
/// call sites never name a concrete type.
pub trait Scalar {
    type Item;

    fn value(&self) -> Result<Self::Item, Error>;
}

impl<T, F> Scalar for F
where
    F: Fn() -> Result<T, Error>,
{
    type Item = T;

    fn value(&self) -> Result<T, Error> {
        self()
    }
}

/// Memoizing wrapper around a [`Scalar`].
///
/// The first successful evaluation fills the cache cell; every later call
/// returns the cached value without invoking the origin again, so an origin
/// with a side effect runs that effect at most once. A failed first
/// evaluation leaves the cell empty and the next call retries.
///
/// Not thread-safe: the cache cell has no synchronization. Concurrent use
/// requires external locking.
pub struct Sticky<S: Scalar> {
    origin: S,
    cache: RefCell<Option<S::Item>>,
}

impl<S: Scalar> Sticky<S> {
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            cache: RefCell::new(None),
        }
    }
}

impl<S: Scalar> Scalar for Sticky<S>
where
    S::Item: Clone,
{
    type Item = S::Item;

    fn value(&self) -> Result<S::Item, Error> {
        let mut cache = self.cache.borrow_mut();
        if let Some(cached) = cache.as_ref() {
            return Ok(cached.clone());
        }
        let fresh = self.origin.value()?;
        *cache = Some(fresh.clone());
        Ok(fresh)
    }
}
