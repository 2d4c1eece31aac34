// SPDX-License-Identifier: MIT

//! Automatic caching for referentially transparent functions

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock};

/// A function wrapped with a result cache keyed by its argument.
///
/// Functions of several arguments are memoized over a tuple.
///
/// ```
/// use exos_rs::fun::memoize;
///
/// let area = memoize(|(w, h): (u32, u32)| w * h);
/// assert_eq!(area.call((3, 4)), 12);
/// assert!(area.is_cached(&(3, 4)));
/// ```
pub struct Memoized<A, R, F> {
    f: F,
    cache: RwLock<HashMap<A, R>>,
}

/// Wrap `f` so each distinct argument is computed only once
pub fn memoize<A, R, F>(f: F) -> Memoized<A, R, F>
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    Memoized::new(f)
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Hash + Eq + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached result for `arg`, computing and storing it on a miss
    pub fn call(&self, arg: A) -> R {
        if let Some(hit) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&arg)
        {
            log::trace!("memoize: cache hit");
            return hit.clone();
        }

        log::trace!("memoize: cache miss");
        // The lock is not held while `f` runs, so `f` may call back into us.
        let value = (self.f)(arg.clone());
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(arg)
            .or_insert(value)
            .clone()
    }

    pub fn is_cached(&self, arg: &A) -> bool {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(arg)
    }

    /// Number of cached results
    pub fn cache_len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn clear(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
