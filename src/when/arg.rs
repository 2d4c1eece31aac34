// SPDX-License-Identifier: MIT

//! Immediate or deferred clause arguments

use crate::error::MatchError;
use std::fmt;

/// A zero-argument deferred computation
pub type Thunk<'a, T, E> = Box<dyn FnOnce() -> Result<T, E> + 'a>;

/// One positional slot of a `when` argument list.
///
/// Immediate values were already computed by the caller; deferred ones are
/// only invoked if the scan reaches them, and at most once.
pub enum Arg<'a, T, E = MatchError> {
    Immediate(T),
    Deferred(Thunk<'a, T, E>),
}

impl<'a, T, E> Arg<'a, T, E> {
    /// Wrap an already computed value
    pub fn value(value: T) -> Self {
        Self::Immediate(value)
    }

    /// Defer an infallible computation
    pub fn lazy<F>(f: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self::Deferred(Box::new(move || Ok(f())))
    }

    /// Defer a computation that may fail; its error is returned unchanged
    pub fn try_lazy<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + 'a,
    {
        Self::Deferred(Box::new(f))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Realize the argument, invoking the thunk if there is one
    pub fn resolve(self) -> Result<T, E> {
        match self {
            Self::Immediate(value) => Ok(value),
            Self::Deferred(thunk) => thunk(),
        }
    }
}

impl<'a, T, E> From<T> for Arg<'a, T, E> {
    fn from(value: T) -> Self {
        Self::Immediate(value)
    }
}

impl<T: fmt::Debug, E> fmt::Debug for Arg<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate(value) => f.debug_tuple("Immediate").field(value).finish(),
            Self::Deferred(_) => f.write_str("Deferred(<thunk>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_immediate_resolves_to_itself() {
        let arg: Arg<'_, i32> = Arg::value(7);
        assert!(!arg.is_deferred());
        assert_eq!(arg.resolve(), Ok(7));
    }

    #[test]
    fn test_lazy_runs_only_on_resolve() {
        let calls = Cell::new(0);
        let arg: Arg<'_, &str> = Arg::lazy(|| {
            calls.set(calls.get() + 1);
            "done"
        });
        assert!(arg.is_deferred());
        assert_eq!(calls.get(), 0);

        assert_eq!(arg.resolve(), Ok("done"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_try_lazy_passes_error_through() {
        let arg: Arg<'_, i32, String> = Arg::try_lazy(|| Err("boom".to_string()));
        assert_eq!(arg.resolve(), Err("boom".to_string()));
    }

    #[test]
    fn test_from_value() {
        let arg: Arg<'_, &str> = "x".into();
        assert_eq!(format!("{:?}", arg), "Immediate(\"x\")");

        let deferred: Arg<'_, &str> = Arg::lazy(|| "y");
        assert_eq!(format!("{:?}", deferred), "Deferred(<thunk>)");
    }
}
