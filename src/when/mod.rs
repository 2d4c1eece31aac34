// SPDX-License-Identifier: MIT

//! Declarative pattern matching over ordered predicates
//!
//! `when` takes predicate/value clauses, tests predicates in order and
//! returns the value of the first truthy one. A trailing default catches
//! everything else; without one, a full miss is an error:
//! - `evaluate` - flat `predicate, value, ..., [default]` argument list
//! - `When` - builder with separately typed predicates and values
//! - `when!` - macro form where every expression is deferred

mod arg;
mod evaluator;
mod truthy;

pub use arg::{Arg, Thunk};
pub use evaluator::{evaluate, When};
pub use truthy::Truthy;

/// Lazy pattern matching.
///
/// Each predicate and value is wrapped in a closure, so only the predicates
/// up to the first truthy one and that one value are ever computed.
///
/// ```
/// use exos_rs::when;
///
/// let a = 42;
/// let c = when! {
///     a < 4 => "less than 4",
///     a < 10 => "less than 10",
///     a == 42 => "the answer!";
///     otherwise => "something else"
/// };
/// assert_eq!(c, Ok("the answer!"));
/// ```
#[macro_export]
macro_rules! when {
    ($($predicate:expr => $value:expr),+ ; otherwise => $default:expr $(,)?) => {
        $crate::when::When::<_, $crate::error::MatchError>::new()
            $(.clause_lazy(|| $predicate, || $value))+
            .otherwise_lazy(|| $default)
            .evaluate()
    };
    ($($predicate:expr => $value:expr),+ $(,)?) => {
        $crate::when::When::<_, $crate::error::MatchError>::new()
            $(.clause_lazy(|| $predicate, || $value))+
            .evaluate()
    };
}

#[cfg(test)]
mod tests {
    use crate::error::MatchError;
    use std::cell::Cell;

    #[test]
    fn test_macro_with_default() {
        let a = 100;
        let result = when! {
            a < 4 => "a",
            a < 10 => "b";
            otherwise => "default"
        };
        assert_eq!(result, Ok("default"));
    }

    #[test]
    fn test_macro_without_default() {
        let a = 100;
        let result = when! {
            a < 4 => "a",
            a < 10 => "b",
        };
        assert_eq!(result, Err(MatchError::NonExhaustivePattern));
    }

    #[test]
    fn test_macro_is_lazy() {
        let state = Cell::new(40);
        let inc = || {
            state.set(state.get() + 1);
            state.get()
        };

        let result = when! {
            inc() == 42 => "first try!",
            inc() == 42 => "second try!",
            inc() == 42 => "third try!",
            inc() != 0 => "needed more tries"
        };

        assert_eq!(result, Ok("second try!"));
        assert_eq!(state.get(), 42);
    }
}
