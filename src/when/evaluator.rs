// SPDX-License-Identifier: MIT

//! Ordered predicate/value evaluation

use super::arg::Arg;
use super::truthy::Truthy;
use crate::error::MatchError;

/// Evaluate a flat `predicate, value, predicate, value, ..., [default]` list.
///
/// An even-length list has no default; an odd-length one treats its last
/// element as the default. Predicates are resolved in order and the value
/// paired with the first truthy one is returned; nothing after it is
/// resolved. Errors from deferred arguments are returned unchanged.
pub fn evaluate<'a, T, E>(mut arguments: Vec<Arg<'a, T, E>>) -> Result<T, E>
where
    T: Truthy,
    E: From<MatchError>,
{
    if arguments.is_empty() {
        return Err(MatchError::invalid_arguments(
            "expected at least one clause or a default, got an empty argument list",
        )
        .into());
    }

    let default = if arguments.len() % 2 == 1 {
        arguments.pop()
    } else {
        None
    };

    let mut slots = arguments.into_iter();
    let clauses = std::iter::from_fn(|| Some((slots.next()?, slots.next()?)));
    scan(clauses, default)
}

fn scan<'a, P, T, E, I>(clauses: I, default: Option<Arg<'a, T, E>>) -> Result<T, E>
where
    P: Truthy,
    I: IntoIterator<Item = (Arg<'a, P, E>, Arg<'a, T, E>)>,
    E: From<MatchError>,
{
    for (predicate, value) in clauses {
        if predicate.resolve()?.is_truthy() {
            return value.resolve();
        }
    }

    match default {
        Some(default) => default.resolve(),
        None => Err(MatchError::NonExhaustivePattern.into()),
    }
}

/// Builder form of `when`, where predicates and values have separate types.
///
/// ```
/// use exos_rs::when::When;
///
/// let a = 42;
/// let answer = When::<_>::new()
///     .clause(a < 4, "less than 4")
///     .clause(a < 10, "less than 10")
///     .clause_lazy(|| a == 42, || "the answer!")
///     .otherwise("something else")
///     .evaluate();
/// assert_eq!(answer, Ok("the answer!"));
/// ```
pub struct When<'a, T, E = MatchError> {
    clauses: Vec<(Arg<'a, bool, E>, Arg<'a, T, E>)>,
    default: Option<Arg<'a, T, E>>,
}

impl<'a, T: 'a, E: 'a> When<'a, T, E> {
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
            default: None,
        }
    }

    /// Add a clause from already computed predicate and value
    pub fn clause<P: Truthy>(mut self, predicate: P, value: T) -> Self {
        self.clauses
            .push((Arg::value(predicate.is_truthy()), Arg::value(value)));
        self
    }

    /// Add a clause whose predicate and value are only computed when reached
    pub fn clause_lazy<P, V, B>(mut self, predicate: P, value: V) -> Self
    where
        P: FnOnce() -> B + 'a,
        V: FnOnce() -> T + 'a,
        B: Truthy,
    {
        self.clauses.push((
            Arg::lazy(move || predicate().is_truthy()),
            Arg::lazy(value),
        ));
        self
    }

    /// Add a clause whose deferred predicate or value may fail
    pub fn try_clause<P, V, B>(mut self, predicate: P, value: V) -> Self
    where
        P: FnOnce() -> Result<B, E> + 'a,
        V: FnOnce() -> Result<T, E> + 'a,
        B: Truthy,
    {
        self.clauses.push((
            Arg::try_lazy(move || predicate().map(|p| p.is_truthy())),
            Arg::try_lazy(value),
        ));
        self
    }

    /// Add a clause from explicit arguments
    pub fn clause_with(mut self, predicate: Arg<'a, bool, E>, value: Arg<'a, T, E>) -> Self {
        self.clauses.push((predicate, value));
        self
    }

    /// Set the default. A later call replaces an earlier one.
    pub fn otherwise(mut self, value: T) -> Self {
        self.default = Some(Arg::value(value));
        self
    }

    pub fn otherwise_lazy<F>(mut self, value: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        self.default = Some(Arg::lazy(value));
        self
    }

    pub fn try_otherwise<F>(mut self, value: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + 'a,
    {
        self.default = Some(Arg::try_lazy(value));
        self
    }

    /// Number of clauses, not counting the default
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty() && self.default.is_none()
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Run the ordered scan
    pub fn evaluate(self) -> Result<T, E>
    where
        E: From<MatchError>,
    {
        if self.is_empty() {
            return Err(MatchError::invalid_arguments("no clauses and no default").into());
        }
        scan(self.clauses, self.default)
    }
}

impl<'a, T: 'a, E: 'a> Default for When<'a, T, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::cell::Cell;

    fn v(value: Value) -> Arg<'static, Value> {
        Arg::value(value)
    }

    #[test]
    fn test_first_truthy_clause_wins() {
        let result = evaluate(vec![
            v(json!(1 < 4)),
            v(json!("a")),
            v(json!(1 < 10)),
            v(json!("b")),
            v(json!(1 == 1)),
            v(json!("c")),
        ]);
        assert_eq!(result, Ok(json!("a")));
    }

    #[test]
    fn test_later_clause_matches() {
        let a = 42;
        let result = evaluate(vec![
            v(json!(a < 4)),
            v(json!("a")),
            v(json!(a < 10)),
            v(json!("b")),
            v(json!(a == 42)),
            v(json!("c")),
        ]);
        assert_eq!(result, Ok(json!("c")));
    }

    #[test]
    fn test_trailing_default() {
        let a = 100;
        let result = evaluate(vec![
            v(json!(a < 4)),
            v(json!("a")),
            v(json!(a < 10)),
            v(json!("b")),
            v(json!("default")),
        ]);
        assert_eq!(result, Ok(json!("default")));
    }

    #[test]
    fn test_no_match_without_default() {
        let a = 100;
        let result = evaluate(vec![
            v(json!(a < 4)),
            v(json!("a")),
            v(json!(a < 10)),
            v(json!("b")),
        ]);
        assert_eq!(result, Err(MatchError::NonExhaustivePattern));
    }

    #[test]
    fn test_lone_default() {
        assert_eq!(evaluate(vec![v(json!("only"))]), Ok(json!("only")));
    }

    #[test]
    fn test_empty_arguments_are_invalid() {
        let result: Result<Value, MatchError> = evaluate(vec![]);
        assert!(matches!(result, Err(MatchError::InvalidArguments(_))));
    }

    #[test]
    fn test_truthiness_of_json_predicates() {
        let result = evaluate(vec![
            v(json!(0)),
            v(json!("zero")),
            v(json!("")),
            v(json!("empty")),
            v(json!([1])),
            v(json!("list")),
        ]);
        assert_eq!(result, Ok(json!("list")));
    }

    #[test]
    fn test_short_circuit_skips_later_thunks() {
        let later = Cell::new(0);
        let result = evaluate(vec![
            Arg::lazy(|| json!(true)),
            v(json!("first")),
            Arg::lazy(|| {
                later.set(later.get() + 1);
                json!(true)
            }),
            Arg::lazy(|| {
                later.set(later.get() + 1);
                json!("second")
            }),
            Arg::lazy(|| {
                later.set(later.get() + 1);
                json!("default")
            }),
        ]);
        assert_eq!(result, Ok(json!("first")));
        assert_eq!(later.get(), 0);
    }

    #[derive(Debug, PartialEq)]
    enum TestError {
        Failed(&'static str),
        Match(MatchError),
    }

    impl From<MatchError> for TestError {
        fn from(err: MatchError) -> Self {
            Self::Match(err)
        }
    }

    #[test]
    fn test_thunk_error_propagates_unchanged() {
        let result: Result<i32, TestError> = When::new()
            .try_clause(|| Err::<bool, _>(TestError::Failed("predicate")), || Ok(1))
            .otherwise(2)
            .evaluate();
        assert_eq!(result, Err(TestError::Failed("predicate")));

        let result: Result<i32, TestError> = When::new()
            .clause(false, 1)
            .try_otherwise(|| Err(TestError::Failed("default")))
            .evaluate();
        assert_eq!(result, Err(TestError::Failed("default")));
    }

    #[test]
    fn test_flat_form_propagates_thunk_error() {
        let touched = Cell::new(0);
        let touch = || {
            touched.set(touched.get() + 1);
            json!(true)
        };

        let result: Result<Value, TestError> = evaluate(vec![
            Arg::try_lazy(|| Err(TestError::Failed("predicate"))),
            Arg::lazy(touch),
            Arg::lazy(touch),
            Arg::lazy(touch),
            Arg::lazy(touch),
        ]);
        assert_eq!(result, Err(TestError::Failed("predicate")));
        assert_eq!(touched.get(), 0);

        let result: Result<Value, TestError> = evaluate(vec![
            Arg::value(json!(false)),
            Arg::lazy(touch),
            Arg::value(json!(1)),
            Arg::try_lazy(|| Err(TestError::Failed("value"))),
            Arg::lazy(touch),
            Arg::lazy(touch),
        ]);
        assert_eq!(result, Err(TestError::Failed("value")));
        assert_eq!(touched.get(), 0);
    }

    #[test]
    fn test_match_error_converts_into_caller_error() {
        let result: Result<i32, TestError> = When::new().clause(false, 1).evaluate();
        assert_eq!(
            result,
            Err(TestError::Match(MatchError::NonExhaustivePattern))
        );
    }

    #[test]
    fn test_builder_matches_flat_form() {
        let a = 42;
        let result = When::<_>::new()
            .clause(a < 10, "less than 10")
            .clause(a == 42, "the answer!")
            .otherwise("something else")
            .evaluate();
        assert_eq!(result, Ok("the answer!"));
    }

    #[test]
    fn test_builder_without_clauses_is_invalid() {
        let result = When::<i32>::new().evaluate();
        assert!(matches!(result, Err(MatchError::InvalidArguments(_))));
    }

    #[test]
    fn test_builder_default_only() {
        let when = When::<i32>::new().otherwise(5);
        assert_eq!(when.len(), 0);
        assert!(when.has_default());
        assert_eq!(when.evaluate(), Ok(5));
    }

    #[test]
    fn test_otherwise_replaces_previous_default() {
        let result = When::<&str>::new()
            .clause(false, "no")
            .otherwise("first")
            .otherwise_lazy(|| "second")
            .evaluate();
        assert_eq!(result, Ok("second"));
    }

    #[test]
    fn test_nested_evaluation() {
        let x = 7;
        let result = When::<_>::new()
            .clause_lazy(
                || x > 5,
                || {
                    When::<_>::new()
                        .clause(x % 2 == 0, "big even")
                        .otherwise("big odd")
                        .evaluate()
                },
            )
            .otherwise(Ok("small"))
            .evaluate();
        assert_eq!(result, Ok(Ok("big odd")));
    }
}
