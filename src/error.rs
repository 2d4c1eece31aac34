// SPDX-License-Identifier: MIT

//! Typed error handling for exos-rs
//!
//! `MatchError` is what the `when` evaluator itself can fail with. Callers
//! that run fallible thunks bring their own error type, which only needs a
//! `From<MatchError>` conversion; `ExosError` is the one used by the rest of
//! this crate.

use thiserror::Error;

/// Errors raised by the `when` evaluator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Every predicate was falsy and no default was supplied
    #[error("Non-exhaustive pattern: no predicate matched and no default was given")]
    NonExhaustivePattern,

    /// The argument list cannot be split into clauses plus an optional default
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Errors raised while parsing a condition expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error("Empty condition")]
    Empty,

    #[error("Could not parse literal: {0}")]
    InvalidLiteral(String),

    #[error("Could not parse condition: {0}")]
    MissingOperator(String),

    #[error("Unbalanced parentheses in condition: {0}")]
    UnbalancedParens(String),

    #[error("Unexpected '{token}' in condition: {input}")]
    UnexpectedToken { token: String, input: String },

    #[error("Condition nests deeper than {0} levels")]
    TooDeep(usize),
}

/// Top-level error type for exos-rs
#[derive(Debug, Error)]
pub enum ExosError {
    /// Pattern matching failures
    #[error(transparent)]
    Match(#[from] MatchError),

    /// A dotted attribute path did not resolve
    #[error("Attribute '{path}' not found")]
    AttributeNotFound { path: String },

    /// A rule's condition failed to compile
    #[error("Invalid condition in rule {rule}: {source}")]
    Condition {
        rule: usize,
        #[source]
        source: ConditionError,
    },

    /// A standalone condition failed to parse
    #[error(transparent)]
    Parse(#[from] ConditionError),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl MatchError {
    /// Create an invalid arguments error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments(message.into())
    }
}

impl ExosError {
    /// Create an attribute not found error
    pub fn attribute_not_found(path: impl Into<String>) -> Self {
        Self::AttributeNotFound { path: path.into() }
    }

    /// Create a rule condition error
    pub fn condition(rule: usize, source: ConditionError) -> Self {
        Self::Condition { rule, source }
    }

    /// Whether this error is a non-exhaustive pattern failure
    pub fn is_non_exhaustive(&self) -> bool {
        matches!(self, Self::Match(MatchError::NonExhaustivePattern))
    }
}
