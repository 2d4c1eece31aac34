// SPDX-License-Identifier: MIT

//! Condition expression evaluator

use super::ast::{CompareOp, Expression, Literal};
use crate::object::get_path;
use serde_json::Value;
use std::cmp::Ordering;

/// Evaluate a condition expression against a JSON context.
///
/// Paths that do not resolve are treated as `null`.
pub fn evaluate(expr: &Expression, context: &Value) -> bool {
    match expr {
        Expression::True => true,
        Expression::False => false,
        Expression::Compare { path, op, right } => compare(get_path(context, path), *op, right),
        Expression::And(left, right) => evaluate(left, context) && evaluate(right, context),
        Expression::Or(left, right) => evaluate(left, context) || evaluate(right, context),
        Expression::Not(inner) => !evaluate(inner, context),
    }
}

fn compare(left: Option<&Value>, op: CompareOp, right: &Literal) -> bool {
    let left = left.unwrap_or(&Value::Null);
    match op {
        CompareOp::Eq => equals(left, right),
        CompareOp::NotEq => !equals(left, right),
        CompareOp::Gt => order(left, right) == Some(Ordering::Greater),
        CompareOp::Gte => matches!(
            order(left, right),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        CompareOp::Lt => order(left, right) == Some(Ordering::Less),
        CompareOp::Lte => matches!(order(left, right), Some(Ordering::Less | Ordering::Equal)),
        CompareOp::Contains => contains(left, right),
    }
}

fn equals(left: &Value, right: &Literal) -> bool {
    match (left, right) {
        (Value::Null, Literal::Null) => true,
        (Value::String(s), Literal::String(r)) => s == r,
        (Value::Bool(b), Literal::Boolean(r)) => b == r,
        (Value::Number(n), Literal::Number(r)) => n.as_f64() == Some(*r),
        _ => false,
    }
}

/// Numbers order numerically and strings lexically; anything else is unordered
fn order(left: &Value, right: &Literal) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(n), Literal::Number(r)) => n.as_f64()?.partial_cmp(r),
        (Value::String(s), Literal::String(r)) => Some(s.as_str().cmp(r.as_str())),
        _ => None,
    }
}

fn contains(left: &Value, right: &Literal) -> bool {
    match (left, right) {
        (Value::String(s), Literal::String(sub)) => s.contains(sub.as_str()),
        (Value::Array(items), _) => items.iter().any(|item| equals(item, right)),
        (Value::Object(map), Literal::String(key)) => map.contains_key(key),
        _ => false,
    }
}
