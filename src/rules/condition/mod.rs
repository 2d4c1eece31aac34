// SPDX-License-Identifier: MIT

//! Condition strings for rule tables
//!
//! This module provides parsing and evaluation of `when` conditions.
//! Conditions are simple expressions over a JSON context like:
//! - `tier == 'gold'`
//! - `score > 0.8`
//! - `not (status == 'closed' or priority < 3)`

mod ast;
mod evaluator;
mod parser;

pub use ast::{CompareOp, Expression, Literal};
pub use evaluator::evaluate;
pub use parser::{parse, MAX_DEPTH};
