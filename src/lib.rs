// SPDX-License-Identifier: MIT

//! EXpressions Over Statements: functional helpers for Rust
//!
//! - `when` - ordered, lazy, exhaustiveness-checked pattern matching
//! - `fun` - `memoize`, `curry`, `flip`, `compose`, `pipe`
//! - `iter` - `each`, `ueach`, `print_each`, `flatten`, `reduce_right`
//! - `object` - dotted-path attribute helpers over JSON values
//! - `rules` - `when` tables driven by condition strings and YAML

pub mod error;
pub mod fun;
pub mod iter;
pub mod object;
pub mod rules;
pub mod when;

pub use error::{ConditionError, ExosError, MatchError};
pub use when::{evaluate, Arg, Truthy, When};
