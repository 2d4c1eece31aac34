// SPDX-License-Identifier: MIT

//! Data-driven `when`
//!
//! This module provides:
//! - `condition` - condition strings evaluated against a JSON context
//! - `RuleSet` - ordered condition/value tables loaded from YAML
//! - `CompiledRules` - a rule table with its conditions parsed once

pub mod condition;
mod table;

pub use table::{CompiledRules, Rule, RuleSet};
