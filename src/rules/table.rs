// SPDX-License-Identifier: MIT

//! Rule tables - `when` clauses loaded from YAML
//!
//! ```yaml
//! name: grades
//! rules:
//!   - when: "score >= 90"
//!     then: "A"
//!   - when: "score >= 80"
//!     then: "B"
//! otherwise: "F"
//! ```

use super::condition::{self, Expression};
use crate::error::ExosError;
use crate::when::{Arg, When};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// One clause of a rule table
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Rule {
    /// Condition string, see `rules::condition`
    pub when: String,
    /// Value returned when the condition holds
    pub then: Value,
}

/// An ordered rule table with an optional default
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RuleSet {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Returned when no rule matches. A YAML `null` counts as absent.
    #[serde(default)]
    pub otherwise: Option<Value>,
}

/// A rule table whose conditions have been parsed
#[derive(Debug, Clone)]
pub struct CompiledRules {
    clauses: Vec<(Expression, Value)>,
    otherwise: Option<Value>,
}

impl RuleSet {
    /// Parse a rule table from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, ExosError> {
        let rules: RuleSet = serde_yaml::from_str(content)?;
        Ok(rules)
    }

    /// Load a rule table from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ExosError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse every condition up front
    pub fn compile(&self) -> Result<CompiledRules, ExosError> {
        let clauses = self
            .rules
            .iter()
            .enumerate()
            .map(|(index, rule)| match condition::parse(&rule.when) {
                Ok(expr) => Ok((expr, rule.then.clone())),
                Err(e) => {
                    log::warn!(
                        "Rule {} of '{}' has an invalid condition '{}': {}",
                        index,
                        self.name.as_deref().unwrap_or("<unnamed>"),
                        rule.when,
                        e
                    );
                    Err(ExosError::condition(index, e))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CompiledRules {
            clauses,
            otherwise: self.otherwise.clone(),
        })
    }

    /// Compile and evaluate against `context` in one go
    pub fn evaluate(&self, context: &Value) -> Result<Value, ExosError> {
        self.compile()?.evaluate(context)
    }
}

impl CompiledRules {
    /// Return the value of the first rule whose condition holds for `context`
    pub fn evaluate(&self, context: &Value) -> Result<Value, ExosError> {
        let mut when = When::<Value, ExosError>::new();

        for (index, (expr, value)) in self.clauses.iter().enumerate() {
            when = when.clause_with(
                Arg::lazy(move || {
                    let hit = condition::evaluate(expr, context);
                    if hit {
                        log::debug!("Rule {} matched: {}", index, expr);
                    }
                    hit
                }),
                Arg::lazy(move || value.clone()),
            );
        }

        if let Some(default) = &self.otherwise {
            when = when.otherwise_lazy(move || {
                log::debug!("No rule matched, using default");
                default.clone()
            });
        }

        when.evaluate()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
