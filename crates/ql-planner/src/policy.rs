//! Whitelist validator: allowed fields, their column names and operators.

use crate::validator::{FieldRequest, FieldValidator, Verdict};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldRule {
    /// Column the field maps to; defaults to the field name.
    pub column: Option<String>,
    /// Operators allowed on the field; all when absent.
    pub operators: Option<Vec<String>>,
}

impl FieldRule {
    pub fn allows(&self, operator: &str) -> bool {
        self.operators
            .as_ref()
            .is_none_or(|ops| ops.iter().any(|op| op == operator))
    }
}

/// What to do with a clause on a field the policy does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownField {
    #[default]
    Reject,
    Skip,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("cannot filter by field '{field}'")]
    UnknownField { field: String },

    #[error("operator '{operator}' is not allowed on field '{field}'")]
    OperatorNotAllowed { field: String, operator: String },
}

/// Validator that only lets whitelisted fields through, renaming them to
/// their columns. Every part of a composite key (`a+b`) is checked.
#[derive(Debug, Clone, Default)]
pub struct FieldPolicy {
    fields: HashMap<String, FieldRule>,
    on_unknown: UnknownField,
}

impl FieldPolicy {
    pub fn new(fields: HashMap<String, FieldRule>) -> Self {
        Self {
            fields,
            on_unknown: UnknownField::default(),
        }
    }

    pub fn allow(mut self, field: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.insert(field.into(), rule);
        self
    }

    pub fn on_unknown(mut self, on_unknown: UnknownField) -> Self {
        self.on_unknown = on_unknown;
        self
    }
}

impl FieldValidator for FieldPolicy {
    fn check(&self, mut request: FieldRequest) -> Verdict {
        let mut columns = Vec::new();

        for part in request.key.split('+') {
            let Some(rule) = self.fields.get(part) else {
                return match self.on_unknown {
                    UnknownField::Skip => {
                        debug!(field = part, "skipping clause on unknown field");
                        Verdict::Skip
                    }
                    UnknownField::Reject => Verdict::reject(PolicyViolation::UnknownField {
                        field: part.to_string(),
                    }),
                };
            };

            if !rule.allows(&request.operator) {
                return Verdict::reject(PolicyViolation::OperatorNotAllowed {
                    field: part.to_string(),
                    operator: request.operator.clone(),
                });
            }

            columns.push(rule.column.as_deref().unwrap_or(part).to_string());
        }

        request.key = columns.join("+");
        Verdict::Proceed(request)
    }
}
