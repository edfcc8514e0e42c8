use crate::policy::{FieldPolicy, FieldRule, UnknownField};
use serde::Deserialize;
use std::{collections::HashMap, path::Path, str::FromStr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read filter config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse filter config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Size limits applied before and during compilation. `None` means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum filter length in bytes.
    pub max_input_len: Option<usize>,
    /// Maximum number of clauses kept after validation.
    pub max_clauses: Option<usize>,
}

/// JSON filter configuration.
///
/// ```json
/// {
///   "limits": { "max_input_len": 65536, "max_clauses": 50 },
///   "fields": { "name": { "column": "user_name", "operators": ["eq", "like"] } },
///   "on_unknown_field": "skip"
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub limits: Limits,
    /// Allowed fields. Without it every field passes through unchanged.
    pub fields: Option<HashMap<String, FieldRule>>,
    pub on_unknown_field: UnknownField,
}

impl FilterConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Ok(source.parse()?)
    }

    /// Field policy described by `fields`, if any.
    pub fn policy(&self) -> Option<FieldPolicy> {
        self.fields
            .as_ref()
            .map(|fields| FieldPolicy::new(fields.clone()).on_unknown(self.on_unknown_field))
    }
}

impl FromStr for FilterConfig {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config: FilterConfig = "{}".parse().unwrap();

        assert_eq!(config.limits, Limits::default());
        assert!(config.fields.is_none());
        assert!(config.policy().is_none());
        assert_eq!(config.on_unknown_field, UnknownField::Reject);
    }

    #[test]
    fn test_full_config() {
        let config: FilterConfig = r#"{
            "limits": { "max_clauses": 10 },
            "fields": {
                "name": { "column": "user_name", "operators": ["eq", "like"] },
                "age": {}
            },
            "on_unknown_field": "skip"
        }"#
        .parse()
        .unwrap();

        assert_eq!(config.limits.max_clauses, Some(10));
        assert_eq!(config.limits.max_input_len, None);
        assert_eq!(config.on_unknown_field, UnknownField::Skip);

        let fields = config.fields.as_ref().unwrap();
        assert_eq!(fields["name"].column.as_deref(), Some("user_name"));
        assert!(fields["age"].operators.is_none());
        assert!(config.policy().is_some());
    }

    #[test]
    fn test_invalid_config() {
        assert!("{ \"limits\": 3 }".parse::<FilterConfig>().is_err());
        assert!(
            r#"{ "on_unknown_field": "ignore" }"#
                .parse::<FilterConfig>()
                .is_err()
        );
    }
}
