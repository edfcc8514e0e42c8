use crate::error::LiteralError;
use serde::Serialize;
use std::{fmt, str::FromStr};

/// A single bind value taken from a clause's value list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl Literal {
    /// Classifies and converts one raw value.
    ///
    /// - quoted with `'` or `"` => the text between the quotes, never numeric
    /// - leading ASCII digit => float if it contains `.`, integer otherwise
    /// - anything else => the trimmed text as is
    pub fn parse(raw: &str) -> Result<Self, LiteralError> {
        let s = raw.trim();
        let bytes = s.as_bytes();

        let Some(&first) = bytes.first() else {
            return Err(LiteralError::MissingValue);
        };

        if first == b'\'' || first == b'"' {
            // A lone quote is both first and last character but never closed
            if bytes.len() < 2 || bytes[bytes.len() - 1] != first {
                return Err(LiteralError::UnterminatedString {
                    literal: s.to_string(),
                });
            }
            return Ok(Literal::Text(s[1..s.len() - 1].to_string()));
        }

        if first.is_ascii_digit() {
            return if s.contains('.') {
                match s.parse::<f64>() {
                    Ok(n) if n.is_finite() => Ok(Literal::Float(n)),
                    Ok(_) => Err(invalid_number(s, "value out of range")),
                    Err(err) => Err(invalid_number(s, err)),
                }
            } else {
                s.parse::<i64>()
                    .map(Literal::Integer)
                    .map_err(|err| invalid_number(s, err))
            };
        }

        Ok(Literal::Text(s.to_string()))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Literal::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Literal::Text(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Literal::Text(_) => "text",
            Literal::Integer(_) => "integer",
            Literal::Float(_) => "float",
        }
    }

    /// Same value rendered as text, used where SQL expects a string operand.
    pub fn into_text(self) -> Literal {
        match self {
            Literal::Text(_) => self,
            other => Literal::Text(other.to_string()),
        }
    }
}

fn invalid_number(literal: &str, err: impl fmt::Display) -> LiteralError {
    LiteralError::InvalidNumber {
        literal: literal.to_string(),
        reason: err.to_string(),
    }
}

impl FromStr for Literal {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Literal::parse(s)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Text(s) => write!(f, "{s}"),
            Literal::Integer(n) => write!(f, "{n}"),
            Literal::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Text(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Text(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

/// Splits a raw value list on `,` and coerces every element in order.
///
/// Commas are not escapable: `'a,b'` splits into two broken string literals.
pub fn split_values(raw: &str) -> Result<Vec<Literal>, LiteralError> {
    raw.split(',').map(Literal::parse).collect()
}
