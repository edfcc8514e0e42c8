use thiserror::Error;

/// Failure to turn a single raw value into a [`Literal`](crate::Literal).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("missing value")]
    MissingValue,

    #[error("unterminated string literal {literal}")]
    UnterminatedString { literal: String },

    #[error("invalid number '{literal}': {reason}")]
    InvalidNumber { literal: String, reason: String },
}
