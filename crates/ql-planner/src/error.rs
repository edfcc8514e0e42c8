use crate::validator::BoxError;
use ql_syntax::LiteralError;
use std::fmt;
use thiserror::Error;

/// Number of values an operator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == *n,
            Arity::AtLeast(n) => count >= *n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Failure to compile a single clause.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error(transparent)]
    Literal(#[from] LiteralError),

    #[error("unknown operator '{operator}'")]
    UnknownOperator { operator: String },

    #[error("{operator} takes {expected} values, found {found}")]
    ArityMismatch {
        operator: String,
        expected: Arity,
        found: usize,
    },

    #[error("{operator} expects {expected} at position {position}, found {found}")]
    TypeMismatch {
        operator: String,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Literal(LiteralError::MissingValue) => ErrorKind::MissingValue,
            CompileError::Literal(LiteralError::UnterminatedString { .. }) => {
                ErrorKind::UnterminatedString
            }
            CompileError::Literal(LiteralError::InvalidNumber { .. }) => ErrorKind::InvalidNumber,
            CompileError::UnknownOperator { .. } => ErrorKind::UnknownOperator,
            CompileError::ArityMismatch { .. } => ErrorKind::ArityMismatch,
            CompileError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }
}

/// Failure of a whole filter compile. Clause failures carry the raw clause text.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("{clause} {source}")]
    Clause {
        clause: String,
        #[source]
        source: CompileError,
    },

    #[error("{clause} {source}")]
    Rejected {
        clause: String,
        #[source]
        source: BoxError,
    },

    #[error("filter is {len} bytes, limit is {max}")]
    InputTooLarge { len: usize, max: usize },

    #[error("{clause} exceeds the limit of {max} clauses")]
    TooManyClauses { clause: String, max: usize },
}

impl FilterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FilterError::Clause { source, .. } => source.kind(),
            FilterError::Rejected { .. } => ErrorKind::ValidatorRejected,
            FilterError::InputTooLarge { .. } => ErrorKind::InputTooLarge,
            FilterError::TooManyClauses { .. } => ErrorKind::TooManyClauses,
        }
    }

    /// Raw text of the clause that caused the failure, if any.
    pub fn clause(&self) -> Option<&str> {
        match self {
            FilterError::Clause { clause, .. }
            | FilterError::Rejected { clause, .. }
            | FilterError::TooManyClauses { clause, .. } => Some(clause),
            FilterError::InputTooLarge { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingValue,
    UnterminatedString,
    InvalidNumber,
    UnknownOperator,
    ArityMismatch,
    TypeMismatch,
    ValidatorRejected,
    InputTooLarge,
    TooManyClauses,
}
