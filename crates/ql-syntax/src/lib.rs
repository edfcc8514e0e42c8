//! Syntax layer of the filter language.
//!
//! A filter is a sequence of `field:operator(value)` clauses, for example
//! `name:eq('abc'),age:range(16,32)`. This crate finds the clauses in an input
//! string and turns raw values into typed [`Literal`]s. Translating clauses
//! into SQL lives in `ql-planner`.

pub mod error;
pub mod lexer;
pub mod literal;
pub mod parser;

pub use error::LiteralError;
pub use lexer::{Clauses, clause::Clause, tokenize};
pub use literal::{Literal, split_values};
