//! Per-clause hook run before compilation.

use ql_syntax::Clause;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The rewritable parts of a clause handed to a [`FieldValidator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRequest {
    pub key: String,
    pub operator: String,
    pub value: String,
}

impl From<Clause> for FieldRequest {
    fn from(clause: Clause) -> Self {
        Self {
            key: clause.key,
            operator: clause.operator,
            value: clause.value,
        }
    }
}

/// Outcome of validating one clause.
#[derive(Debug)]
pub enum Verdict {
    /// Compile the clause using the (possibly rewritten) request.
    Proceed(FieldRequest),
    /// Drop the clause silently.
    Skip,
    /// Abort the whole compile.
    Reject(BoxError),
}

impl Verdict {
    pub fn reject(err: impl Into<BoxError>) -> Self {
        Verdict::Reject(err.into())
    }
}

pub trait FieldValidator {
    fn check(&self, request: FieldRequest) -> Verdict;
}

impl<F> FieldValidator for F
where
    F: Fn(FieldRequest) -> Verdict,
{
    fn check(&self, request: FieldRequest) -> Verdict {
        self(request)
    }
}
