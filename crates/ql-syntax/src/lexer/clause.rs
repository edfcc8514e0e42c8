use serde::Serialize;
use std::fmt;

/// One `field:operator(value)` match found in a filter string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    /// Full matched text, trailing separators included.
    pub raw: String,
    pub key: String,
    pub operator: String,
    /// Value list exactly as written between the parentheses.
    pub value: String,
    /// Byte range of `raw` within the input.
    pub span: (usize, usize),
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}({})", self.key, self.operator, self.value)
    }
}
