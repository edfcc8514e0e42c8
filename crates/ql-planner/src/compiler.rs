use crate::{
    config::Limits,
    error::{CompileError, FilterError},
    ident::{count_placeholders, field_expr},
    operator::{BUILTIN_OPERATORS, ClauseContext, OperatorRegistry},
    validator::{FieldRequest, FieldValidator, Verdict},
};
use ql_syntax::{Literal, tokenize};
use serde::Serialize;
use tracing::debug;

/// SQL fragment and bind arguments for one clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledPredicate {
    pub fragment: String,
    pub args: Vec<Literal>,
}

impl CompiledPredicate {
    pub fn new(fragment: impl Into<String>, args: Vec<Literal>) -> Self {
        Self {
            fragment: fragment.into(),
            args,
        }
    }
}

/// A whole filter: clause fragments joined with ` and `, arguments in clause order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompiledFilter {
    pub query: String,
    pub args: Vec<Literal>,
}

impl CompiledFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Bind parameters in the query; a `?` inside a quoted JSON path is not one.
    pub fn placeholder_count(&self) -> usize {
        count_placeholders(&self.query)
    }

    /// Consumes the filter and returns the query and its arguments.
    pub fn finish(self) -> (String, Vec<Literal>) {
        (self.query, self.args)
    }
}

/// Compiles filter strings against an operator registry.
///
/// Stateless between calls; one compiler can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct FilterCompiler<'r> {
    registry: &'r OperatorRegistry,
    limits: Limits,
}

impl Default for FilterCompiler<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterCompiler<'static> {
    /// Compiler over the built-in operators, without limits.
    pub fn new() -> Self {
        Self {
            registry: &*BUILTIN_OPERATORS,
            limits: Limits::default(),
        }
    }
}

impl<'r> FilterCompiler<'r> {
    pub fn with_registry(registry: &'r OperatorRegistry) -> Self {
        Self {
            registry,
            limits: Limits::default(),
        }
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Compiles every clause of `input`, stopping at the first failure.
    ///
    /// When a validator is given it sees each clause first and may rewrite,
    /// skip or reject it.
    ///
    /// `json_extract` writes an unrecognised sub-operator into the query as
    /// is. Input from untrusted callers should go through a [`FieldPolicy`]
    /// with an operator whitelist that leaves `json_extract` out, or through
    /// a validator of your own that vets it.
    ///
    /// [`FieldPolicy`]: crate::FieldPolicy
    pub fn compile(
        &self,
        input: &str,
        validator: Option<&dyn FieldValidator>,
    ) -> Result<CompiledFilter, FilterError> {
        if let Some(max) = self.limits.max_input_len
            && input.len() > max
        {
            return Err(FilterError::InputTooLarge {
                len: input.len(),
                max,
            });
        }

        let mut fragments = Vec::new();
        let mut args = Vec::new();

        for clause in tokenize(input) {
            let raw = clause.raw.clone();
            let mut request = FieldRequest::from(clause);

            if let Some(validator) = validator {
                request = match validator.check(request) {
                    Verdict::Proceed(request) => request,
                    Verdict::Skip => {
                        debug!(clause = %raw, "clause skipped by validator");
                        continue;
                    }
                    Verdict::Reject(source) => {
                        return Err(FilterError::Rejected { clause: raw, source });
                    }
                };
            }

            if let Some(max) = self.limits.max_clauses
                && fragments.len() >= max
            {
                return Err(FilterError::TooManyClauses { clause: raw, max });
            }

            let predicate = self
                .compile_clause(&request.key, &request.operator, &request.value)
                .map_err(|source| FilterError::Clause {
                    clause: raw.clone(),
                    source,
                })?;

            debug!(clause = %raw, fragment = %predicate.fragment, "compiled clause");
            fragments.push(predicate.fragment);
            args.extend(predicate.args);
        }

        Ok(CompiledFilter {
            query: fragments.join(" and "),
            args,
        })
    }

    /// Compiles a single `(key, operator, value)` triple.
    pub fn compile_clause(
        &self,
        key: &str,
        operator: &str,
        value: &str,
    ) -> Result<CompiledPredicate, CompileError> {
        let field = field_expr(key);
        self.registry.compile(&ClauseContext {
            operator,
            field: &field,
            value,
        })
    }
}

/// Compiles `input` with the built-in operators and no limits.
pub fn compile(
    input: &str,
    validator: Option<&dyn FieldValidator>,
) -> Result<CompiledFilter, FilterError> {
    FilterCompiler::new().compile(input, validator)
}
