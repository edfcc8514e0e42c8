//! Operator registry: maps an operator name to the function that compiles it.

use crate::{
    compiler::CompiledPredicate,
    error::{Arity, CompileError},
};
use lazy_static::lazy_static;
use ql_syntax::{Literal, split_values};
use std::{collections::HashMap, fmt, sync::Arc};

pub mod compare;
pub mod json;
pub mod set;

lazy_static! {
    static ref SYMBOLS: HashMap<&'static str, &'static str> = HashMap::from([
        ("eq", "="),
        ("neq", "<>"),
        ("gt", ">"),
        ("ge", ">="),
        ("lt", "<"),
        ("le", "<="),
        ("like", "like"),
    ]);
    pub static ref BUILTIN_OPERATORS: OperatorRegistry = OperatorRegistry::builtin();
}

/// SQL symbol of a base comparison operator (`eq` => `=`).
pub fn symbol(operator: &str) -> Option<&'static str> {
    SYMBOLS.get(operator).copied()
}

/// Input to an operator compiler for one clause.
#[derive(Debug, Clone, Copy)]
pub struct ClauseContext<'a> {
    pub operator: &'a str,
    /// Field already rendered as SQL (quoted, or a `concat(...)` expression).
    pub field: &'a str,
    /// Raw value list from between the parentheses.
    pub value: &'a str,
}

impl ClauseContext<'_> {
    /// Splits the value list and checks its length.
    pub fn values(&self, arity: Arity) -> Result<Vec<Literal>, CompileError> {
        let values = split_values(self.value)?;
        if !arity.accepts(values.len()) {
            return Err(self.arity_mismatch(arity, values.len()));
        }
        Ok(values)
    }

    pub fn arity_mismatch(&self, expected: Arity, found: usize) -> CompileError {
        CompileError::ArityMismatch {
            operator: self.operator.to_string(),
            expected,
            found,
        }
    }

    /// Text of the literal at `position`, or a type mismatch.
    pub fn text_at<'v>(
        &self,
        values: &'v [Literal],
        position: usize,
    ) -> Result<&'v str, CompileError> {
        let value = &values[position];
        value.as_text().ok_or_else(|| CompileError::TypeMismatch {
            operator: self.operator.to_string(),
            position,
            expected: "text",
            found: value.type_name(),
        })
    }
}

pub trait OperatorCompiler: Send + Sync {
    fn compile(&self, ctx: &ClauseContext<'_>) -> Result<CompiledPredicate, CompileError>;
}

impl<F> OperatorCompiler for F
where
    F: Fn(&ClauseContext<'_>) -> Result<CompiledPredicate, CompileError> + Send + Sync,
{
    fn compile(&self, ctx: &ClauseContext<'_>) -> Result<CompiledPredicate, CompileError> {
        self(ctx)
    }
}

#[derive(Clone, Default)]
pub struct OperatorRegistry {
    compilers: HashMap<String, Arc<dyn OperatorCompiler>>,
}

impl OperatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in operator.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for name in SYMBOLS.keys() {
            registry.register(*name, compare::compile);
        }
        registry
            .register("in", set::compile_in)
            .register("range", set::compile_range)
            .register("json", json::compile_contains)
            .register("json_extract", json::compile_extract)
            .register("json_path", json::compile_path)
            .register("json_in", json::compile_in);
        registry
    }

    /// Adds an operator, replacing any existing one with the same name.
    pub fn register<C>(&mut self, name: impl Into<String>, compiler: C) -> &mut Self
    where
        C: OperatorCompiler + 'static,
    {
        self.compilers.insert(name.into(), Arc::new(compiler));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn OperatorCompiler> {
        self.compilers.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.compilers.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.compilers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn compile(&self, ctx: &ClauseContext<'_>) -> Result<CompiledPredicate, CompileError> {
        let compiler = self
            .get(ctx.operator)
            .ok_or_else(|| CompileError::UnknownOperator {
                operator: ctx.operator.to_string(),
            })?;
        compiler.compile(ctx)
    }
}

impl fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorRegistry")
            .field("operators", &self.names())
            .finish()
    }
}
