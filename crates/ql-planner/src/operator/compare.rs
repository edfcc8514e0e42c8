use super::{ClauseContext, symbol};
use crate::{compiler::CompiledPredicate, error::CompileError};
use ql_syntax::Literal;

/// `eq`, `neq`, `gt`, `ge`, `lt`, `le`, `like`: `<field> <symbol> ?`.
///
/// The whole value is one literal, so `name:eq('a,b')` binds `a,b`.
pub fn compile(ctx: &ClauseContext<'_>) -> Result<CompiledPredicate, CompileError> {
    let symbol = symbol(ctx.operator).ok_or_else(|| CompileError::UnknownOperator {
        operator: ctx.operator.to_string(),
    })?;
    let value = Literal::parse(ctx.value)?;

    Ok(CompiledPredicate::new(
        format!("{} {symbol} ?", ctx.field),
        vec![value],
    ))
}
