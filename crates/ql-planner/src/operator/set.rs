use super::ClauseContext;
use crate::{
    compiler::CompiledPredicate,
    error::{Arity, CompileError},
    ident::placeholders,
};

/// `<field> in (?,...)`
pub fn compile_in(ctx: &ClauseContext<'_>) -> Result<CompiledPredicate, CompileError> {
    let values = ctx.values(Arity::AtLeast(1))?;

    Ok(CompiledPredicate::new(
        format!("{} in ({})", ctx.field, placeholders(values.len())),
        values,
    ))
}

/// `<field> between ? and ?`
pub fn compile_range(ctx: &ClauseContext<'_>) -> Result<CompiledPredicate, CompileError> {
    let values = ctx.values(Arity::Exactly(2))?;

    Ok(CompiledPredicate::new(
        format!("{} between ? and ?", ctx.field),
        values,
    ))
}
