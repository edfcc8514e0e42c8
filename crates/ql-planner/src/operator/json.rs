//! MySQL JSON operators. The first value of each is a JSON path, embedded in
//! the query as a string literal; the remaining values are bound.

use super::{ClauseContext, symbol};
use crate::{
    compiler::CompiledPredicate,
    error::{Arity, CompileError},
    ident::{placeholders, quote_str},
};

/// `json('$path', v)` => `json_contains(<field>->'$path',?,'$')`, binding `v` as text.
pub fn compile_contains(ctx: &ClauseContext<'_>) -> Result<CompiledPredicate, CompileError> {
    let mut values = ctx.values(Arity::Exactly(2))?;
    let path = quote_str(ctx.text_at(&values, 0)?);
    let value = values.remove(1).into_text();

    Ok(CompiledPredicate::new(
        format!("json_contains({}->{path},?,'$')", ctx.field),
        vec![value],
    ))
}

/// `json_extract('$path', op, v...)` => `json_extract(<field>,'$path') <op> ?`.
///
/// `op` goes through the comparison symbol table; an unmapped `op` is written
/// into the query as is. With `in` any number of values is accepted, every
/// other operator takes exactly one.
pub fn compile_extract(ctx: &ClauseContext<'_>) -> Result<CompiledPredicate, CompileError> {
    let mut values = ctx.values(Arity::AtLeast(3))?;
    let path = quote_str(ctx.text_at(&values, 0)?);
    let sub_op = ctx.text_at(&values, 1)?.to_string();
    let args = values.split_off(2);
    let target = format!("json_extract({},{path})", ctx.field);

    if sub_op == "in" {
        return Ok(CompiledPredicate::new(
            format!("{target} in ({})", placeholders(args.len())),
            args,
        ));
    }

    if args.len() != 1 {
        return Err(ctx.arity_mismatch(Arity::Exactly(3), args.len() + 2));
    }

    let sql_op = symbol(&sub_op).unwrap_or(sub_op.as_str());
    Ok(CompiledPredicate::new(format!("{target} {sql_op} ?"), args))
}

/// `json_path('$path', v)` => `json_contains_path(<field>,'all','$path') = ?`.
pub fn compile_path(ctx: &ClauseContext<'_>) -> Result<CompiledPredicate, CompileError> {
    let mut values = ctx.values(Arity::Exactly(2))?;
    let path = quote_str(ctx.text_at(&values, 0)?);
    let args = values.split_off(1);

    Ok(CompiledPredicate::new(
        format!("json_contains_path({},'all',{path}) = ?", ctx.field),
        args,
    ))
}

/// `json_in('$path', v...)` => `json_contains(<field>->'$path',json_array(?,...))`.
pub fn compile_in(ctx: &ClauseContext<'_>) -> Result<CompiledPredicate, CompileError> {
    let mut values = ctx.values(Arity::AtLeast(2))?;
    let path = quote_str(ctx.text_at(&values, 0)?);
    let args = values.split_off(1);

    Ok(CompiledPredicate::new(
        format!(
            "json_contains({}->{path},json_array({}))",
            ctx.field,
            placeholders(args.len())
        ),
        args,
    ))
}
