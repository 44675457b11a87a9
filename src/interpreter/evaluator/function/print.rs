use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Context, EvalResult},
};

/// Writes each argument to the context's output sink and returns `Void`.
///
/// Numbers are written as bare integers, `Void` writes nothing, and any other
/// value is written in its structural form, such as `<built-in add>`. Each
/// written value is followed by a newline.
pub fn print(context: &mut Context, args: &[Expr]) -> EvalResult<Expr> {
    for arg in args {
        context.write_value(arg)?;
    }
    Ok(Expr::Void)
}
