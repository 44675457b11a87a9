use crate::{
    ast::Expr,
    interpreter::evaluator::{
        core::EvalResult,
        utils::{expect_number, expect_numbers, is_truthy},
    },
};

/// Counts the truthy arguments, which must all be numbers.
fn count_truthy(function: &str, args: &[Expr]) -> EvalResult<usize> {
    let values = expect_numbers(function, args)?;
    Ok(values.into_iter().filter(|&n| is_truthy(n)).count())
}

/// Logical negation of a single number: `1` for `0`, `0` otherwise.
///
/// The registration table guarantees exactly one argument.
pub fn not(args: &[Expr]) -> EvalResult<Expr> {
    let value = expect_number("not", &args[0])?;
    Ok(Expr::from(!is_truthy(value)))
}

/// True when every argument is truthy.
pub fn and(args: &[Expr]) -> EvalResult<Expr> {
    Ok(Expr::from(count_truthy("and", args)? == args.len()))
}

/// True when at least one argument is truthy.
pub fn or(args: &[Expr]) -> EvalResult<Expr> {
    Ok(Expr::from(count_truthy("or", args)? > 0))
}

/// True when exactly one argument is truthy.
///
/// # Example
/// ```
/// use funk::{ast::Expr, interpreter::evaluator::function::logic::xor};
///
/// let args = [Expr::Number(0), Expr::Number(5), Expr::Number(0)];
/// assert_eq!(xor(&args).unwrap(), Expr::Number(1));
///
/// let args = [Expr::Number(1), Expr::Number(1)];
/// assert_eq!(xor(&args).unwrap(), Expr::Number(0));
/// ```
pub fn xor(args: &[Expr]) -> EvalResult<Expr> {
    Ok(Expr::from(count_truthy("xor", args)? == 1))
}
