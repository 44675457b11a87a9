use crate::{
    ast::Expr,
    interpreter::evaluator::{core::EvalResult, utils::expect_numbers},
};

/// Checks `relation` between every argument and its immediate predecessor.
///
/// The result is `1` only if every adjacent pair satisfies the relation,
/// written as `relation(previous, current)`. Checking stops at the first
/// failing pair. Arguments that are not neighbours are never compared, so
/// `(not_equal 1 0 1)` is true.
///
/// # Example
/// ```
/// use funk::{ast::Expr, interpreter::evaluator::function::comparison::compare};
///
/// let args = [Expr::Number(1), Expr::Number(1), Expr::Number(2)];
/// assert_eq!(compare("equal", &args, |a, b| a == b).unwrap(), Expr::Number(0));
///
/// let args = [Expr::Number(3), Expr::Number(2), Expr::Number(1)];
/// assert_eq!(compare("greater", &args, |a, b| a > b).unwrap(), Expr::Number(1));
/// ```
pub fn compare(function: &str, args: &[Expr], relation: fn(i32, i32) -> bool) -> EvalResult<Expr> {
    let values = expect_numbers(function, args)?;
    let holds = values.windows(2).all(|pair| relation(pair[0], pair[1]));
    Ok(Expr::from(holds))
}
