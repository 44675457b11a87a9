use crate::{
    ast::Expr,
    interpreter::evaluator::{core::EvalResult, utils::expect_number},
};

/// Returns the last argument, or `Void` when there are none.
///
/// Since arguments are evaluated in order before this runs, `batch`
/// sequences side effects and keeps the final value.
pub fn batch(args: &[Expr]) -> EvalResult<Expr> {
    Ok(args.last().cloned().unwrap_or(Expr::Void))
}

/// Implements `if`: arguments are read as `condition result` pairs.
///
/// Returns the result paired with the first truthy condition. A trailing
/// unpaired argument acts as the else branch. Without a match and without an
/// else branch the result is `Void`.
///
/// All arguments have been evaluated by the time this runs, including
/// branches that are not selected.
///
/// # Example
/// ```
/// use funk::{ast::Expr, interpreter::evaluator::function::control::branch};
///
/// let args: Vec<Expr> = [0, 1, 0, 2, 3].into_iter().map(Expr::from).collect();
/// assert_eq!(branch(&args).unwrap(), Expr::Number(3));
///
/// let args: Vec<Expr> = [0, 1].into_iter().map(Expr::from).collect();
/// assert_eq!(branch(&args).unwrap(), Expr::Void);
/// ```
pub fn branch(args: &[Expr]) -> EvalResult<Expr> {
    let mut pairs = args.chunks_exact(2);

    for pair in pairs.by_ref() {
        if expect_number("if", &pair[0])? != 0 {
            return Ok(pair[1].clone());
        }
    }

    Ok(pairs.remainder().first().cloned().unwrap_or(Expr::Void))
}
