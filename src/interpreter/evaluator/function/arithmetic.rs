use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{
        core::EvalResult,
        utils::{expect_numbers, overflow},
    },
};

/// Folds `values` starting from `init` with a checked operation.
///
/// The fold stops at the first step for which `step` returns an error.
fn checked_fold<F>(values: &[i32], init: i32, mut step: F) -> EvalResult<i32>
    where F: FnMut(i32, i32) -> EvalResult<i32>
{
    values.iter().try_fold(init, |acc, &n| step(acc, n))
}

/// Splits off the first value, which seeds the fold of the left-associative
/// operations. The arity table guarantees at least one value.
fn split_first<'a>(function: &str, values: &'a [i32]) -> EvalResult<(i32, &'a [i32])> {
    values.split_first()
          .map(|(first, rest)| (*first, rest))
          .ok_or_else(|| RuntimeError::ArgumentCountMismatch { function: function.to_string(),
                                                               expected: "at least 1".to_string(),
                                                               received: 0, })
}

/// Sums all arguments. Returns `0` when called without arguments.
///
/// # Example
/// ```
/// use funk::{ast::Expr, interpreter::evaluator::function::arithmetic::add};
///
/// let args = [Expr::Number(1), Expr::Number(2), Expr::Number(3)];
/// assert_eq!(add(&args).unwrap(), Expr::Number(6));
/// assert_eq!(add(&[]).unwrap(), Expr::Number(0));
/// ```
pub fn add(args: &[Expr]) -> EvalResult<Expr> {
    let values = expect_numbers("add", args)?;
    checked_fold(&values, 0, |a, b| a.checked_add(b).ok_or_else(|| overflow("add"))).map(Expr::from)
}

/// Subtracts every following argument from the first one.
///
/// # Example
/// ```
/// use funk::{ast::Expr, interpreter::evaluator::function::arithmetic::sub};
///
/// let args = [Expr::Number(10), Expr::Number(3), Expr::Number(2)];
/// assert_eq!(sub(&args).unwrap(), Expr::Number(5));
/// ```
pub fn sub(args: &[Expr]) -> EvalResult<Expr> {
    let values = expect_numbers("sub", args)?;
    let (first, rest) = split_first("sub", &values)?;
    checked_fold(rest, first, |a, b| a.checked_sub(b).ok_or_else(|| overflow("sub"))).map(Expr::from)
}

/// Multiplies all arguments. Returns `1` when called without arguments.
pub fn mul(args: &[Expr]) -> EvalResult<Expr> {
    let values = expect_numbers("mul", args)?;
    checked_fold(&values, 1, |a, b| a.checked_mul(b).ok_or_else(|| overflow("mul"))).map(Expr::from)
}

/// Divides the first argument by every following one, truncating toward
/// zero.
///
/// # Errors
/// [`RuntimeError::DivisionByZero`] as soon as a zero divisor is reached.
pub fn div(args: &[Expr]) -> EvalResult<Expr> {
    let values = expect_numbers("div", args)?;
    let (first, rest) = split_first("div", &values)?;
    checked_fold(rest, first, |a, b| {
        if b == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        a.checked_div(b).ok_or_else(|| overflow("div"))
    }).map(Expr::from)
}

/// Takes the remainder of the first argument by every following one. The
/// result has the sign of the dividend.
///
/// # Errors
/// [`RuntimeError::RemainderByZero`] as soon as a zero divisor is reached.
///
/// # Example
/// ```
/// use funk::{ast::Expr, interpreter::evaluator::function::arithmetic::rem};
///
/// let args = [Expr::Number(-7), Expr::Number(3)];
/// assert_eq!(rem(&args).unwrap(), Expr::Number(-1));
/// assert!(rem(&[Expr::Number(1), Expr::Number(0)]).is_err());
/// ```
pub fn rem(args: &[Expr]) -> EvalResult<Expr> {
    let values = expect_numbers("mod", args)?;
    let (first, rest) = split_first("mod", &values)?;
    checked_fold(rest, first, |a, b| {
        if b == 0 {
            return Err(RuntimeError::RemainderByZero);
        }
        a.checked_rem(b).ok_or_else(|| overflow("mod"))
    }).map(Expr::from)
}
