use crate::{ast::Expr, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Extracts the integer from a `Number` argument.
///
/// # Errors
/// Returns [`RuntimeError::UnexpectedArgumentType`] naming `function` if the
/// argument is any other variant.
///
/// # Example
/// ```
/// use funk::{ast::Expr, interpreter::evaluator::utils::expect_number};
///
/// assert_eq!(expect_number("add", &Expr::Number(3)).unwrap(), 3);
/// assert!(expect_number("add", &Expr::Void).is_err());
/// ```
pub fn expect_number(function: &str, value: &Expr) -> EvalResult<i32> {
    value.as_number()
         .ok_or_else(|| RuntimeError::UnexpectedArgumentType { function: function.to_string() })
}

/// Extracts the integers from a list of arguments that must all be
/// `Number`s.
///
/// Every argument is checked before any result is returned, so a type error
/// anywhere in the list is reported even if an earlier argument would later
/// cause another failure.
///
/// # Example
/// ```
/// use funk::{ast::Expr, interpreter::evaluator::utils::expect_numbers};
///
/// let args = [Expr::Number(1), Expr::Number(2)];
/// assert_eq!(expect_numbers("mul", &args).unwrap(), vec![1, 2]);
///
/// let args = [Expr::Number(1), Expr::Symbol("x".into())];
/// assert!(expect_numbers("mul", &args).is_err());
/// ```
pub fn expect_numbers(function: &str, args: &[Expr]) -> EvalResult<Vec<i32>> {
    args.iter().map(|arg| expect_number(function, arg)).collect()
}

/// Builds the overflow error for `function`.
#[must_use]
pub fn overflow(function: &str) -> RuntimeError {
    RuntimeError::Overflow { function: function.to_string() }
}

/// Whether a number counts as true.
#[must_use]
pub const fn is_truthy(value: i32) -> bool {
    value != 0
}
