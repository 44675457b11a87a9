use log::debug;

use crate::{
    ast::{Arity, BuiltIn, Expr},
    interpreter::{
        environment::Environment,
        evaluator::function::{arithmetic, comparison, control, logic, print},
    },
};

/// Defines built-in functions by generating a registration table and a name
/// list.
///
/// Each entry provides:
/// - a string name,
/// - an arity constraint,
/// - a handler implementing the built-in.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table of [`BuiltIn`] values),
/// - `BUILTIN_FUNCTIONS` (public list of built-in names).
///
/// Every entry is eager: its arguments are evaluated before the handler runs.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltIn] = &[
            $(
                BuiltIn::new($name, $arity, $func),
            )*
        ];
        /// Names of every built-in registered by [`register_builtins`].
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "add"              => { arity: Arity::AtLeast(0), func: |_, _, args| arithmetic::add(args) },
    "sub"              => { arity: Arity::AtLeast(1), func: |_, _, args| arithmetic::sub(args) },
    "mul"              => { arity: Arity::AtLeast(0), func: |_, _, args| arithmetic::mul(args) },
    "div"              => { arity: Arity::AtLeast(1), func: |_, _, args| arithmetic::div(args) },
    "mod"              => { arity: Arity::AtLeast(1), func: |_, _, args| arithmetic::rem(args) },
    "print"            => { arity: Arity::AtLeast(0), func: |ctx, _, args| print::print(ctx, args) },
    "batch"            => { arity: Arity::AtLeast(0), func: |_, _, args| control::batch(args) },
    "if"               => { arity: Arity::AtLeast(0), func: |_, _, args| control::branch(args) },
    "not"              => { arity: Arity::Exact(1),   func: |_, _, args| logic::not(args) },
    "and"              => { arity: Arity::AtLeast(0), func: |_, _, args| logic::and(args) },
    "or"               => { arity: Arity::AtLeast(0), func: |_, _, args| logic::or(args) },
    "xor"              => { arity: Arity::AtLeast(0), func: |_, _, args| logic::xor(args) },
    "equal"            => { arity: Arity::AtLeast(2), func: |_, _, args| comparison::compare("equal", args, |a, b| a == b) },
    "not_equal"        => { arity: Arity::AtLeast(2), func: |_, _, args| comparison::compare("not_equal", args, |a, b| a != b) },
    "greater"          => { arity: Arity::AtLeast(2), func: |_, _, args| comparison::compare("greater", args, |a, b| a > b) },
    "greater_or_equal" => { arity: Arity::AtLeast(2), func: |_, _, args| comparison::compare("greater_or_equal", args, |a, b| a >= b) },
    "less"             => { arity: Arity::AtLeast(2), func: |_, _, args| comparison::compare("less", args, |a, b| a < b) },
    "less_or_equal"    => { arity: Arity::AtLeast(2), func: |_, _, args| comparison::compare("less_or_equal", args, |a, b| a <= b) },
}

/// Binds every built-in function into `env` under its name.
///
/// Called once on the root environment before any program runs. Existing
/// bindings with the same names are replaced.
///
/// # Example
/// ```
/// use funk::interpreter::{environment::Environment,
///                         evaluator::function::core::{BUILTIN_FUNCTIONS, register_builtins}};
///
/// let mut env = Environment::root();
/// register_builtins(&mut env);
///
/// assert!(BUILTIN_FUNCTIONS.iter().all(|name| env.contains_local(name)));
/// ```
pub fn register_builtins(env: &mut Environment<'_>) {
    for builtin in BUILTIN_TABLE {
        env.define(builtin.name, Expr::BuiltIn(*builtin));
    }
    debug!("registered {} built-in functions", BUILTIN_TABLE.len());
}

/// Looks up a built-in by name without going through an environment.
///
/// Unlike an environment lookup, this cannot be affected by a program that
/// shadows the name.
///
/// # Example
/// ```
/// use funk::{ast::{Arity, Expr},
///            interpreter::{environment::Environment,
///                          evaluator::function::core::find_builtin}};
///
/// let not = find_builtin("not").unwrap();
/// assert_eq!(not.arity, Arity::Exact(1));
/// assert_eq!(Environment::with_builtins().lookup("not").cloned(), Ok(Expr::BuiltIn(not)));
/// assert!(find_builtin("function").is_none());
/// ```
#[must_use]
pub fn find_builtin(name: &str) -> Option<BuiltIn> {
    BUILTIN_TABLE.iter().find(|b| b.name == name).copied()
}
