use std::{
    borrow::Cow,
    io::{self, Write},
};

use log::{debug, trace};

use crate::{
    ast::{BuiltIn, Expr, FunctionDef, Program},
    error::RuntimeError,
    interpreter::environment::Environment,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the output sink that `print` writes to. Bindings live in
/// [`Environment`]s, which are passed explicitly so that every evaluation
/// step names the scope it runs in.
///
/// ## Usage
///
/// A `Context` is created once per run and reused for every top-level
/// expression. The root environment is created alongside it, usually with
/// [`Environment::with_builtins`].
pub struct Context {
    output: Box<dyn Write>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context that writes to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Creates a context that writes to the given sink.
    #[must_use]
    pub fn with_output(output: Box<dyn Write>) -> Self {
        Self { output }
    }

    /// Writes the display form of `value` followed by a newline.
    ///
    /// `Void` writes nothing at all.
    pub fn write_value(&mut self, value: &Expr) -> EvalResult<()> {
        if value.is_void() {
            return Ok(());
        }
        writeln!(self.output, "{value}").map_err(|e| RuntimeError::Output { details:
                                                                                e.to_string() })
    }

    /// Flushes the output sink.
    pub fn flush(&mut self) -> EvalResult<()> {
        self.output
            .flush()
            .map_err(|e| RuntimeError::Output { details: e.to_string() })
    }

    /// Evaluates every top-level expression of `program` against `env`, in
    /// order, and returns one result per expression.
    ///
    /// # Errors
    /// Stops at the first error; nothing after it is evaluated.
    pub fn run(&mut self, program: &Program, env: &mut Environment<'_>) -> EvalResult<Vec<Expr>> {
        self.run_with(program, env, |_, _| Ok(()))
    }

    /// Like [`Context::run`], but hands each top-level result to `on_result`
    /// as soon as it is produced.
    ///
    /// # Errors
    /// Stops at the first error raised by evaluation or by `on_result`.
    pub fn run_with<F>(&mut self,
                       program: &Program,
                       env: &mut Environment<'_>,
                       mut on_result: F)
                       -> EvalResult<Vec<Expr>>
        where F: FnMut(&mut Self, &Expr) -> EvalResult<()>
    {
        let mut results = Vec::with_capacity(program.len());

        for (index, expr) in program.expressions.iter().enumerate() {
            debug!("evaluating top-level expression {}: {expr}", index + 1);
            let value = self.eval(expr, env)?;
            on_result(self, &value)?;
            results.push(value);
        }

        self.flush()?;
        Ok(results)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// - Numbers and built-ins evaluate to themselves.
    /// - Symbols are looked up through the environment chain.
    /// - A function definition binds itself under its own name in `env`, the
    ///   environment currently being evaluated, and then evaluates to itself.
    /// - Calls follow the protocol described on [`Context::call`].
    /// - `Void` cannot be evaluated.
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised while evaluating `expr` or its children.
    pub fn eval(&mut self, expr: &Expr, env: &mut Environment<'_>) -> EvalResult<Expr> {
        match expr {
            Expr::Number(_) | Expr::BuiltIn(_) => Ok(expr.clone()),
            Expr::Symbol(name) => env.lookup(name).cloned(),
            Expr::Function(def) => {
                // Side effect: mutates the environment being evaluated.
                env.define(def.name.clone(), expr.clone());
                Ok(expr.clone())
            },
            Expr::Call { callee, arguments } => {
                let target = self.eval(callee, env)?;
                self.call(&target, arguments, env)
            },
            Expr::Void => Err(RuntimeError::VoidEvaluation),
        }
    }

    /// Evaluates each expression in order against `env`.
    pub fn eval_all(&mut self, exprs: &[Expr], env: &mut Environment<'_>) -> EvalResult<Vec<Expr>> {
        exprs.iter().map(|expr| self.eval(expr, env)).collect()
    }

    /// Calls an already evaluated callee with unevaluated argument
    /// expressions.
    ///
    /// - Built-ins get their arguments evaluated first unless they are lazy.
    ///   The argument count is checked after that evaluation.
    /// - User-defined functions always get their arguments evaluated in the
    ///   caller's environment before the body runs.
    ///
    /// # Errors
    /// [`RuntimeError::NotCallable`] if `target` is not a function, or any
    /// error raised by the arguments or the function itself.
    pub fn call(&mut self,
                target: &Expr,
                arguments: &[Expr],
                env: &mut Environment<'_>)
                -> EvalResult<Expr> {
        match target {
            Expr::BuiltIn(builtin) => self.call_builtin(builtin, arguments, env),
            Expr::Function(def) => {
                let values = self.eval_all(arguments, env)?;
                self.invoke(def, values, env)
            },
            other => Err(RuntimeError::NotCallable { found: other.describe() }),
        }
    }

    fn call_builtin(&mut self,
                    builtin: &BuiltIn,
                    arguments: &[Expr],
                    env: &mut Environment<'_>)
                    -> EvalResult<Expr> {
        let arguments = if builtin.eager_args {
            Cow::Owned(self.eval_all(arguments, env)?)
        } else {
            Cow::Borrowed(arguments)
        };

        // Checked after evaluation.
        if !builtin.arity.check(arguments.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { function: builtin.name.to_string(),
                                                             expected: builtin.arity.to_string(),
                                                             received: arguments.len(), });
        }

        trace!("calling built-in {} with {} argument(s)", builtin.name, arguments.len());
        (builtin.handler)(self, env, &arguments)
    }

    /// Invokes a user-defined function with evaluated arguments.
    ///
    /// When the body is a call, it runs in a fresh child scope of `env` that
    /// binds each parameter to its argument. Any other body is evaluated
    /// directly in `env`, without a new scope and without parameter bindings,
    /// so a body that is a bare parameter name only resolves if that name is
    /// already bound somewhere in `env`.
    ///
    /// # Errors
    /// [`RuntimeError::ArgumentCountMismatch`] if the argument count differs
    /// from the parameter count, or any error raised by the body.
    pub fn invoke(&mut self,
                  function: &FunctionDef,
                  arguments: Vec<Expr>,
                  env: &mut Environment<'_>)
                  -> EvalResult<Expr> {
        if arguments.len() != function.parameters.len() {
            return Err(RuntimeError::ArgumentCountMismatch { function: function.name.clone(),
                                                             expected:
                                                                 function.parameters.len().to_string(),
                                                             received: arguments.len(), });
        }

        if !matches!(function.body, Expr::Call { .. }) {
            return self.eval(&function.body, env);
        }

        let mut scope = Environment::child(env);
        for (parameter, value) in function.parameters.iter().zip(arguments) {
            scope.define(parameter.clone(), value);
        }
        trace!("invoking {} in scope at depth {}", function.name, scope.depth());

        self.eval(&function.body, &mut scope)
    }
}
