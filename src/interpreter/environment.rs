use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::core::register_builtins},
};

/// A scope mapping names to values, with an optional parent scope.
///
/// Environments form a chain: lookups walk from the local bindings up through
/// every ancestor to the root. A child holds a shared borrow of its parent,
/// so a child can never outlive the call that created it and the chain can
/// never contain a cycle. Only the innermost environment is ever mutated.
///
/// # Example
/// ```
/// use funk::{ast::Expr, interpreter::environment::Environment};
///
/// let mut root = Environment::root();
/// root.define("x", Expr::Number(1));
///
/// let mut child = Environment::child(&root);
/// child.define("y", Expr::Number(2));
///
/// assert_eq!(child.lookup("x").unwrap(), &Expr::Number(1));
/// assert_eq!(child.lookup("y").unwrap(), &Expr::Number(2));
/// assert!(root.lookup("y").is_err());
/// ```
#[derive(Debug, Default)]
pub struct Environment<'p> {
    parent:   Option<&'p Environment<'p>>,
    bindings: HashMap<String, Expr>,
}

impl<'p> Environment<'p> {
    /// Creates an empty root environment.
    #[must_use]
    pub fn root() -> Self {
        Self { parent:   None,
               bindings: HashMap::new(), }
    }

    /// Creates a root environment with every built-in function registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut env = Self::root();
        register_builtins(&mut env);
        env
    }

    /// Creates an empty scope whose lookups fall back to `parent`.
    #[must_use]
    pub fn child(parent: &'p Environment<'p>) -> Self {
        Self { parent:   Some(parent),
               bindings: HashMap::new(), }
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub const fn parent(&self) -> Option<&'p Environment<'p>> {
        self.parent
    }

    /// Number of ancestors between this scope and the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        std::iter::successors(self.parent, |env| env.parent).count()
    }

    /// Binds `name` in this scope, replacing any local binding of the same
    /// name. Bindings in ancestor scopes are shadowed, not modified.
    ///
    /// Returns the value previously bound locally, if any.
    pub fn define(&mut self, name: impl Into<String>, value: Expr) -> Option<Expr> {
        self.bindings.insert(name.into(), value)
    }

    /// Whether `name` is bound in this scope, ignoring ancestors.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Finds the innermost binding of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Expr> {
        let mut scope = Some(self);

        while let Some(env) = scope {
            if let Some(value) = env.bindings.get(name) {
                return Some(value);
            }
            scope = env.parent;
        }

        None
    }

    /// Finds the innermost binding of `name`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedSymbol`] once the root has been
    /// searched without a match.
    pub fn lookup(&self, name: &str) -> EvalResult<&Expr> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedSymbol { name: name.to_string() })
    }
}
