use std::{fmt, rc::Rc};

use crate::interpreter::{
    environment::Environment,
    evaluator::core::{Context, EvalResult},
};

/// Native logic behind a [`BuiltIn`].
///
/// The handler receives the evaluator context, the environment of the call
/// site and the call's arguments. For eager built-ins the arguments are
/// already evaluated; lazy built-ins receive the raw argument expressions and
/// evaluate them themselves.
pub type BuiltInHandler = fn(&mut Context, &mut Environment<'_>, &[Expr]) -> EvalResult<Expr>;

/// The number of arguments a [`BuiltIn`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly `n` arguments.
    Exact(usize),
    /// `n` or more arguments.
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this constraint.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A callable implemented by the host rather than defined in source text.
///
/// Built-ins cannot be written in source code; they are registered into the
/// root environment before a program runs.
#[derive(Clone, Copy)]
pub struct BuiltIn {
    /// The name the built-in is registered under.
    pub name:       &'static str,
    /// How many arguments the built-in accepts.
    pub arity:      Arity,
    /// The native implementation.
    pub handler:    BuiltInHandler,
    /// Whether arguments are evaluated before the handler runs.
    pub eager_args: bool,
}

impl BuiltIn {
    /// Creates a built-in whose arguments are evaluated before the handler
    /// runs.
    #[must_use]
    pub const fn new(name: &'static str, arity: Arity, handler: BuiltInHandler) -> Self {
        Self { name,
               arity,
               handler,
               eager_args: true }
    }

    /// Creates a built-in that receives its argument expressions unevaluated.
    #[must_use]
    pub const fn lazy(name: &'static str, arity: Arity, handler: BuiltInHandler) -> Self {
        Self { name,
               arity,
               handler,
               eager_args: false }
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltIn")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .field("eager_args", &self.eager_args)
         .finish_non_exhaustive()
    }
}

// Handler addresses are not stable across codegen units, so identity is the
// registered name.
impl PartialEq for BuiltIn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arity == other.arity && self.eager_args == other.eager_args
    }
}

impl Eq for BuiltIn {}

/// A named, user-defined function.
///
/// Parameter names are expected to be unique but this is not enforced; when
/// a name repeats, the last argument bound to it wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The name the function binds itself to when evaluated.
    pub name:       String,
    /// Parameter names, in call order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Expr,
}

/// An expression node, which is also the runtime value type.
///
/// Every node evaluates to another `Expr`. Numbers and callables evaluate to
/// themselves, so evaluated values are simply the subset of nodes that are
/// already in normal form: `Number`, `Function`, `BuiltIn` and `Void`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A 32-bit signed integer.
    Number(i32),
    /// A reference to a binding in the active environment.
    Symbol(String),
    /// Application of a callee to arguments, `(callee arg ...)`.
    Call {
        /// Expression producing the function to call.
        callee:    Box<Self>,
        /// Argument expressions, in order.
        arguments: Vec<Self>,
    },
    /// A user-defined function, `(function name (params ...) body)`.
    Function(Rc<FunctionDef>),
    /// A host-implemented function.
    BuiltIn(BuiltIn),
    /// The absence of a value. Never produced by the parser.
    Void,
}

impl Expr {
    /// Returns the integer value if this is a `Number`.
    #[must_use]
    pub const fn as_number(&self) -> Option<i32> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this node can appear as the target of a call.
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_) | Self::BuiltIn(_))
    }

    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// A short name for the variant, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Symbol(_) => "symbol",
            Self::Call { .. } => "call",
            Self::Function(_) => "function",
            Self::BuiltIn(_) => "built-in",
            Self::Void => "void",
        }
    }

    /// The kind name followed by the display form, such as `number 5`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Void => self.kind_name().to_string(),
            _ => format!("{} {self}", self.kind_name()),
        }
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Number(i32::from(value))
    }
}

impl From<FunctionDef> for Expr {
    fn from(value: FunctionDef) -> Self {
        Self::Function(Rc::new(value))
    }
}

impl From<BuiltIn> for Expr {
    fn from(value: BuiltIn) -> Self {
        Self::BuiltIn(value)
    }
}

/// Writes `items` separated by single spaces.
fn write_spaced<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(name) => write!(f, "{name}"),
            Self::Call { callee, arguments } => {
                write!(f, "({callee}")?;
                for argument in arguments {
                    write!(f, " {argument}")?;
                }
                write!(f, ")")
            },
            Self::Function(def) => write!(f, "{def}"),
            Self::BuiltIn(builtin) => write!(f, "<built-in {}>", builtin.name),
            Self::Void => Ok(()),
        }
    }
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(function {} (", self.name)?;
        write_spaced(f, &self.parameters)?;
        write!(f, ") {})", self.body)
    }
}

/// The root of a parsed source: its top-level expressions, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level expressions, evaluated left to right.
    pub expressions: Vec<Expr>,
}

impl Program {
    #[must_use]
    pub const fn new(expressions: Vec<Expr>) -> Self {
        Self { expressions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}
