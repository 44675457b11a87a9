#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A symbol was not bound in the active scope or any of its ancestors.
    UndefinedSymbol {
        /// The name of the symbol.
        name: String,
    },
    /// The callee of a call evaluated to something other than a function.
    NotCallable {
        /// Display form of the value that was called.
        found: String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        function: String,
        /// Description of the accepted count, such as `2` or `at least 1`.
        expected: String,
        /// The number of arguments actually supplied.
        received: usize,
    },
    /// A built-in received an argument of a type it does not accept.
    UnexpectedArgumentType {
        /// The name of the built-in.
        function: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Attempted remainder by zero.
    RemainderByZero,
    /// A void value reached the evaluator.
    VoidEvaluation,
    /// Integer arithmetic overflowed.
    Overflow {
        /// The name of the built-in that overflowed.
        function: String,
    },
    /// Writing to the output sink failed.
    Output {
        /// Details reported by the sink.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedSymbol { name } => write!(f, "Undefined symbol \"{name}\"."),
            Self::NotCallable { found } => {
                write!(f, "Call target is not a function: {found}.")
            },
            Self::ArgumentCountMismatch { function,
                                          expected,
                                          received, } => write!(f,
                                                                "Unexpected number of arguments provided to function \"{function}\" (Expected: {expected}, Received: {received})."),
            Self::UnexpectedArgumentType { function } => write!(f,
                                                                "Unexpected argument type passed to function \"{function}\"."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::RemainderByZero => write!(f, "Remainder by zero."),
            Self::VoidEvaluation => write!(f, "Void cannot be evaluated."),
            Self::Overflow { function } => write!(f,
                                                  "Integer overflow while computing \"{function}\"."),
            Self::Output { details } => write!(f, "Failed to write output: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
