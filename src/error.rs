/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing source text or
/// matching the token stream against the expression grammar. Parse errors
/// include unexpected characters, unmatched tokens, malformed literals and
/// empty programs.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include undefined symbols, calls to non-functions, arity and type
/// mismatches, division by zero and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
