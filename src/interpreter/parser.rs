/// The matcher driver: whole token streams and single expressions.
///
/// Contains the widen-and-retry loop that grows a token window until one of
/// the expression grammars accepts it.
pub mod core;

/// Call expressions: `( callee arg* )`.
pub mod call;

/// Function definitions: `( function name ( param* ) body )`.
pub mod function;

/// Single-token grammars and helpers shared by the compound grammars.
///
/// Provides number and symbol matching, window shape checks, and the
/// sub-range parser used for the inside of parentheses.
pub mod utils;
