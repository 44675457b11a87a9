/// The environment module holds the scope chain.
///
/// Environments map names to values and link to an optional parent scope.
/// The root environment holds the built-ins and every top-level function
/// definition; child scopes exist only for the duration of a function call.
///
/// # Responsibilities
/// - Defines bindings in the innermost scope.
/// - Resolves names by walking the chain up to the root.
pub mod environment;
/// The evaluator module walks expression trees and computes results.
///
/// The evaluator dispatches on expression variants, implements the call
/// protocol for built-in and user-defined functions, and hosts the table of
/// built-in functions.
///
/// # Responsibilities
/// - Evaluates expressions against an environment.
/// - Creates parameter scopes for function invocations.
/// - Reports runtime errors such as undefined symbols or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces parentheses, symbols and
/// number literals, each tagged with its source line.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Skips whitespace while tracking line numbers.
/// - Reports characters that cannot start a token.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// The parser grows a token window from each starting position and retries
/// every grammar on it until one accepts the whole window.
///
/// # Responsibilities
/// - Converts tokens into numbers, symbols, calls and function definitions.
/// - Rejects malformed literals and definitions with source line info.
pub mod parser;
