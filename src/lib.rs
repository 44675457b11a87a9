//! # funk
//!
//! funk is a tree-walking interpreter for a small S-expression language
//! written in Rust. Source text is tokenized, matched into an expression
//! tree, and evaluated directly against that tree.
//!
//! ```text
//! (function square (x) (mul x x))
//! (square 12)
//! (if (greater 3 2) 1 0)
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{error::Error, io};

use log::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        lexer::{Token, tokenize},
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum, which is both the expression tree
/// built by the parser and the value type produced by the evaluator, along
/// with user-defined and built-in function types and the `Program` root.
///
/// # Responsibilities
/// - Defines the closed set of expression variants.
/// - Provides the structural text form used when values are printed.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating code. Every error is fatal: a run stops at the first
/// one and reports it once.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers to parse errors for context.
/// - Implements the standard error traits for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the environment chain and
/// evaluation to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment and
///   evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
///
/// Currently provides the bidirectional cursor used to walk token streams.
pub mod util;

/// Tokenizes several sources and concatenates their tokens in order.
///
/// No marker separates the sources, so a form may even start in one source
/// and end in the next. Line numbers restart at 1 for every source.
///
/// # Errors
/// Returns the first tokenizer error of any source.
pub fn tokenize_sources<S: AsRef<str>>(sources: &[S]) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    for source in sources {
        tokens.extend(tokenize(source.as_ref())?);
    }
    Ok(tokens)
}

/// Tokenizes and parses several sources into one program.
///
/// # Errors
/// Returns [`ParseError::EmptyProgram`] if the sources contain no tokens at
/// all, or any tokenizer or parser error.
pub fn load_program<S: AsRef<str>>(sources: &[S]) -> Result<Program, ParseError> {
    let tokens = tokenize_sources(sources)?;
    debug!("loaded {} source(s), {} token(s) in total", sources.len(), tokens.len());
    parse_program(&tokens)
}

/// Writes a top-level result if it is a number.
///
/// This is the echo policy for top-level expressions: numbers are written as
/// bare integers, every other kind of result is dropped.
pub fn echo_result(context: &mut Context, value: &Expr) -> EvalResult<()> {
    if matches!(value, Expr::Number(_)) {
        context.write_value(value)?;
    }
    Ok(())
}

/// Runs several sources as one program and returns every top-level result.
///
/// A fresh root environment with all built-ins is created for the run. When
/// `echo` is set, number results are written to the context's output as
/// soon as they are produced.
///
/// # Errors
/// Returns an error if tokenizing, parsing or evaluation fails.
pub fn run_sources<S: AsRef<str>>(sources: &[S],
                                  context: &mut Context,
                                  echo: bool)
                                  -> Result<Vec<Expr>, Box<dyn Error>> {
    let program = load_program(sources)?;
    let mut env = Environment::with_builtins();

    let results = if echo {
        context.run_with(&program, &mut env, echo_result)?
    } else {
        context.run(&program, &mut env)?
    };

    Ok(results)
}

/// Returns the results of every top-level expression of `source`.
///
/// Anything the program prints is discarded.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use funk::{ast::Expr, get_result};
///
/// let results = get_result("(function add1 (x) (add x 1)) (add1 5)").unwrap();
/// assert_eq!(results.last(), Some(&Expr::Number(6)));
///
/// // `y` is never defined.
/// assert!(get_result("(add y 1)").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Vec<Expr>, Box<dyn Error>> {
    let mut context = Context::with_output(Box::new(io::sink()));
    run_sources(&[source], &mut context, false)
}
