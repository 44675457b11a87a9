use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_all},
    },
};

/// The keyword that introduces a function definition.
pub const FUNCTION_KEYWORD: &str = "function";

/// Matches a window holding exactly one number token.
///
/// # Errors
/// Returns [`ParseError::InvalidNumber`] if the token is not a valid `i32`,
/// such as a lone `-` or an out-of-range literal. This error is never
/// retried.
pub(in crate::interpreter::parser) fn match_number(window: &[Token]) -> ParseResult<Option<Expr>> {
    let [token] = window else {
        return Ok(None);
    };
    if !token.is(TokenKind::Number) {
        return Ok(None);
    }

    token.text
         .parse::<i32>()
         .map(|value| Some(Expr::Number(value)))
         .map_err(|_| ParseError::InvalidNumber { text: token.text.clone(),
                                                  line: token.line, })
}

/// Matches a window holding exactly one symbol token.
pub(in crate::interpreter::parser) fn match_symbol(window: &[Token]) -> Option<Expr> {
    match window {
        [token] if token.is(TokenKind::Symbol) => Some(Expr::Symbol(token.text.clone())),
        _ => None,
    }
}

/// Whether the window starts with `(`, ends with `)` and has at least
/// `min_len` tokens.
pub(in crate::interpreter::parser) fn is_parenthesized(window: &[Token], min_len: usize) -> bool {
    window.len() >= min_len
    && window.first().is_some_and(|t| t.is(TokenKind::OpenParen))
    && window.last().is_some_and(|t| t.is(TokenKind::CloseParen))
}

/// Whether a token is the `function` keyword.
pub(in crate::interpreter::parser) fn is_function_keyword(token: &Token) -> bool {
    token.is(TokenKind::Symbol) && token.text == FUNCTION_KEYWORD
}

/// Parses a sub-range as a sequence of complete expressions.
///
/// Returns `Ok(None)` if the range cannot be consumed exactly, so that the
/// enclosing window is rejected and keeps growing. Errors that growing the
/// window cannot fix are passed through.
pub(in crate::interpreter::parser) fn parse_inner(tokens: &[Token])
                                                  -> ParseResult<Option<Vec<Expr>>> {
    match parse_all(tokens) {
        Ok(exprs) => Ok(Some(exprs)),
        Err(e) if is_retryable(&e) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Errors that only mean "this window does not match".
const fn is_retryable(error: &ParseError) -> bool {
    matches!(error,
             ParseError::UnexpectedToken { .. } | ParseError::UnexpectedEndOfSource { .. })
}
