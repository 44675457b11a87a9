use log::{debug, trace};

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            call::match_call,
            function::match_function,
            utils::{match_number, match_symbol},
        },
    },
    util::cursor::Cursor,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// # Errors
/// [`ParseError::EmptyProgram`] if there are no tokens at all, otherwise any
/// error from [`parse_all`].
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyProgram);
    }

    let expressions = parse_all(tokens)?;
    debug!("parsed {} top-level expression(s) from {} tokens",
           expressions.len(),
           tokens.len());

    Ok(Program::new(expressions))
}

/// Parses a token sequence into consecutive complete expressions.
///
/// Expressions are matched one after another until the tokens are used up.
/// There are no partial results: the first expression that cannot be
/// matched fails the whole sequence. An empty sequence yields no
/// expressions.
///
/// # Example
/// ```
/// use funk::{ast::Expr,
///            interpreter::{lexer::tokenize, parser::core::parse_all}};
///
/// let tokens = tokenize("(add 1 2) 7").unwrap();
/// let exprs = parse_all(&tokens).unwrap();
///
/// assert_eq!(exprs.len(), 2);
/// assert_eq!(exprs[1], Expr::Number(7));
/// ```
pub fn parse_all(tokens: &[Token]) -> ParseResult<Vec<Expr>> {
    let Ok(mut cursor) = Cursor::new(tokens) else {
        return Ok(Vec::new());
    };

    let mut exprs = Vec::new();
    loop {
        exprs.push(parse_expression(&mut cursor)?);
        if !cursor.move_next() {
            break;
        }
    }

    Ok(exprs)
}

/// Parses one expression starting at the cursor's current token.
///
/// The matcher does not descend through a grammar. It grows a window one
/// token at a time, starting with just the current token, and after each
/// step tries to match the whole window as a number, a symbol, a call or a
/// function definition, in that order. The first grammar that accepts the
/// window wins and the cursor is left on the window's last token.
///
/// The compound grammars parse the inside of their parentheses with
/// [`parse_all`], and reject the window if that fails. A closing parenthesis
/// that belongs to a nested form therefore just makes the window grow
/// further, until it ends on the parenthesis that balances the form.
///
/// # Errors
/// - [`ParseError::UnexpectedToken`] if the expression would start with `)`.
/// - [`ParseError::UnexpectedEndOfSource`] if no window up to the end of the
///   stream matches.
/// - Hard errors such as [`ParseError::InvalidNumber`] as soon as they occur.
pub fn parse_expression(cursor: &mut Cursor<'_, Token>) -> ParseResult<Expr> {
    let start = cursor.position();
    let first = cursor.current();

    loop {
        let window = cursor.span_from(start);
        trace!("matching window of {} token(s) from position {start}", window.len());

        if let Some(expr) = match_window(window)? {
            return Ok(expr);
        }
        if !cursor.move_next() {
            break;
        }
    }

    if first.is(TokenKind::CloseParen) {
        return Err(ParseError::UnexpectedToken { token: first.to_string(),
                                                 line:  first.line, });
    }
    Err(ParseError::UnexpectedEndOfSource { line: first.line })
}

/// Tries each grammar against the whole window, in priority order.
fn match_window(window: &[Token]) -> ParseResult<Option<Expr>> {
    if let Some(expr) = match_number(window)? {
        return Ok(Some(expr));
    }
    if let Some(expr) = match_symbol(window) {
        return Ok(Some(expr));
    }
    if let Some(expr) = match_call(window)? {
        return Ok(Some(expr));
    }
    match_function(window)
}
