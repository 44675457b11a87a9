use crate::{
    ast::{Expr, FunctionDef},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            utils::{is_function_keyword, is_parenthesized, parse_inner},
        },
    },
};

/// Matches a function definition.
///
/// Grammar: `function := "(" "function" symbol "(" symbol* ")" expression ")"`
///
/// The shortest definition, one parameter-less function with a single-token
/// body, takes seven tokens. The tokens between the parameter list and the
/// final `)` must form exactly one expression; otherwise the window is
/// rejected and keeps growing.
///
/// # Errors
/// [`ParseError::InvalidFunctionDefinition`] if the name is not a symbol,
/// the parameter list does not open with `(`, or it contains anything but
/// symbols. No longer window could fix these, so they are not retried.
pub(in crate::interpreter::parser) fn match_function(window: &[Token])
                                                     -> ParseResult<Option<Expr>> {
    if !is_parenthesized(window, 7) || !is_function_keyword(&window[1]) {
        return Ok(None);
    }

    let line = window[0].line;
    let invalid = || ParseError::InvalidFunctionDefinition { line };

    let name = &window[2];
    if !name.is(TokenKind::Symbol) || !window[3].is(TokenKind::OpenParen) {
        return Err(invalid());
    }

    let last = window.len() - 1;
    let mut parameters = Vec::new();
    let mut index = 4;
    loop {
        // Ran into the window's own closing parenthesis: the window is too
        // short to hold the parameter list and a body.
        if index >= last {
            return Ok(None);
        }
        let token = &window[index];
        match token.kind {
            TokenKind::CloseParen => break,
            TokenKind::Symbol => parameters.push(token.text.clone()),
            _ => return Err(invalid()),
        }
        index += 1;
    }

    let Some(mut body) = parse_inner(&window[index + 1..last])? else {
        return Ok(None);
    };
    if body.len() != 1 {
        return Ok(None);
    }

    Ok(body.pop().map(|body| {
                     Expr::from(FunctionDef { name: name.text.clone(),
                                              parameters,
                                              body })
                 }))
}
