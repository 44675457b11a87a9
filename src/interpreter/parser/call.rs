use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            utils::{is_function_keyword, is_parenthesized, parse_inner},
        },
    },
};

/// Matches a call expression.
///
/// Grammar: `call := "(" expression expression* ")"`
///
/// The first inner expression is the callee and may be any expression, not
/// only a symbol. The remaining inner expressions are the arguments. A
/// window whose second token is the `function` keyword is left to the
/// function definition grammar.
///
/// # Returns
/// `Ok(None)` if the window is not a complete call.
pub(in crate::interpreter::parser) fn match_call(window: &[Token]) -> ParseResult<Option<Expr>> {
    if !is_parenthesized(window, 3) || is_function_keyword(&window[1]) {
        return Ok(None);
    }

    let Some(inner) = parse_inner(&window[1..window.len() - 1])? else {
        return Ok(None);
    };

    let mut inner = inner.into_iter();
    let Some(callee) = inner.next() else {
        return Ok(None);
    };

    Ok(Some(Expr::Call { callee:    Box::new(callee),
                         arguments: inner.collect(), }))
}
