use std::fmt;

use log::debug;
use logos::Logos;

use crate::error::ParseError;

/// The kind of a lexical token.
///
/// The language has only four token kinds: the two parentheses, symbols and
/// number literals. Whitespace separates tokens and is otherwise ignored.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// A letter or `_`, followed by letters, digits or `_`, such as `add` or
    /// `greater_or_equal`.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Symbol,
    /// A digit or a leading `-`, followed by digits, such as `42` or `-7`.
    /// A lone `-` is also lexed as a number and rejected by the parser.
    #[regex(r"[0-9]+")]
    #[regex(r"-[0-9]*")]
    Number,
    /// Spaces, tabs and newlines.
    #[regex(r"\s+", |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
        logos::Skip
    })]
    Whitespace,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// A token produced by [`tokenize`].
///
/// Parentheses carry no text. Symbols and numbers carry their source slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The source text of symbols and numbers; empty for parentheses.
    pub text: String,
    /// The 1-based source line the token starts on.
    pub line: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               line }
    }

    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "Token({:?})", self.kind)
        } else {
            write!(f, "Token({:?}, \"{}\")", self.kind, self.text)
        }
    }
}

/// Splits source text into tokens.
///
/// Scanning is a single left-to-right pass. Empty input produces no tokens.
///
/// # Errors
/// Returns [`ParseError::UnexpectedCharacter`] on the first character that
/// cannot start a token.
///
/// # Example
/// ```
/// use funk::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("(add 1 -2)").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::OpenParen,
///             TokenKind::Symbol,
///             TokenKind::Number,
///             TokenKind::Number,
///             TokenKind::CloseParen]);
/// assert_eq!(tokens[3].text, "-2");
/// assert!(tokenize("(add 1 #)").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras::default());

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(kind @ (TokenKind::OpenParen | TokenKind::CloseParen)) => {
                tokens.push(Token::new(kind, String::new(), line));
            },
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(ParseError::UnexpectedCharacter { character, line });
            },
        }
    }

    debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}
