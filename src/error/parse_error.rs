#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// The tokenizer met a character that cannot start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// No expression can start with this token.
    UnexpectedToken {
        /// The token encountered, in its display form.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The token stream ran out before an expression was complete.
    UnexpectedEndOfSource {
        /// The line of the token the unfinished expression started on.
        line: usize,
    },
    /// A number token that is not a valid 32-bit integer, such as a lone `-`.
    InvalidNumber {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function definition listed something other than a symbol as a
    /// parameter.
    InvalidFunctionDefinition {
        /// The source line where the error occurred.
        line: usize,
    },
    /// All sources together produced no tokens.
    EmptyProgram,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "Error on line {line}: Unexpected character: \"{character}\".")
            },
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
            Self::UnexpectedEndOfSource { line } => write!(f,
                                                           "Error on line {line}: Unexpected end of source code."),
            Self::InvalidNumber { text, line } => {
                write!(f, "Error on line {line}: Invalid number literal \"{text}\".")
            },
            Self::InvalidFunctionDefinition { line } => write!(f,
                                                               "Error on line {line}: Invalid function definition syntax. Example: (function square (x) (mul x x))"),
            Self::EmptyProgram => write!(f, "The program contains no expressions."),
        }
    }
}

impl std::error::Error for ParseError {}
