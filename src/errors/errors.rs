use thiserror::Error;

use crate::{get_line_at_position, Position};

/// A lex or parse failure together with the byte position it was found at.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: impl Into<ErrorImpl>, position: Position) -> Self {
        Error {
            internal_error: error_impl.into(),
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_lex_error(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::Lex(_))
    }

    /// 1-based line and column (in characters) of the error inside `source`.
    pub fn line_column(&self, source: &str) -> (usize, usize) {
        let (line, text, offset) = get_line_at_position(source, self.position.0);
        let column = text.get(..offset).map_or(offset, |prefix| prefix.chars().count()) + 1;
        (line, column)
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::Lex(LexError::UnterminatedString) => "UnterminatedString",
            ErrorImpl::Lex(LexError::UnterminatedChar) => "UnterminatedChar",
            ErrorImpl::Lex(LexError::InvalidCharLiteral { .. }) => "InvalidCharLiteral",
            ErrorImpl::Lex(LexError::UnknownCharacter { .. }) => "UnknownCharacter",
            ErrorImpl::Parse(ParseError::ExpectedToken { .. }) => "ExpectedToken",
            ErrorImpl::Parse(ParseError::UnexpectedEndOfInput { .. }) => "UnexpectedEndOfInput",
            ErrorImpl::Parse(ParseError::InvalidListExpr { .. }) => "InvalidListExpr",
            ErrorImpl::Parse(ParseError::NestingTooDeep { .. }) => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::Lex(LexError::UnterminatedString) => {
                ErrorTip::Suggestion(String::from("add a closing `\"` to end the string"))
            }
            ErrorImpl::Lex(LexError::UnterminatedChar) => {
                ErrorTip::Suggestion(String::from("add a closing `'` to end the character"))
            }
            ErrorImpl::Lex(LexError::InvalidCharLiteral { .. }) => ErrorTip::Suggestion(
                String::from("character literals hold exactly one character, use a string instead"),
            ),
            ErrorImpl::Lex(LexError::UnknownCharacter { .. }) => ErrorTip::None,
            ErrorImpl::Parse(ParseError::ExpectedToken { expected, .. }) if expected == "`;`" => {
                ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
            }
            ErrorImpl::Parse(ParseError::ExpectedToken { .. }) => ErrorTip::None,
            ErrorImpl::Parse(ParseError::UnexpectedEndOfInput { .. }) => ErrorTip::Suggestion(
                String::from("the file ended early, is a block missing its `end;`?"),
            ),
            ErrorImpl::Parse(ParseError::InvalidListExpr { .. }) => ErrorTip::Suggestion(
                String::from("argument and index lists need at least one expression and no trailing comma"),
            ),
            ErrorImpl::Parse(ParseError::NestingTooDeep { .. }) => ErrorTip::Suggestion(
                String::from("split the construct up, for example with a temporary variable"),
            ),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl std::fmt::Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Malformed literals and characters outside the language's alphabet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated character literal")]
    UnterminatedChar,
    #[error("invalid character literal {literal}")]
    InvalidCharLiteral { literal: String },
    #[error("unknown character {character:?}")]
    UnknownCharacter { character: char },
}

/// Token sequences the grammar does not accept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    ExpectedToken { expected: String, found: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: String },
    #[error("expected an expression in the list, found {found}")]
    InvalidListExpr { found: String },
    #[error("nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}
