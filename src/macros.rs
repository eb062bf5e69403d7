//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed-text tokens
//! - `MK_DEFAULT_PATTERN!` - Creates a complete pattern entry for a fixed-text token
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::DecimalLiteral, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a handler for tokens whose lexeme is fixed text.
///
/// The generated handler emits a token of the given kind spanning the
/// matched text and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| -> Result<Option<Token>, Error> {
            let token = MK_TOKEN!($kind, String::from(matched), lexer.span_of(matched.len()));
            lexer.advance_n(matched.len());
            Ok(Some(token))
        }
    };
}

/// Creates an anchored pattern entry for a fixed-text token.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal text, escaped before it is compiled
///
/// # Example
///
/// ```ignore
/// MK_DEFAULT_PATTERN!(TokenKind::Assignment, ":=")
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_PATTERN {
    ($kind:expr, $value:literal) => {
        RegexPattern::new(
            &format!("^{}", regex::escape($value)),
            MK_DEFAULT_HANDLER!($kind),
        )
    };
}
