use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, LexError},
    Position, Span, MK_DEFAULT_HANDLER, MK_DEFAULT_PATTERN, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Consumes the text matched by a pattern. Returns `Ok(None)` for trivia
/// (whitespace, comments) and `Err` for malformed input.
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            // The table is fixed at compile time; a bad pattern is a bug.
            regex: Regex::new(pattern).expect("invalid lexer pattern"),
            handler,
        }
    }
}

lazy_static! {
    /// Tried in order; the first pattern matching at the cursor wins, so
    /// two-character operators come before their one-character prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new(r"^\s+", skip_handler),
        RegexPattern::new(r"^//[^\n]*", skip_handler),
        RegexPattern::new(r"^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new(r"^0[xX][0-9A-Fa-f]+", number_handler),
        RegexPattern::new(r"^0[bB][01]+", number_handler),
        RegexPattern::new(r"^[0-9]+", number_handler),
        RegexPattern::new(r#"^"(?s:[^"\\]|\\.)*""#, string_handler),
        RegexPattern::new(r#"^""#, unterminated_string_handler),
        RegexPattern::new(r"^'[^']'", char_handler),
        RegexPattern::new(r"^'[^'\n]*'", invalid_char_handler),
        RegexPattern::new(r"^'", unterminated_char_handler),
        MK_DEFAULT_PATTERN!(TokenKind::Assignment, ":="),
        MK_DEFAULT_PATTERN!(TokenKind::And, "&&"),
        MK_DEFAULT_PATTERN!(TokenKind::Or, "||"),
        MK_DEFAULT_PATTERN!(TokenKind::EqualsEquals, "=="),
        MK_DEFAULT_PATTERN!(TokenKind::NotEquals, "!="),
        MK_DEFAULT_PATTERN!(TokenKind::LessEquals, "<="),
        MK_DEFAULT_PATTERN!(TokenKind::GreaterEquals, ">="),
        MK_DEFAULT_PATTERN!(TokenKind::ShiftLeft, "<<"),
        MK_DEFAULT_PATTERN!(TokenKind::ShiftRight, ">>"),
        MK_DEFAULT_PATTERN!(TokenKind::OpenBracket, "["),
        MK_DEFAULT_PATTERN!(TokenKind::CloseBracket, "]"),
        MK_DEFAULT_PATTERN!(TokenKind::OpenParen, "("),
        MK_DEFAULT_PATTERN!(TokenKind::CloseParen, ")"),
        MK_DEFAULT_PATTERN!(TokenKind::Comma, ","),
        MK_DEFAULT_PATTERN!(TokenKind::Semicolon, ";"),
        MK_DEFAULT_PATTERN!(TokenKind::Colon, ":"),
        MK_DEFAULT_PATTERN!(TokenKind::Pipe, "|"),
        MK_DEFAULT_PATTERN!(TokenKind::Caret, "^"),
        MK_DEFAULT_PATTERN!(TokenKind::Ampersand, "&"),
        MK_DEFAULT_PATTERN!(TokenKind::Equals, "="),
        MK_DEFAULT_PATTERN!(TokenKind::Not, "!"),
        MK_DEFAULT_PATTERN!(TokenKind::Less, "<"),
        MK_DEFAULT_PATTERN!(TokenKind::Greater, ">"),
        MK_DEFAULT_PATTERN!(TokenKind::Plus, "+"),
        MK_DEFAULT_PATTERN!(TokenKind::Dash, "-"),
        MK_DEFAULT_PATTERN!(TokenKind::Star, "*"),
        MK_DEFAULT_PATTERN!(TokenKind::Slash, "/"),
        MK_DEFAULT_PATTERN!(TokenKind::Percent, "%"),
        MK_DEFAULT_PATTERN!(TokenKind::Tilde, "~"),
    ];
}

/// Single forward pass over a source buffer.
///
/// The lexer is pulled one token at a time, either through
/// [`Lexer::next_token`] or as an iterator. After the end-of-input token or
/// the first error the iterator is exhausted.
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer {
            source,
            pos: 0,
            finished: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn get_position(&self) -> Position {
        Position(self.pos)
    }

    /// Span of the next `len` bytes starting at the cursor.
    pub fn span_of(&self, len: usize) -> Span {
        Span::new(self.pos, self.pos + len)
    }

    /// Produces the next token, skipping trivia. Keeps returning `EOF` once
    /// the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            if self.at_eof() {
                return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), self.span_of(0)));
            }

            let remaining = self.remainder();
            let pattern = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.as_str())));

            let Some((handler, matched)) = pattern else {
                let character = remaining.chars().next().unwrap_or_default();
                return Err(Error::new(LexError::UnknownCharacter { character }, self.get_position()));
            };

            if let Some(token) = handler(self, matched)? {
                trace!(kind = ?token.kind, start = token.span.start.0, "token");
                return Ok(token);
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.kind != TokenKind::EOF => {}
            _ => self.finished = true,
        }

        Some(result)
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let kind = match matched.as_bytes().get(1) {
        Some(b'x' | b'X') => TokenKind::HexLiteral,
        Some(b'b' | b'B') => TokenKind::BinaryLiteral,
        _ => TokenKind::DecimalLiteral,
    };

    let token = MK_TOKEN!(kind, String::from(matched), lexer.span_of(matched.len()));
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    lexer.advance_n(matched.len());
    Ok(None)
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let token = MK_TOKEN!(TokenKind::StringLiteral, String::from(matched), lexer.span_of(matched.len()));
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

fn unterminated_string_handler(lexer: &mut Lexer, _matched: &str) -> Result<Option<Token>, Error> {
    Err(Error::new(LexError::UnterminatedString, lexer.get_position()))
}

fn char_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let token = MK_TOKEN!(TokenKind::CharLiteral, String::from(matched), lexer.span_of(matched.len()));
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

fn invalid_char_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    Err(Error::new(
        LexError::InvalidCharLiteral {
            literal: String::from(matched),
        },
        lexer.get_position(),
    ))
}

fn unterminated_char_handler(lexer: &mut Lexer, _matched: &str) -> Result<Option<Token>, Error> {
    Err(Error::new(LexError::UnterminatedChar, lexer.get_position()))
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let token = MK_TOKEN!(kind, String::from(matched), lexer.span_of(matched.len()));
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

/// Decodes the body of a string lexeme: `\"` and `\\` become the escaped
/// character, any other backslash sequence is kept as written.
pub fn unescape_string(lexeme: &str) -> String {
    let body = lexeme
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(lexeme);

    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some(&next_ch @ ('"' | '\\')) => {
                    result.push(next_ch);
                    chars.next();
                }
                _ => result.push(ch), // Keep the backslash
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Creates a lazy token stream over `source`.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}
