use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Every reserved word of the language. Builtin type names are reserved
    /// too and can never be used as identifiers.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("method", TokenKind::Method);
        map.insert("var", TokenKind::Var);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("repeat", TokenKind::Repeat);
        map.insert("until", TokenKind::Until);
        map.insert("break", TokenKind::Break);
        map.insert("array", TokenKind::Array);
        map.insert("of", TokenKind::Of);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("bool", TokenKind::Bool);
        map.insert("byte", TokenKind::Byte);
        map.insert("int", TokenKind::Int);
        map.insert("uint", TokenKind::Uint);
        map.insert("long", TokenKind::Long);
        map.insert("ulong", TokenKind::Ulong);
        map.insert("char", TokenKind::Char);
        map.insert("string", TokenKind::String);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,

    // Literals
    StringLiteral,
    CharLiteral,
    HexLiteral,
    BinaryLiteral,
    DecimalLiteral,

    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    Comma,
    Semicolon,
    Colon,

    Assignment, // :=
    Or,         // ||
    And,        // &&
    Pipe,       // |
    Caret,      // ^
    Ampersand,  // &
    Equals,     // =
    EqualsEquals,
    NotEquals,

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    ShiftLeft,
    ShiftRight,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    Not,
    Tilde,

    // Reserved
    Method,
    Var,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,
    Repeat,
    Until,
    Break,
    Array,
    Of,
    True,
    False,

    // Builtin types
    Bool,
    Byte,
    Int,
    Uint,
    Long,
    Ulong,
    Char,
    String,
}

impl TokenKind {
    /// The fixed source text of the token, if it has one.
    pub fn text(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::EOF
            | TokenKind::Identifier
            | TokenKind::StringLiteral
            | TokenKind::CharLiteral
            | TokenKind::HexLiteral
            | TokenKind::BinaryLiteral
            | TokenKind::DecimalLiteral => return None,
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Assignment => ":=",
            TokenKind::Or => "||",
            TokenKind::And => "&&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Ampersand => "&",
            TokenKind::Equals => "=",
            TokenKind::EqualsEquals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::ShiftLeft => "<<",
            TokenKind::ShiftRight => ">>",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Not => "!",
            TokenKind::Tilde => "~",
            TokenKind::Method => "method",
            TokenKind::Var => "var",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Repeat => "repeat",
            TokenKind::Until => "until",
            TokenKind::Break => "break",
            TokenKind::Array => "array",
            TokenKind::Of => "of",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Bool => "bool",
            TokenKind::Byte => "byte",
            TokenKind::Int => "int",
            TokenKind::Uint => "uint",
            TokenKind::Long => "long",
            TokenKind::Ulong => "ulong",
            TokenKind::Char => "char",
            TokenKind::String => "string",
        };

        Some(text)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self, self.text()) {
            (_, Some(text)) => write!(f, "`{}`", text),
            (TokenKind::EOF, None) => write!(f, "end of input"),
            (TokenKind::Identifier, None) => write!(f, "identifier"),
            (TokenKind::StringLiteral, None) => write!(f, "string literal"),
            (TokenKind::CharLiteral, None) => write!(f, "character literal"),
            (TokenKind::HexLiteral, None) => write!(f, "hex literal"),
            (TokenKind::BinaryLiteral, None) => write!(f, "binary literal"),
            (_, None) => write!(f, "decimal literal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw lexeme as written in the source.
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.text().is_some() || self.kind == TokenKind::EOF {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} `{}`", self.kind, self.value)
        }
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// One line per token, as printed by the `--tokens` dump.
    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::StringLiteral,
            TokenKind::CharLiteral,
            TokenKind::HexLiteral,
            TokenKind::BinaryLiteral,
            TokenKind::DecimalLiteral,
        ]) {
            format!("{:?} ({}) @{}..{}", self.kind, self.value, self.span.start.0, self.span.end.0)
        } else {
            format!("{:?} () @{}..{}", self.kind, self.span.start.0, self.span.end.0)
        }
    }
}
