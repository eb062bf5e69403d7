use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,   // !
    Tilde, // ~
}

impl UnaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<UnaryOp> {
        match kind {
            TokenKind::Not => Some(UnaryOp::Not),
            TokenKind::Tilde => Some(UnaryOp::Tilde),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Tilde => "~",
        }
    }
}

/// Infix operators, assignment included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Assign,
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Equals,
    NotEquals,
    Greater,
    GreaterEquals,
    LessEquals,
    Less,
    ShiftLeft,
    ShiftRight,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<BinaryOp> {
        let op = match kind {
            TokenKind::Assignment => BinaryOp::Assign,
            TokenKind::Or => BinaryOp::Or,
            TokenKind::And => BinaryOp::And,
            TokenKind::Pipe => BinaryOp::BitOr,
            TokenKind::Caret => BinaryOp::BitXor,
            TokenKind::Ampersand => BinaryOp::BitAnd,
            TokenKind::Equals => BinaryOp::Equals,
            TokenKind::NotEquals => BinaryOp::NotEquals,
            TokenKind::Greater => BinaryOp::Greater,
            TokenKind::GreaterEquals => BinaryOp::GreaterEquals,
            TokenKind::LessEquals => BinaryOp::LessEquals,
            TokenKind::Less => BinaryOp::Less,
            TokenKind::ShiftLeft => BinaryOp::ShiftLeft,
            TokenKind::ShiftRight => BinaryOp::ShiftRight,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Dash => BinaryOp::Subtract,
            TokenKind::Star => BinaryOp::Multiply,
            TokenKind::Slash => BinaryOp::Divide,
            TokenKind::Percent => BinaryOp::Modulo,
            _ => return None,
        };

        Some(op)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Assign => ":=",
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::Equals => "=",
            BinaryOp::NotEquals => "!=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEquals => ">=",
            BinaryOp::LessEquals => "<=",
            BinaryOp::Less => "<",
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
        }
    }
}

// LITERALS

/// Literal values. Integer literals keep their digit run (without the
/// `0x`/`0b` prefix) so no width is assumed at this stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    /// Decoded text: `\"` and `\\` are unescaped.
    String(String),
    Char(char),
    Hex(String),
    Binary(String),
    Decimal(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Bool(value) => write!(f, "{}", value),
            Literal::String(value) => {
                write!(f, "\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
            }
            Literal::Char(value) => write!(f, "'{}'", value),
            Literal::Hex(digits) => write!(f, "0x{}", digits),
            Literal::Binary(digits) => write!(f, "0b{}", digits),
            Literal::Decimal(digits) => write!(f, "{}", digits),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Literal,
    pub span: Span,
}

/// Symbol Expression
/// Represents an identifier in the AST. This includes functions.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: UnaryOp,
    pub right_expr: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOp,
    pub right: Box<Expr>,
    pub span: Span,
}

/// A parenthesised expression, kept so the printer reproduces the grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub inner: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    /// Never empty.
    pub arguments: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    pub base: Box<Expr>,
    /// Never empty.
    pub arguments: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Unary(PrefixExpr),
    Binary(BinaryExpr),
    Paren(GroupingExpr),
    Call(CallExpr),
    Index(IndexExpr),
    Identifier(SymbolExpr),
    Literal(LiteralExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Unary(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Paren(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
            Expr::Index(expr) => &expr.span,
            Expr::Identifier(expr) => &expr.span,
            Expr::Literal(expr) => &expr.span,
        }
    }
}

fn write_list(f: &mut std::fmt::Formatter<'_>, items: &[Expr]) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

// Parenthesised groups are explicit nodes, so printing never needs to add
// parentheses to reproduce a parsed tree.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Unary(expr) => write!(f, "{}{}", expr.operator.symbol(), expr.right_expr),
            Expr::Binary(expr) => {
                write!(f, "{} {} {}", expr.left, expr.operator.symbol(), expr.right)
            }
            Expr::Paren(expr) => write!(f, "({})", expr.inner),
            Expr::Call(expr) => {
                write!(f, "{}(", expr.callee)?;
                write_list(f, &expr.arguments)?;
                write!(f, ")")
            }
            Expr::Index(expr) => {
                write!(f, "{}[", expr.base)?;
                write_list(f, &expr.arguments)?;
                write!(f, "]")
            }
            Expr::Identifier(expr) => write!(f, "{}", expr.value),
            Expr::Literal(expr) => write!(f, "{}", expr.value),
        }
    }
}
