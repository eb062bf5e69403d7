use std::{
    fmt::{self, Display, Formatter},
    slice::Iter,
};

use crate::Span;

use super::expressions::Expr;

const INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

/// `if cond then stmt [else stmt]`. An `else` always belongs to the
/// innermost `if` still waiting for one.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub span: Span,
}

/// Pre-test loop: `while cond do stmt`.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

/// Post-test loop: `repeat stmt while cond;` or `repeat stmt until cond;`.
#[derive(Debug, Clone, PartialEq)]
pub struct DoUntilStmt {
    pub body: Box<Stmt>,
    /// `true` for `until`: the loop runs while `condition` is false.
    pub negate: bool,
    pub condition: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    If(IfStmt),
    Block(BlockStmt),
    While(WhileStmt),
    DoUntil(DoUntilStmt),
    Break(BreakStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::If(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
            Stmt::While(stmt) => &stmt.span,
            Stmt::DoUntil(stmt) => &stmt.span,
            Stmt::Break(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
        }
    }

    /// Writes the statement on its own line(s), nested bodies one level deeper.
    pub fn fmt_indented(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = INDENT.repeat(depth);

        match self {
            Stmt::If(stmt) => {
                writeln!(f, "{}if {} then", pad, stmt.condition)?;
                stmt.then_body.fmt_indented(f, depth + 1)?;
                if let Some(else_body) = &stmt.else_body {
                    writeln!(f, "{}else", pad)?;
                    else_body.fmt_indented(f, depth + 1)?;
                }
                Ok(())
            }
            Stmt::Block(block) => block.fmt_indented(f, depth),
            Stmt::While(stmt) => {
                writeln!(f, "{}while {} do", pad, stmt.condition)?;
                stmt.body.fmt_indented(f, depth + 1)
            }
            Stmt::DoUntil(stmt) => {
                writeln!(f, "{}repeat", pad)?;
                stmt.body.fmt_indented(f, depth + 1)?;
                let keyword = if stmt.negate { "until" } else { "while" };
                writeln!(f, "{}{} {};", pad, keyword, stmt.condition)
            }
            Stmt::Break(_) => writeln!(f, "{}break;", pad),
            Stmt::Expression(stmt) => writeln!(f, "{}{};", pad, stmt.expression),
        }
    }
}

impl BlockStmt {
    pub fn fmt_indented(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = INDENT.repeat(depth);

        writeln!(f, "{}begin", pad)?;
        for stmt in self.iter() {
            stmt.fmt_indented(f, depth + 1)?;
        }
        writeln!(f, "{}end;", pad)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
