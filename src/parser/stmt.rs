use crate::{
    ast::statements::{BlockStmt, BreakStmt, DoUntilStmt, ExpressionStmt, IfStmt, Stmt, WhileStmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let depth = parser.enter_nesting()?;
    let result = parse_stmt_unguarded(parser);
    parser.restore_nesting(depth);
    result
}

fn parse_stmt_unguarded(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return handler(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default)?;
    let terminator = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: expr.get_span().to(&terminator.span),
        expression: expr,
    }))
}

/// `if cond then stmt [else stmt]`
///
/// An `else` directly after the then-branch is always taken here, so it
/// attaches to the innermost open `if`.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::If)?.span;

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Then)?;
    let then_body = parse_stmt(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance()?;
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    let end = else_body.as_deref().unwrap_or(&then_body).get_span();

    Ok(Stmt::If(IfStmt {
        span: start.to(end),
        condition,
        then_body: Box::new(then_body),
        else_body,
    }))
}

/// `begin stmt* end;`
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::Begin)?.span;

    let mut statements = Vec::new();
    while !matches!(parser.current_token_kind(), TokenKind::End | TokenKind::EOF) {
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::End)?;
    let terminator = parser.expect(TokenKind::Semicolon)?;

    Ok(BlockStmt {
        body: statements,
        span: start.to(&terminator.span),
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// `while cond do stmt`
pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::While)?.span;

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Do)?;
    let body = parse_stmt(parser)?;

    Ok(Stmt::While(WhileStmt {
        span: start.to(body.get_span()),
        condition,
        body: Box::new(body),
    }))
}

/// `repeat stmt while cond;` or `repeat stmt until cond;`
pub fn parse_repeat_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Repeat)?.span;

    let body = parse_stmt(parser)?;

    let negate = match parser.current_token_kind() {
        TokenKind::Until => true,
        TokenKind::While => false,
        _ => return Err(parser.unexpected("`while` or `until`")),
    };
    parser.advance()?;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let terminator = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::DoUntil(DoUntilStmt {
        body: Box::new(body),
        negate,
        condition,
        span: start.to(&terminator.span),
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::Break)?.span;
    let terminator = parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Break(BreakStmt {
        span: start.to(&terminator.span),
    }))
}
