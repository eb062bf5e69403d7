use crate::{
    ast::expressions::{
        BinaryExpr, BinaryOp, CallExpr, Expr, GroupingExpr, IndexExpr, Literal, LiteralExpr,
        PrefixExpr, SymbolExpr, UnaryOp,
    },
    errors::errors::{Error, ParseError},
    lexer::{lexer::unescape_string, tokens::TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression whose operators bind at least as tightly as `bp`.
///
/// Each call is one level of nesting; see [`Parser::enter_nesting`].
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let depth = parser.enter_nesting()?;
    let result = parse_expr_unguarded(parser, bp);
    parser.restore_nesting(depth);
    result
}

fn parse_expr_unguarded(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected("expression"));
    };

    let mut left = nud(parser)?;

    // Keep folding while the next operator binds at least as tightly as `bp`.
    // Binary handlers recurse with their own power, so equal powers nest to
    // the right.
    loop {
        let token_kind = parser.current_token_kind();
        let Some(token_bp) = parser.get_bp_lookup().get(&token_kind).copied() else {
            break;
        };
        if token_bp < bp {
            break;
        }
        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let kind = parser.current_token_kind();
    let value = match kind {
        TokenKind::Identifier => {
            let token = parser.advance()?;
            return Ok(Expr::Identifier(SymbolExpr {
                value: token.value,
                span: token.span,
            }));
        }
        TokenKind::True => Literal::Bool(true),
        TokenKind::False => Literal::Bool(false),
        TokenKind::StringLiteral => Literal::String(unescape_string(&parser.current_token().value)),
        TokenKind::CharLiteral => {
            let lexeme = &parser.current_token().value;
            match lexeme.chars().nth(1) {
                Some(ch) => Literal::Char(ch),
                None => return Err(parser.unexpected("character literal")),
            }
        }
        TokenKind::HexLiteral => Literal::Hex(parser.current_token().value[2..].to_string()),
        TokenKind::BinaryLiteral => Literal::Binary(parser.current_token().value[2..].to_string()),
        TokenKind::DecimalLiteral => Literal::Decimal(parser.current_token().value.clone()),
        _ => return Err(parser.unexpected("expression")),
    };

    let span = parser.advance()?.span;
    Ok(Expr::Literal(LiteralExpr { value, span }))
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let Some(operator) = BinaryOp::from_token_kind(parser.current_token_kind()) else {
        return Err(parser.unexpected("binary operator"));
    };
    parser.advance()?;

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        span: left.get_span().to(right.get_span()),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let Some(operator) = UnaryOp::from_token_kind(parser.current_token_kind()) else {
        return Err(parser.unexpected("`!` or `~`"));
    };
    let operator_token = parser.advance()?;

    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(PrefixExpr {
        span: operator_token.span.to(rhs.get_span()),
        operator,
        right_expr: Box::new(rhs),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let open = parser.expect(TokenKind::OpenParen)?;
    let inner = parse_expr(parser, BindingPower::Default)?;
    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Paren(GroupingExpr {
        inner: Box::new(inner),
        span: open.span.to(&close.span),
    }))
}

fn invalid_list(parser: &Parser) -> Error {
    Error::new(
        ParseError::InvalidListExpr {
            found: parser.current_token().to_string(),
        },
        parser.get_position(),
    )
}

/// One or more comma-separated expressions up to (not including) `closing`.
/// An empty list or a trailing comma is an `InvalidListExpr`.
pub fn parse_list_expr(parser: &mut Parser, closing: TokenKind) -> Result<Vec<Expr>, Error> {
    if parser.current_token_kind() == closing {
        return Err(invalid_list(parser));
    }

    let mut items = vec![parse_expr(parser, BindingPower::Default)?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance()?;
        if parser.current_token_kind() == closing {
            return Err(invalid_list(parser));
        }
        items.push(parse_expr(parser, BindingPower::Default)?);
    }

    Ok(items)
}

/// Postfix links deepen the tree without recursing, so each one takes a
/// nesting level that the enclosing `parse_expr` gives back.
pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    parser.expect(TokenKind::OpenParen)?;
    let arguments = parse_list_expr(parser, TokenKind::CloseParen)?;
    let close = parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        span: left.get_span().to(&close.span),
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    parser.expect(TokenKind::OpenBracket)?;
    let arguments = parse_list_expr(parser, TokenKind::CloseBracket)?;
    let close = parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::Index(IndexExpr {
        span: left.get_span().to(&close.span),
        base: Box::new(left),
        arguments,
    }))
}
