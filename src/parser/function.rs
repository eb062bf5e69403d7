use crate::{
    ast::ast::{ArgDef, Body, FunctionDef, VarGroup},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Span,
};

use super::{parser::Parser, stmt::parse_block, types::parse_type};

/// `method name(args) [: type]` followed by `;` (declaration only) or a body.
pub fn parse_function_def(parser: &mut Parser) -> Result<FunctionDef, Error> {
    let start = parser.expect(TokenKind::Method)?.span;
    let name_token = parser.expect(TokenKind::Identifier)?;

    parser.expect(TokenKind::OpenParen)?;

    let mut args = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        args.push(parse_arg_def(parser)?);
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance()?;
            args.push(parse_arg_def(parser)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance()?;
        Some(parse_type(parser)?)
    } else {
        None
    };

    // The token after the signature decides between a declaration and a body.
    let (body, end) = match parser.current_token_kind() {
        TokenKind::Semicolon => (None, parser.advance()?.span),
        TokenKind::Var | TokenKind::Begin => {
            let body = parse_body(parser)?;
            let end = body.span;
            (Some(body), end)
        }
        _ => return Err(parser.unexpected("`;`, `var` or `begin`")),
    };

    Ok(FunctionDef {
        name: name_token.value,
        name_span: name_token.span,
        args,
        return_type,
        body,
        span: start.to(&end),
    })
}

pub fn parse_arg_def(parser: &mut Parser) -> Result<ArgDef, Error> {
    let token = parser.expect(TokenKind::Identifier)?;

    let type_ref = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance()?;
        Some(parse_type(parser)?)
    } else {
        None
    };

    let span = match &type_ref {
        Some(type_ref) => token.span.to(type_ref.get_span()),
        None => token.span,
    };

    Ok(ArgDef {
        name: token.value,
        name_span: token.span,
        type_ref,
        span,
    })
}

/// `[var group*] begin ... end;`
pub fn parse_body(parser: &mut Parser) -> Result<Body, Error> {
    let start = parser.get_position();

    let mut vars = Vec::new();
    if parser.current_token_kind() == TokenKind::Var {
        parser.advance()?;
        while parser.current_token_kind() == TokenKind::Identifier {
            vars.push(parse_var_group(parser)?);
        }
    }

    let block = parse_block(parser)?;

    Ok(Body {
        vars,
        span: Span {
            start,
            end: block.span.end,
        },
        block,
    })
}

/// `a, b, c [: type];`
pub fn parse_var_group(parser: &mut Parser) -> Result<VarGroup, Error> {
    let first = parser.expect(TokenKind::Identifier)?;
    let start = first.span;

    let mut names = vec![first.value];
    let mut name_spans = vec![first.span];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance()?;
        let name = parser.expect(TokenKind::Identifier)?;
        names.push(name.value);
        name_spans.push(name.span);
    }

    let type_ref = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance()?;
        Some(parse_type(parser)?)
    } else {
        None
    };

    let terminator = parser.expect(TokenKind::Semicolon)?;

    Ok(VarGroup {
        names,
        name_spans,
        type_ref,
        span: start.to(&terminator.span),
    })
}
