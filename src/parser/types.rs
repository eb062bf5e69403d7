//! Type parsing implementation.
//!
//! This module handles parsing of type annotations. It supports:
//!
//! - Builtin types (reserved words)
//! - Custom types (identifiers)
//! - Array types with any number of dimensions
//!
//! Like expressions, types are dispatched through a NUD lookup table keyed
//! by the first token of the type.

use std::collections::HashMap;

use crate::{
    ast::types::{ArrayType, BuiltinType, SymbolType, TypeRef},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<TypeRef, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
///
/// # Arguments
///
/// * `parser` - Mutable reference to the parser to initialize
pub fn create_token_type_lookups(parser: &mut Parser) {
    for kind in [
        TokenKind::Bool,
        TokenKind::Byte,
        TokenKind::Int,
        TokenKind::Uint,
        TokenKind::Long,
        TokenKind::Ulong,
        TokenKind::Char,
        TokenKind::String,
    ] {
        parser.type_nud(kind, parse_builtin_type);
    }
    parser.type_nud(TokenKind::Array, parse_array_type);
    parser.type_nud(TokenKind::Identifier, parse_symbol_type);
}

pub fn parse_builtin_type(parser: &mut Parser) -> Result<TypeRef, Error> {
    let Some(builtin) = BuiltinType::from_token_kind(parser.current_token_kind()) else {
        return Err(parser.unexpected("type"));
    };
    let token = parser.advance()?;

    Ok(TypeRef::Builtin(builtin, token.span))
}

pub fn parse_symbol_type(parser: &mut Parser) -> Result<TypeRef, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    Ok(TypeRef::Custom(SymbolType {
        name: token.value,
        span: token.span,
    }))
}

/// `array [ ,* ] of T`. Each comma adds a dimension.
pub fn parse_array_type(parser: &mut Parser) -> Result<TypeRef, Error> {
    let start = parser.expect(TokenKind::Array)?.span;
    parser.expect(TokenKind::OpenBracket)?;

    let mut separators = 0;
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance()?;
        separators += 1;
    }

    parser.expect(TokenKind::CloseBracket)?;
    parser.expect(TokenKind::Of)?;
    let element = parse_type(parser)?;

    Ok(TypeRef::Array(ArrayType {
        dimensions: separators + 1,
        span: start.to(element.get_span()),
        element: Box::new(element),
    }))
}

pub fn parse_type(parser: &mut Parser) -> Result<TypeRef, Error> {
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_type_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected("type"));
    };

    let depth = parser.enter_nesting()?;
    let result = nud(parser);
    parser.restore_nesting(depth);
    result
}
