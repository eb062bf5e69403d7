//! Type references for the AST.
//!
//! This module defines the type annotations the parser records, including:
//!
//! - Builtin types (`bool`, `byte`, `int`, `uint`, `long`, `ulong`, `char`, `string`)
//! - Custom types, named by an identifier and left unresolved
//! - Array types with a dimension count and an element type
//!
//! Nothing here is checked: custom names are resolved, and types compared,
//! by later stages.

use std::fmt::Display;

use crate::{lexer::tokens::TokenKind, Span};

/// The primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    Bool,
    Byte,
    Int,
    Uint,
    Long,
    Ulong,
    Char,
    String,
}

impl BuiltinType {
    pub fn from_token_kind(kind: TokenKind) -> Option<BuiltinType> {
        match kind {
            TokenKind::Bool => Some(BuiltinType::Bool),
            TokenKind::Byte => Some(BuiltinType::Byte),
            TokenKind::Int => Some(BuiltinType::Int),
            TokenKind::Uint => Some(BuiltinType::Uint),
            TokenKind::Long => Some(BuiltinType::Long),
            TokenKind::Ulong => Some(BuiltinType::Ulong),
            TokenKind::Char => Some(BuiltinType::Char),
            TokenKind::String => Some(BuiltinType::String),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinType::Bool => "bool",
            BuiltinType::Byte => "byte",
            BuiltinType::Int => "int",
            BuiltinType::Uint => "uint",
            BuiltinType::Long => "long",
            BuiltinType::Ulong => "ulong",
            BuiltinType::Char => "char",
            BuiltinType::String => "string",
        }
    }
}

/// A user-named type. Only the name is recorded; nothing here checks that
/// it refers to anything.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolType {
    pub name: String,
    pub span: Span,
}

/// `array[,,] of T`: a three-dimensional array of `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    /// One more than the number of commas between the brackets.
    pub dimensions: usize,
    pub element: Box<TypeRef>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    Builtin(BuiltinType, Span),
    Custom(SymbolType),
    Array(ArrayType),
}

impl TypeRef {
    pub fn get_span(&self) -> &Span {
        match self {
            TypeRef::Builtin(_, span) => span,
            TypeRef::Custom(symbol) => &symbol.span,
            TypeRef::Array(array) => &array.span,
        }
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Builtin(builtin, _) => write!(f, "{}", builtin.name()),
            TypeRef::Custom(symbol) => write!(f, "{}", symbol.name),
            TypeRef::Array(array) => {
                write!(f, "array[{}] of {}", ",".repeat(array.dimensions.saturating_sub(1)), array.element)
            }
        }
    }
}
