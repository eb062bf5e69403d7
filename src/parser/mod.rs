//! Parser module for building the syntax tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into a [`Program`](crate::ast::ast::Program). It uses a Pratt parser for
//! expressions with explicit binding powers and handles:
//!
//! - Method definitions, parameters and `var` sections
//! - Statement parsing (blocks, conditionals, loops, `break`)
//! - Expression parsing (binary and prefix operators, calls, indexing, literals)
//! - Type parsing for type annotations
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling. The
//! first error aborts the parse.

pub mod expr;
pub mod function;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
