//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and recursive descent for functions, statements and
//! types.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix and postfix expressions
//! - Binding powers for operator precedence
//! - Type parsing handlers

use std::{collections::HashMap, mem};

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ParseError},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
    Position, Span,
};

use super::{
    function::parse_function_def,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    types::{create_token_type_lookups, TypeNUDHandler, TypeNUDLookup},
};

/// How many expressions, statements and types may be open inside each other
/// before the parse is abandoned with [`ParseError::NestingTooDeep`].
///
/// Every open level is a native stack frame in the parser and in the
/// recursive `Display`, `PartialEq` and `Drop` of the finished tree, so the
/// limit keeps all of them within a 2 MiB thread stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
///
/// The parser pulls tokens from the lexer one at a time and keeps only the
/// current one. Everything it owns lives for a single `parse` call.
pub struct Parser<'src> {
    /// Token source
    lexer: Lexer<'src>,
    /// The token under the cursor
    current: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix/postfix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for type null denotation handlers
    type_nud_lookup: TypeNUDLookup,
    /// Open expressions, statements and types around the cursor
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a new Parser positioned on the first token.
    ///
    /// # Errors
    ///
    /// Fails if the first token cannot be lexed.
    pub fn new(mut lexer: Lexer<'src>) -> Result<Self, Error> {
        let current = lexer.next_token()?;

        Ok(Parser {
            lexer,
            current,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            depth: 0,
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous one.
    ///
    /// # Errors
    ///
    /// Propagates a lexical error in the token after the current one.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    /// Builds the error for "wanted `expected`, but the current token is
    /// something else". At the end of input this is `UnexpectedEndOfInput`.
    pub fn unexpected(&self, expected: impl Into<String>) -> Error {
        let expected = expected.into();

        let error = if self.current.kind == TokenKind::EOF {
            ParseError::UnexpectedEndOfInput { expected }
        } else {
            ParseError::ExpectedToken {
                expected,
                found: self.current.to_string(),
            }
        };

        Error::new(error, self.get_position())
    }

    /// Consumes a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `ExpectedToken` (or `UnexpectedEndOfInput`) error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            return Err(self.unexpected(expected_kind.to_string()));
        }

        self.advance()
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Returns a reference to the type NUD lookup table.
    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    /// Registers a left denotation (infix or postfix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Registers a type null denotation handler.
    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    /// Opens one more level of nesting and returns the depth before it, to be
    /// handed back to [`Parser::restore_nesting`].
    ///
    /// # Errors
    ///
    /// `NestingTooDeep` once [`MAX_NESTING_DEPTH`] levels are open.
    pub fn enter_nesting(&mut self) -> Result<usize, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ParseError::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        let previous = self.depth;
        self.depth += 1;
        Ok(previous)
    }

    pub fn restore_nesting(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start
    }
}

/// Parses source text into a [`Program`].
///
/// This is the main entry point. It creates a parser over a fresh lexer,
/// initializes the lookup tables and parses method definitions until the end
/// of input. The first lexical or syntax error aborts the parse.
///
/// # Example
///
/// ```
/// let program = var2_frontend::parse("method main() begin x := 1; end;").unwrap();
/// assert_eq!(program.functions[0].name, "main");
/// ```
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<Program, Error> {
    let mut parser = Parser::new(tokenize(source))?;
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    let mut functions = vec![];

    while parser.has_tokens() {
        functions.push(parse_function_def(&mut parser)?);
    }

    debug!(function_count = functions.len(), "parsed program");

    Ok(Program {
        functions,
        span: Span::new(0, source.len()),
    })
}
