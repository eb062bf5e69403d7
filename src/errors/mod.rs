//! Error types and error handling for the front end.
//!
//! This module defines the error types produced while turning source text
//! into a syntax tree. It includes:
//!
//! - An error structure with the byte position of the failure
//! - Lexical error variants (malformed literals, unknown characters)
//! - Parse error variants (unexpected tokens, empty lists, early end of input)
//! - Helpful suggestions attached to common mistakes

pub mod errors;

#[cfg(test)]
mod tests;
