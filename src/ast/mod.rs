/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, function definitions, parameters and bodies
/// - expressions: Definitions for the expression kinds and operators
/// - statements: Definitions for the statement kinds
/// - types: Definitions for type references in the AST
/// - tree: Structural dump of a parsed program, one node per line
///
/// Every node implements `Display`, which prints canonical source text
/// that parses back to an equal tree.
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod tree;
pub mod types;
