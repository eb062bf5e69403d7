//! Structural dump of a parsed program.
//!
//! Each node is printed on its own line as its kind and source range,
//! prefixed by the field it fills in its parent. Children are indented two
//! spaces under their parent, and the parent's closing `)` ends the last
//! line of its subtree. Leaves are followed by their source text:
//!
//! ```text
//! (program [0, 0] - [1, 0]
//!   (function_def [0, 0] - [0, 29]
//!     name: (identifier [0, 7] - [0, 8])
//!       text: "f"
//!     body: (body [0, 11] - [0, 29]
//!       block: (block [0, 11] - [0, 29]
//!         (expression_statement [0, 17] - [0, 24]
//!           (assignment_expression [0, 17] - [0, 23]
//!             left: (identifier [0, 17] - [0, 18])
//!               text: "x"
//!             right: (decimal_literal [0, 22] - [0, 23])))))))
//!               text: "1"
//! ```
//!
//! is the dump of `method f() begin x := 1; end;` followed by a newline.
//!
//! Ranges are `[row, column]` pairs counted from zero, with columns in
//! bytes, so a range ends one past its last byte.

use crate::Span;

use super::{
    ast::{ArgDef, Body, FunctionDef, Program, VarGroup},
    expressions::{BinaryOp, Expr, Literal},
    statements::{BlockStmt, Stmt},
    types::TypeRef,
};

const INDENT: &str = "  ";

struct Node {
    kind: &'static str,
    field: Option<&'static str>,
    span: Span,
    children: Vec<Node>,
}

impl Node {
    fn new(kind: &'static str, span: &Span) -> Self {
        Node {
            kind,
            field: None,
            span: *span,
            children: Vec::new(),
        }
    }

    fn child(mut self, field: Option<&'static str>, mut child: Node) -> Self {
        child.field = field;
        self.children.push(child);
        self
    }
}

fn identifier_node(span: &Span) -> Node {
    Node::new("identifier", span)
}

fn program_node(program: &Program) -> Node {
    program
        .functions
        .iter()
        .fold(Node::new("program", &program.span), |node, function| {
            node.child(None, function_node(function))
        })
}

fn function_node(function: &FunctionDef) -> Node {
    let mut node = Node::new("function_def", &function.span)
        .child(Some("name"), identifier_node(&function.name_span));

    for arg in &function.args {
        node = node.child(Some("parameter"), parameter_node(arg));
    }
    if let Some(return_type) = &function.return_type {
        node = node.child(Some("return_type"), type_node(return_type));
    }
    if let Some(body) = &function.body {
        node = node.child(Some("body"), body_node(body));
    }

    node
}

fn parameter_node(arg: &ArgDef) -> Node {
    let node = Node::new("parameter", &arg.span).child(Some("name"), identifier_node(&arg.name_span));
    match &arg.type_ref {
        Some(type_ref) => node.child(Some("type"), type_node(type_ref)),
        None => node,
    }
}

fn body_node(body: &Body) -> Node {
    let node = body
        .vars
        .iter()
        .fold(Node::new("body", &body.span), |node, group| {
            node.child(Some("var"), var_group_node(group))
        });

    node.child(Some("block"), block_node(&body.block))
}

fn var_group_node(group: &VarGroup) -> Node {
    let node = group
        .name_spans
        .iter()
        .fold(Node::new("var_group", &group.span), |node, span| {
            node.child(Some("name"), identifier_node(span))
        });

    match &group.type_ref {
        Some(type_ref) => node.child(Some("type"), type_node(type_ref)),
        None => node,
    }
}

fn type_node(type_ref: &TypeRef) -> Node {
    match type_ref {
        TypeRef::Builtin(_, span) => Node::new("builtin_type", span),
        TypeRef::Custom(symbol) => Node::new("custom_type", &symbol.span),
        TypeRef::Array(array) => {
            Node::new("array_type", &array.span).child(Some("element"), type_node(&array.element))
        }
    }
}

fn block_node(block: &BlockStmt) -> Node {
    block
        .iter()
        .fold(Node::new("block", &block.span), |node, stmt| {
            node.child(None, stmt_node(stmt))
        })
}

fn stmt_node(stmt: &Stmt) -> Node {
    match stmt {
        Stmt::If(stmt) => {
            let node = Node::new("if_statement", &stmt.span)
                .child(Some("condition"), expr_node(&stmt.condition))
                .child(Some("consequence"), stmt_node(&stmt.then_body));
            match &stmt.else_body {
                Some(else_body) => node.child(Some("alternative"), stmt_node(else_body)),
                None => node,
            }
        }
        Stmt::Block(block) => block_node(block),
        Stmt::While(stmt) => Node::new("while_statement", &stmt.span)
            .child(Some("condition"), expr_node(&stmt.condition))
            .child(Some("body"), stmt_node(&stmt.body)),
        Stmt::DoUntil(stmt) => {
            // The condition is labelled with the keyword that introduced it.
            let keyword = if stmt.negate { "until" } else { "while" };
            Node::new("repeat_statement", &stmt.span)
                .child(Some("body"), stmt_node(&stmt.body))
                .child(Some(keyword), expr_node(&stmt.condition))
        }
        Stmt::Break(stmt) => Node::new("break_statement", &stmt.span),
        Stmt::Expression(stmt) => {
            Node::new("expression_statement", &stmt.span).child(None, expr_node(&stmt.expression))
        }
    }
}

fn expr_node(expr: &Expr) -> Node {
    match expr {
        Expr::Unary(expr) => {
            Node::new("unary_expression", &expr.span).child(Some("operand"), expr_node(&expr.right_expr))
        }
        Expr::Binary(expr) => {
            let kind = match expr.operator {
                BinaryOp::Assign => "assignment_expression",
                _ => "binary_expression",
            };
            Node::new(kind, &expr.span)
                .child(Some("left"), expr_node(&expr.left))
                .child(Some("right"), expr_node(&expr.right))
        }
        Expr::Paren(expr) => {
            Node::new("parenthesized_expression", &expr.span).child(None, expr_node(&expr.inner))
        }
        Expr::Call(expr) => expr.arguments.iter().fold(
            Node::new("call_expression", &expr.span).child(Some("function"), expr_node(&expr.callee)),
            |node, argument| node.child(Some("argument"), expr_node(argument)),
        ),
        Expr::Index(expr) => expr.arguments.iter().fold(
            Node::new("index_expression", &expr.span).child(Some("array"), expr_node(&expr.base)),
            |node, argument| node.child(Some("index"), expr_node(argument)),
        ),
        Expr::Identifier(symbol) => identifier_node(&symbol.span),
        Expr::Literal(literal) => {
            let kind = match literal.value {
                Literal::Bool(_) => "bool_literal",
                Literal::String(_) => "string_literal",
                Literal::Char(_) => "char_literal",
                Literal::Hex(_) => "hex_literal",
                Literal::Binary(_) => "binary_literal",
                Literal::Decimal(_) => "decimal_literal",
            };
            Node::new(kind, &literal.span)
        }
    }
}

struct TreeWriter<'src> {
    source: &'src str,
    /// Byte offset where each line starts; the first entry is always 0.
    line_starts: Vec<usize>,
    show_all: bool,
    lines: Vec<String>,
}

impl<'src> TreeWriter<'src> {
    fn new(source: &'src str, show_all: bool) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(offset, _)| offset + 1))
            .collect();

        TreeWriter {
            source,
            line_starts,
            show_all,
            lines: Vec::new(),
        }
    }

    fn point(&self, offset: usize) -> (usize, usize) {
        let row = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let column = offset - self.line_starts.get(row).copied().unwrap_or(0);
        (row, column)
    }

    fn text(&self, span: &Span) -> &'src str {
        self.source.get(span.start.0..span.end.0).unwrap_or("")
    }

    /// Writes `node` and its subtree, returning the index of the line that
    /// takes the closing parenthesis.
    fn write(&mut self, node: &Node, depth: usize) -> usize {
        let indent = INDENT.repeat(depth);
        let (start_row, start_column) = self.point(node.span.start.0);
        let (end_row, end_column) = self.point(node.span.end.0);

        let mut header = format!(
            "{}{}({} [{}, {}] - [{}, {}]",
            indent,
            node.field.map(|field| format!("{}: ", field)).unwrap_or_default(),
            node.kind,
            start_row,
            start_column,
            end_row,
            end_column
        );

        if node.children.is_empty() {
            let text = self.text(&node.span);
            header.push(')');
            self.lines.push(header);
            self.lines.push(format!("{}{}text: {:?}", indent, INDENT, text));
            return self.lines.len() - 2;
        }

        if self.show_all {
            header.push_str(&format!("  text: {:?}", self.text(&node.span)));
        }
        self.lines.push(header);

        let mut last = self.lines.len() - 1;
        for child in &node.children {
            last = self.write(child, depth + 1);
        }
        self.lines[last].push(')');
        last
    }
}

/// Renders `program` as an indented tree of node kinds, field names and
/// source ranges. `source` must be the text `program` was parsed from.
///
/// With `show_all`, branch nodes also carry their source text; leaves
/// always do.
pub fn dump_tree(program: &Program, source: &str, show_all: bool) -> String {
    let mut writer = TreeWriter::new(source, show_all);
    writer.write(&program_node(program), 0);

    let mut out = writer.lines.join("\n");
    out.push('\n');
    out
}
