use std::fmt::{self, Display, Formatter};

use crate::Span;

use super::{statements::BlockStmt, types::TypeRef};

/// Root of the syntax tree: functions in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub functions: Vec<FunctionDef>,
    pub span: Span,
}

/// `name` or `name: type` in a parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgDef {
    pub name: String,
    pub name_span: Span,
    pub type_ref: Option<TypeRef>,
    pub span: Span,
}

/// `a, b, c: type;` inside a `var` section. The names are recorded as
/// written; duplicates are left for a later stage to report.
#[derive(Debug, Clone, PartialEq)]
pub struct VarGroup {
    pub names: Vec<String>,
    /// Where each of `names` was written, in the same order.
    pub name_spans: Vec<Span>,
    pub type_ref: Option<TypeRef>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub vars: Vec<VarGroup>,
    pub block: BlockStmt,
    pub span: Span,
}

/// `method name(args): type` followed by a body, or by `;` when the
/// method is only declared.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub name_span: Span,
    pub args: Vec<ArgDef>,
    pub return_type: Option<TypeRef>,
    pub body: Option<Body>,
    pub span: Span,
}

impl FunctionDef {
    pub fn is_declaration(&self) -> bool {
        self.body.is_none()
    }
}

fn write_typed(f: &mut Formatter<'_>, type_ref: &Option<TypeRef>) -> fmt::Result {
    match type_ref {
        Some(type_ref) => write!(f, ": {}", type_ref),
        None => Ok(()),
    }
}

impl Display for ArgDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        write_typed(f, &self.type_ref)
    }
}

impl Display for VarGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))?;
        write_typed(f, &self.type_ref)?;
        write!(f, ";")
    }
}

impl Display for FunctionDef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "method {}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")?;
        write_typed(f, &self.return_type)?;

        let Some(body) = &self.body else {
            return writeln!(f, ";");
        };

        writeln!(f)?;
        if !body.vars.is_empty() {
            writeln!(f, "var")?;
            for group in &body.vars {
                writeln!(f, "  {}", group)?;
            }
        }
        body.block.fmt_indented(f, 0)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, function) in self.functions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", function)?;
        }
        Ok(())
    }
}
