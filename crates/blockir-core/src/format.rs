//! Concrete syntax of the IR, used for diagnostics.
//!
//! Every node implements [`Display`](fmt::Display) with one fixed grammar per
//! kind. The text is never parsed back; the JSON codec is the only
//! round-trippable form.

use crate::{
    block::Block,
    expressions::{Argument, Call, Create, Expr},
    function::{Declaration, Func},
    statements::{Assign, Branch, Case, DefaultCase, Do, Foreach, Return, Stmt, Suite, While},
    types::{PolymorphicType, Type, TypeArgument, TypeIdentifier},
    values::{Identifier, Num, Str},
};
use std::fmt::{self, Display, Write};

pub fn render(block: &Block) -> String {
    block.to_string()
}

/// Indents every line of `text` by two spaces, dropping one trailing newline.
pub fn indent(text: &str) -> String {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let mut output = String::with_capacity(text.len() + 8);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str("  ");
        output.push_str(line);
    }
    output
}

fn write_joined<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

impl Display for TypeArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.ty)
    }
}

impl Display for PolymorphicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<", self.id)?;
        write_joined(f, &self.typevars, ",")?;
        f.write_char('>')
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Identifier(ty) => ty.fmt(f),
            Type::Polymorphic(ty) => ty.fmt(f),
        }
    }
}

impl Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_float { 'f' } else { 'i' };
        write!(f, "{}{}", prefix, self.value)
    }
}

impl Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.id)
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.arg, self.ty)
    }
}

impl Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('(')?;
        write_joined(f, &self.decls, ",")?;
        write!(
            f,
            ")->{}{{\n{}\n}}",
            self.return_type,
            indent(&self.body.to_string())
        )
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl Display for Create {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}(", self.ty)?;
        write_joined(f, &self.args, ",")?;
        f.write_str("))")
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}(", self.func)?;
        write_joined(f, &self.args, ",")?;
        f.write_str("))")
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(e) => e.fmt(f),
            Expr::Str(e) => e.fmt(f),
            Expr::Identifier(e) => e.fmt(f),
            Expr::Func(e) => e.fmt(f),
            Expr::Create(e) => e.fmt(f),
            Expr::Call(e) => e.fmt(f),
        }
    }
}

impl Display for Assign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = if self.is_define { ":=" } else { "<-" };
        writeln!(f, "{}{}{}", self.lhs, op, self.rhs)
    }
}

impl Display for Do {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "do({})", self.expr)
    }
}

impl Display for Foreach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "foreach({}<-{}){{\n{}\n}}",
            self.id,
            self.iterable,
            indent(&self.body.to_string())
        )
    }
}

impl Display for While {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "while({}){{\n{}\n}}",
            self.cond,
            indent(&self.body.to_string())
        )
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("branch{\n")?;
        write_joined(f, &self.cases, "")?;
        if let Some(default) = &self.default {
            write!(f, "{}", default)?;
        }
        f.write_str("}\n")
    }
}

impl Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "case({}):\n{}", self.cond, indent(&self.body.to_string()))
    }
}

impl Display for DefaultCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "default:\n{}", indent(&self.body.to_string()))
    }
}

impl Display for Return {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => writeln!(f, "return({})", value),
            None => writeln!(f, "return"),
        }
    }
}

impl Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.stmts, "")
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Assign(s) => s.fmt(f),
            Stmt::Do(s) => s.fmt(f),
            Stmt::Foreach(s) => s.fmt(f),
            Stmt::While(s) => s.fmt(f),
            Stmt::Branch(s) => s.fmt(f),
            Stmt::Return(s) => s.fmt(f),
            Stmt::Break => writeln!(f, "break"),
            Stmt::Continue => writeln!(f, "continue"),
            Stmt::Suite(s) => s.fmt(f),
        }
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::TypeIdentifier(b) => b.fmt(f),
            Block::TypeArgument(b) => b.fmt(f),
            Block::PolymorphicType(b) => b.fmt(f),
            Block::Num(b) => b.fmt(f),
            Block::Str(b) => b.fmt(f),
            Block::Identifier(b) => b.fmt(f),
            Block::Declaration(b) => b.fmt(f),
            Block::Func(b) => b.fmt(f),
            Block::Argument(b) => b.fmt(f),
            Block::Create(b) => b.fmt(f),
            Block::Call(b) => b.fmt(f),
            Block::Assign(b) => b.fmt(f),
            Block::Do(b) => b.fmt(f),
            Block::Foreach(b) => b.fmt(f),
            Block::While(b) => b.fmt(f),
            Block::Branch(b) => b.fmt(f),
            Block::Case(b) => b.fmt(f),
            Block::Default(b) => b.fmt(f),
            Block::Return(b) => b.fmt(f),
            Block::Break => writeln!(f, "break"),
            Block::Continue => writeln!(f, "continue"),
            Block::Suite(b) => b.fmt(f),
        }
    }
}
