use crate::{statements::Stmt, types::Type, values::Identifier};

/// A function parameter: `$arg:type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub arg: Identifier,
    pub ty: Type,
}

impl Declaration {
    pub fn new(arg: impl Into<Identifier>, ty: impl Into<Type>) -> Self {
        Self {
            arg: arg.into(),
            ty: ty.into(),
        }
    }
}

/// An anonymous function literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Func {
    pub decls: Vec<Declaration>,
    pub return_type: Type,
    pub body: Box<Stmt>,
}

impl Func {
    pub fn new(
        decls: Vec<Declaration>,
        return_type: impl Into<Type>,
        body: impl Into<Stmt>,
    ) -> Self {
        Self {
            decls,
            return_type: return_type.into(),
            body: Box::new(body.into()),
        }
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.decls.iter().map(|decl| decl.arg.id.as_str())
    }
}
