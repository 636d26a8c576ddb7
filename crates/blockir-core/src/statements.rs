use crate::{expressions::Expr, values::Identifier};

/// `$lhs:=rhs` when `is_define`, otherwise `$lhs<-rhs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assign {
    pub lhs: Identifier,
    pub is_define: bool,
    pub rhs: Expr,
}

impl Assign {
    pub fn new(lhs: impl Into<Identifier>, is_define: bool, rhs: impl Into<Expr>) -> Self {
        Self {
            lhs: lhs.into(),
            is_define,
            rhs: rhs.into(),
        }
    }

    pub fn define(lhs: impl Into<Identifier>, rhs: impl Into<Expr>) -> Self {
        Self::new(lhs, true, rhs)
    }

    pub fn mutate(lhs: impl Into<Identifier>, rhs: impl Into<Expr>) -> Self {
        Self::new(lhs, false, rhs)
    }
}

/// An expression evaluated for its effects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Do {
    pub expr: Expr,
}

impl Do {
    pub fn new(expr: impl Into<Expr>) -> Self {
        Self { expr: expr.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Foreach {
    pub id: Identifier,
    pub iterable: Expr,
    pub body: Box<Stmt>,
}

impl Foreach {
    pub fn new(
        id: impl Into<Identifier>,
        iterable: impl Into<Expr>,
        body: impl Into<Stmt>,
    ) -> Self {
        Self {
            id: id.into(),
            iterable: iterable.into(),
            body: Box::new(body.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct While {
    pub cond: Expr,
    pub body: Box<Stmt>,
}

impl While {
    pub fn new(cond: impl Into<Expr>, body: impl Into<Stmt>) -> Self {
        Self {
            cond: cond.into(),
            body: Box::new(body.into()),
        }
    }
}

/// A chain of guarded cases tried in order, with an optional fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Branch {
    pub cases: Vec<Case>,
    pub default: Option<DefaultCase>,
}

impl Branch {
    pub fn new(cases: Vec<Case>, default: Option<DefaultCase>) -> Self {
        Self { cases, default }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Case {
    pub cond: Expr,
    pub body: Box<Stmt>,
}

impl Case {
    pub fn new(cond: impl Into<Expr>, body: impl Into<Stmt>) -> Self {
        Self {
            cond: cond.into(),
            body: Box::new(body.into()),
        }
    }
}

/// The fallback clause of a [`Branch`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefaultCase {
    pub body: Box<Stmt>,
}

impl DefaultCase {
    pub fn new(body: impl Into<Stmt>) -> Self {
        Self {
            body: Box::new(body.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Return {
    pub value: Option<Expr>,
}

impl Return {
    pub fn new(value: Option<Expr>) -> Self {
        Self { value }
    }

    pub fn value(value: impl Into<Expr>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn empty() -> Self {
        Self { value: None }
    }
}

/// Sequential composition of statements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suite {
    pub stmts: Vec<Stmt>,
}

impl Suite {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt {
    Assign(Assign),
    Do(Do),
    Foreach(Foreach),
    While(While),
    Branch(Branch),
    Return(Return),
    Break,
    Continue,
    Suite(Suite),
}

impl From<Assign> for Stmt {
    fn from(stmt: Assign) -> Self {
        Stmt::Assign(stmt)
    }
}

impl From<Do> for Stmt {
    fn from(stmt: Do) -> Self {
        Stmt::Do(stmt)
    }
}

impl From<Foreach> for Stmt {
    fn from(stmt: Foreach) -> Self {
        Stmt::Foreach(stmt)
    }
}

impl From<While> for Stmt {
    fn from(stmt: While) -> Self {
        Stmt::While(stmt)
    }
}

impl From<Branch> for Stmt {
    fn from(stmt: Branch) -> Self {
        Stmt::Branch(stmt)
    }
}

impl From<Return> for Stmt {
    fn from(stmt: Return) -> Self {
        Stmt::Return(stmt)
    }
}

impl From<Suite> for Stmt {
    fn from(stmt: Suite) -> Self {
        Stmt::Suite(stmt)
    }
}
