use crate::{
    function::Func,
    types::Type,
    values::{Identifier, Num, Str},
};

/// One named actual argument: `$name=value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Argument {
    pub name: Identifier,
    pub value: Expr,
}

impl Argument {
    pub fn new(name: impl Into<Identifier>, value: impl Into<Expr>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Construction of a value of `ty` from named arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Create {
    pub ty: Type,
    pub args: Vec<Argument>,
}

impl Create {
    pub fn new(ty: impl Into<Type>, args: Vec<Argument>) -> Self {
        Self {
            ty: ty.into(),
            args,
        }
    }
}

/// Invocation of a named function with named arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Call {
    pub func: Identifier,
    pub args: Vec<Argument>,
}

impl Call {
    pub fn new(func: impl Into<Identifier>, args: Vec<Argument>) -> Self {
        Self {
            func: func.into(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Num(Num),
    Str(Str),
    Identifier(Identifier),
    Func(Func),
    Create(Create),
    Call(Call),
}

impl Expr {
    pub fn as_func(&self) -> Option<&Func> {
        match self {
            Expr::Func(func) => Some(func),
            _ => None,
        }
    }
}

impl From<Num> for Expr {
    fn from(num: Num) -> Self {
        Expr::Num(num)
    }
}

impl From<Str> for Expr {
    fn from(s: Str) -> Self {
        Expr::Str(s)
    }
}

impl From<Identifier> for Expr {
    fn from(id: Identifier) -> Self {
        Expr::Identifier(id)
    }
}

impl From<Func> for Expr {
    fn from(func: Func) -> Self {
        Expr::Func(func)
    }
}

impl From<Create> for Expr {
    fn from(create: Create) -> Self {
        Expr::Create(create)
    }
}

impl From<Call> for Expr {
    fn from(call: Call) -> Self {
        Expr::Call(call)
    }
}

impl From<&str> for Expr {
    fn from(id: &str) -> Self {
        Expr::Identifier(Identifier::new(id))
    }
}
