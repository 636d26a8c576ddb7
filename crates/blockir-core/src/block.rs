use crate::{
    expressions::{Argument, Call, Create, Expr},
    function::{Declaration, Func},
    statements::{Assign, Branch, Case, DefaultCase, Do, Foreach, Return, Stmt, Suite, While},
    types::{PolymorphicType, Type, TypeArgument, TypeIdentifier},
    values::{Identifier, Num, Str},
};
use thiserror::Error;

/// Any node of the IR.
///
/// Fields of individual nodes are typed by category ([`Type`], [`Expr`],
/// [`Stmt`]); `Block` is the closed union of every node kind and is what the
/// codec, the printer and the transpiler accept at their entry points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Block {
    TypeIdentifier(TypeIdentifier),
    TypeArgument(TypeArgument),
    PolymorphicType(PolymorphicType),
    Num(Num),
    Str(Str),
    Identifier(Identifier),
    Declaration(Declaration),
    Func(Func),
    Argument(Argument),
    Create(Create),
    Call(Call),
    Assign(Assign),
    Do(Do),
    Foreach(Foreach),
    While(While),
    Branch(Branch),
    Case(Case),
    Default(DefaultCase),
    Return(Return),
    Break,
    Continue,
    Suite(Suite),
}

impl Block {
    /// The discriminator written into the `_type` field of the wire form.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::TypeIdentifier(_) => "TypeIdentifier",
            Block::TypeArgument(_) => "TypeArgument",
            Block::PolymorphicType(_) => "PolymorphicType",
            Block::Num(_) => "Num",
            Block::Str(_) => "Str",
            Block::Identifier(_) => "Identifier",
            Block::Declaration(_) => "Declaration",
            Block::Func(_) => "Func",
            Block::Argument(_) => "Argument",
            Block::Create(_) => "Create",
            Block::Call(_) => "Call",
            Block::Assign(_) => "Assign",
            Block::Do(_) => "Do",
            Block::Foreach(_) => "Foreach",
            Block::While(_) => "While",
            Block::Branch(_) => "Branch",
            Block::Case(_) => "Case",
            Block::Default(_) => "Default",
            Block::Return(_) => "Return",
            Block::Break => "Break",
            Block::Continue => "Continue",
            Block::Suite(_) => "Suite",
        }
    }

    pub fn is_type(&self) -> bool {
        matches!(self, Block::TypeIdentifier(_) | Block::PolymorphicType(_))
    }

    pub fn is_expr(&self) -> bool {
        matches!(
            self,
            Block::Num(_)
                | Block::Str(_)
                | Block::Identifier(_)
                | Block::Func(_)
                | Block::Create(_)
                | Block::Call(_)
        )
    }

    pub fn is_stmt(&self) -> bool {
        matches!(
            self,
            Block::Assign(_)
                | Block::Do(_)
                | Block::Foreach(_)
                | Block::While(_)
                | Block::Branch(_)
                | Block::Return(_)
                | Block::Break
                | Block::Continue
                | Block::Suite(_)
        )
    }
}

/// A node was found where a different category of node was required.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected}, found {found}")]
pub struct CategoryError {
    pub expected: &'static str,
    pub found: &'static str,
}

impl From<Type> for Block {
    fn from(ty: Type) -> Self {
        match ty {
            Type::Identifier(ty) => Block::TypeIdentifier(ty),
            Type::Polymorphic(ty) => Block::PolymorphicType(ty),
        }
    }
}

impl From<Expr> for Block {
    fn from(expr: Expr) -> Self {
        match expr {
            Expr::Num(e) => Block::Num(e),
            Expr::Str(e) => Block::Str(e),
            Expr::Identifier(e) => Block::Identifier(e),
            Expr::Func(e) => Block::Func(e),
            Expr::Create(e) => Block::Create(e),
            Expr::Call(e) => Block::Call(e),
        }
    }
}

impl From<Stmt> for Block {
    fn from(stmt: Stmt) -> Self {
        match stmt {
            Stmt::Assign(s) => Block::Assign(s),
            Stmt::Do(s) => Block::Do(s),
            Stmt::Foreach(s) => Block::Foreach(s),
            Stmt::While(s) => Block::While(s),
            Stmt::Branch(s) => Block::Branch(s),
            Stmt::Return(s) => Block::Return(s),
            Stmt::Break => Block::Break,
            Stmt::Continue => Block::Continue,
            Stmt::Suite(s) => Block::Suite(s),
        }
    }
}

impl TryFrom<Block> for Type {
    type Error = CategoryError;

    fn try_from(block: Block) -> Result<Self, Self::Error> {
        match block {
            Block::TypeIdentifier(ty) => Ok(Type::Identifier(ty)),
            Block::PolymorphicType(ty) => Ok(Type::Polymorphic(ty)),
            other => Err(CategoryError {
                expected: "Type",
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<Block> for Expr {
    type Error = CategoryError;

    fn try_from(block: Block) -> Result<Self, Self::Error> {
        match block {
            Block::Num(e) => Ok(Expr::Num(e)),
            Block::Str(e) => Ok(Expr::Str(e)),
            Block::Identifier(e) => Ok(Expr::Identifier(e)),
            Block::Func(e) => Ok(Expr::Func(e)),
            Block::Create(e) => Ok(Expr::Create(e)),
            Block::Call(e) => Ok(Expr::Call(e)),
            other => Err(CategoryError {
                expected: "Expression",
                found: other.kind(),
            }),
        }
    }
}

impl TryFrom<Block> for Stmt {
    type Error = CategoryError;

    fn try_from(block: Block) -> Result<Self, Self::Error> {
        match block {
            Block::Assign(s) => Ok(Stmt::Assign(s)),
            Block::Do(s) => Ok(Stmt::Do(s)),
            Block::Foreach(s) => Ok(Stmt::Foreach(s)),
            Block::While(s) => Ok(Stmt::While(s)),
            Block::Branch(s) => Ok(Stmt::Branch(s)),
            Block::Return(s) => Ok(Stmt::Return(s)),
            Block::Break => Ok(Stmt::Break),
            Block::Continue => Ok(Stmt::Continue),
            Block::Suite(s) => Ok(Stmt::Suite(s)),
            other => Err(CategoryError {
                expected: "Statement",
                found: other.kind(),
            }),
        }
    }
}

// Lifting a single node kind into `Block`, and narrowing back to exactly that kind.
macro_rules! node_conversions {
    ($($variant:ident => $node:ty),* $(,)?) => {
        $(
            impl From<$node> for Block {
                fn from(node: $node) -> Self {
                    Block::$variant(node)
                }
            }

            impl TryFrom<Block> for $node {
                type Error = CategoryError;

                fn try_from(block: Block) -> Result<Self, Self::Error> {
                    match block {
                        Block::$variant(node) => Ok(node),
                        other => Err(CategoryError {
                            expected: stringify!($variant),
                            found: other.kind(),
                        }),
                    }
                }
            }
        )*
    };
}

node_conversions! {
    TypeIdentifier => TypeIdentifier,
    TypeArgument => TypeArgument,
    PolymorphicType => PolymorphicType,
    Num => Num,
    Str => Str,
    Identifier => Identifier,
    Declaration => Declaration,
    Func => Func,
    Argument => Argument,
    Create => Create,
    Call => Call,
    Assign => Assign,
    Do => Do,
    Foreach => Foreach,
    While => While,
    Branch => Branch,
    Case => Case,
    Default => DefaultCase,
    Return => Return,
    Suite => Suite,
}
