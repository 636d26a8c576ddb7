/*! The Block IR: a small closed tree of types, expressions and statements.
 *
 * Front ends produce Block trees; backends consume them. This crate holds everything both sides
 * share: the node types, the canonical JSON form that carries trees across process and storage
 * boundaries, the diagnostic pretty-printer, and the binding descriptor that tells a backend what
 * the target library looks like.
 */

pub mod block;
pub mod codec;
pub mod errors;
pub mod expressions;
pub mod format;
pub mod function;
pub mod ir_persist;
pub mod libinfo;
pub mod statements;
pub mod types;
pub mod values;

pub use block::{Block, CategoryError};
pub use codec::{decode, encode};
pub use errors::{FormatError, SchemaError};
pub use expressions::{Argument, Call, Create, Expr};
pub use format::render;
pub use function::{Declaration, Func};
pub use libinfo::{LibInfo, LibInfoBuilder};
pub use statements::{
    Assign, Branch, Case, DefaultCase, Do, Foreach, Return, Stmt, Suite, While,
};
pub use types::{PolymorphicType, Type, TypeArgument, TypeIdentifier};
pub use values::{Identifier, Num, Str};

#[cfg(test)]
mod tests;
