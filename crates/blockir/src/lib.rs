/*! Block IR with its C++ backend behind one import.
 *
 * Front ends that already hold a tree use the re-exported types and `Transpiler` directly. Tools
 * that receive the tree and the binding descriptor as JSON use the `pipeline` functions, which
 * decode, check and lower in one call and report which input was at fault.
 */

pub mod pipeline;

pub use blockir_core as core;
pub use blockir_emit as emit;

pub use blockir_core::{
    codec, decode, encode, render, Argument, Assign, Block, Branch, Call, Case, Create,
    Declaration, DefaultCase, Do, Expr, Foreach, FormatError, Func, Identifier, LibInfo, Num,
    PolymorphicType, Return, SchemaError, Stmt, Str, Suite, Type, TypeArgument, TypeIdentifier,
    While,
};

pub use blockir_emit::{IndentStyle, TranspileError, Transpiler, TranspilerConfig};

pub use pipeline::{bundle_json, bundle_json_with_config, bundle_str, transpile_json};
