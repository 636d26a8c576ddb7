/*! Lower Block IR into C++ source.
 *
 * The target has no named arguments, no generic parameters by name and no self-referencing
 * lambdas. The descriptor supplies the parameter orders the IR leaves implicit, and the lowering
 * spells out what the target cannot say directly: reordered arguments are bound before the call
 * so they still run in source order, and recursive functions go through an explicit fixed point.
 */

pub mod config;
pub mod context;
pub mod emitter;
pub mod errors;
pub mod escape;
pub mod transpiler;

pub use config::{IndentStyle, TranspilerConfig};
pub use context::LoweringContext;
pub use emitter::EmitContext;
pub use errors::{TranspileError, TranspileResult};
pub use escape::escape_cpp;
pub use transpiler::Transpiler;
