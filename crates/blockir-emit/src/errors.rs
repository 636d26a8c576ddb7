use thiserror::Error;

pub type TranspileResult<T> = Result<T, TranspileError>;

/// A tree that cannot be lowered against the current descriptor.
///
/// `node` fields hold the pretty-printed form of the offending node.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranspileError {
    #[error("Unknown type: {name} in {node}")]
    UnknownType { name: String, node: String },

    #[error("Unknown function: {name} in {node}")]
    UnknownFunction { name: String, node: String },

    #[error("Typevar {name} is not specified in {node}")]
    MissingTypeArgument { name: String, node: String },

    #[error("Argument {name} is not specified in {node}")]
    MissingArgument { name: String, node: String },

    #[error("Typevar {name} is specified more than once in {node}")]
    DuplicateTypeArgument { name: String, node: String },

    #[error("Argument {name} is specified more than once in {node}")]
    DuplicateArgument { name: String, node: String },

    #[error("Return inside a loop body is not supported by the callback loop lowering: {node}")]
    ReturnInsideLoop { node: String },
}

impl TranspileError {
    /// Rendered form of the node the error was raised on.
    pub fn node(&self) -> &str {
        match self {
            TranspileError::UnknownType { node, .. }
            | TranspileError::UnknownFunction { node, .. }
            | TranspileError::MissingTypeArgument { node, .. }
            | TranspileError::MissingArgument { node, .. }
            | TranspileError::DuplicateTypeArgument { node, .. }
            | TranspileError::DuplicateArgument { node, .. }
            | TranspileError::ReturnInsideLoop { node } => node,
        }
    }
}
