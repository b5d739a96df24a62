//! Error types for the compile crate.

use skinfaxi_ir::IrError;
use thiserror::Error;

/// Errors that can occur during compilation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// The target basis cannot express an operation.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Circuit reconstruction failed.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
