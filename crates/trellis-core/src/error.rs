//! Error types for Trellis Core

use thiserror::Error;

/// Result type alias using Trellis's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Trellis error types
///
/// All of these are recoverable conditions returned to the caller;
/// nothing in the core terminates the process.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Source entity not found: {0}")]
    SourceNotFound(String),

    #[error("Target entity not found: {0}")]
    TargetNotFound(String),

    #[error("Invalid entity name: {0}")]
    InvalidEntityName(String),

    #[error("Invalid relation label: {0}")]
    InvalidRelationLabel(String),
}
