//! Error types for downstream compilation
//!
//! Translation itself is total and surfaces no errors. The one fallible
//! edge is handing a translated pattern to the target engine, which
//! rejects constructs translation cannot express.

use thiserror::Error;

/// Error returned when the target engine refuses a translated pattern
#[derive(Error, Debug, Clone)]
pub enum CompileError {
    /// The target engine rejected the translated pattern, typically
    /// because the literal used a construct with no linear-time
    /// equivalent (backreferences, lookaround)
    #[error("target engine rejected translated pattern: {0}")]
    Rejected(#[from] regex::Error),
}

/// Result type alias for compile operations
pub type Result<T> = std::result::Result<T, CompileError>;
