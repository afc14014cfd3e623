// PRDatabase — Top-level error types
//
// Aggregates errors from the shell and store modules into a single
// error enum for the application boundary.

use thiserror::Error;

/// Top-level error type for all PRDatabase operations.
#[derive(Debug, Error)]
pub enum PrDatabaseError {
    #[error(transparent)]
    Shell(#[from] crate::shell::ShellError),

    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PrDatabaseError>;
