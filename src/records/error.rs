// PRDatabase — Record error types

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("No active session")]
    NoActiveSession,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
