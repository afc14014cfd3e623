// PRDatabase — Shell error types

use thiserror::Error;

use crate::auth::AuthError;
use crate::records::RecordError;

use super::ValidationError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Still starting up")]
    Starting,

    #[error("Not signed in. Run `prdatabase signin` first")]
    Locked,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
