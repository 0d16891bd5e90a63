use thiserror::Error;

use crate::model::{ProgressError, ValidationError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
