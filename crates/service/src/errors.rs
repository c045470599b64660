use common::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Client(#[from] CoreError),
}

impl ServiceError {
    /// HTTP status of a rejected request, if the backend responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Client(e) => e.status(),
        }
    }
}
