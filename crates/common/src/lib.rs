use thiserror::Error;

pub mod http;
pub mod utils;

pub use http::{ApiClient, ApiRequest, ReqwestTransport, Transport};

/// Failure of a single backend call. Nothing in the workspace retries or
/// recovers from these; they travel to the caller as-is.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("http status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("encode error: {0}")]
    Encode(String),
}

impl CoreError {
    /// HTTP status of the failed response, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CoreError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
