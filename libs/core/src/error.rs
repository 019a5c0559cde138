use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed cause carried by transport and decoding failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid URL provided.")]
    InvalidUrl,

    #[error("Network request failed: {0}")]
    RequestFailed(#[source] BoxError),

    #[error("Invalid response received from the server.")]
    InvalidResponse,

    #[error("Failed to decode response: {0}")]
    Decoding(#[source] BoxError),

    #[error("Server Error {code}: {message}")]
    Server { code: i64, message: String },

    #[error("No response received.")]
    NoResponse,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Transport failure wrapping `cause`
    pub fn request_failed(cause: impl Into<BoxError>) -> Self {
        Self::RequestFailed(cause.into())
    }

    /// Decode failure wrapping the codec diagnostic
    pub fn decoding(cause: impl Into<BoxError>) -> Self {
        Self::Decoding(cause.into())
    }

    /// Fallback used when a non-2xx body is not a [`ServerErrorPayload`]
    pub fn server_status(status: u16) -> Self {
        Self::Server {
            code: i64::from(status),
            message: format!("Server returned status code {}", status),
        }
    }

    /// Whether the server reported this failure
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// Code reported by the server, if this is a server error
    pub fn server_code(&self) -> Option<i64> {
        match self {
            Self::Server { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<ServerErrorPayload> for Error {
    fn from(payload: ServerErrorPayload) -> Self {
        Self::Server {
            code: payload.code,
            message: payload.message,
        }
    }
}

/// Structured error body a server may return alongside a non-2xx status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerErrorPayload {
    pub code: i64,
    pub message: String,
}
