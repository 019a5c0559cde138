use std::collections::HashMap;

use bytes::Bytes;

use crate::error::Result;
use crate::request::Request;

pub mod http;
pub mod mock;

pub use self::http::{HttpTransport, HttpTransportBuilder};
pub use self::mock::MockTransport;

/// Raw outcome of one HTTP round-trip
///
/// Carries any status code; deciding what a status means is left to
/// [`crate::classify`]. Header names are lowercase. A header sent more than
/// once holds its values joined with `", "`, and values that are not valid
/// header text are left out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Bytes,
}

impl Response {
    /// Response with no headers
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Status is in `200..=299`
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Transport trait for executing a request descriptor
///
/// Implementations keep no per-call state, so one instance may serve
/// concurrent calls. Every call issues at most one network request.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request and return the response for any status code
    async fn perform(&self, request: &Request) -> Result<Response>;
}
