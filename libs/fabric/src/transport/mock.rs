use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::request::Request;
use crate::transport::{Response, Transport};

type Responder = dyn Fn(&Request) -> Result<Response> + Send + Sync;

/// Transport that answers from a closure instead of the network
///
/// Clones share the responder and the call log, so a test can keep one
/// handle while another is moved into a client.
#[derive(Clone)]
pub struct MockTransport {
    responder: Arc<Responder>,
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<Request>>>,
}

impl MockTransport {
    /// Answer every request through `responder`
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&Request) -> Result<Response> + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(responder),
            calls: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Answer every request with a copy of `response`
    pub fn respond(response: Response) -> Self {
        Self::new(move |_| Ok(response.clone()))
    }

    /// Answer every request with the status and body given
    pub fn respond_with(status: u16, body: &'static str) -> Self {
        Self::respond(Response::new(status, body))
    }

    /// Fail every request as a transport failure caused by `cause`
    pub fn fail_with<F, E>(cause: F) -> Self
    where
        F: Fn() -> E + Send + Sync + 'static,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::new(move |_| Err(Error::request_failed(cause())))
    }

    /// Number of requests performed so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Most recent request performed, if any
    pub fn last_request(&self) -> Option<Request> {
        self.last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("calls", &self.calls())
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn perform(&self, request: &Request) -> Result<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(request.clone());
        (self.responder)(request)
    }
}
