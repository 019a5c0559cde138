use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;

use crate::classify::classify;
use crate::codec::{Codec, JsonCodec};
use crate::error::{Error, Result};
use crate::request::{Descriptor, Request};
use crate::single::Single;
use crate::transport::{HttpTransport, Transport};

/// Perform a one-off fetch
///
/// Validates the target, performs exactly one call on `transport` and
/// classifies the response with `codec`. An invalid target never reaches
/// the transport.
pub async fn fetch<T, C>(
    transport: &dyn Transport,
    descriptor: &Descriptor<T>,
    codec: &C,
) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    C: Codec,
{
    let request = descriptor.request();
    request.parsed_url()?;

    let response = transport.perform(request).await?;
    classify(codec, &response)
}

/// High-level client for typed requests
///
/// Combines a transport and codec. Cloning shares the transport, so clones
/// can fetch concurrently.
pub struct Client<C = JsonCodec> {
    transport: Arc<dyn Transport>,
    codec: C,
    runtime: Option<Handle>,
}

impl<C: Codec> Client<C> {
    /// Create a client from an existing transport
    pub fn from_transport(transport: impl Transport + 'static, codec: C) -> Self {
        Self {
            transport: Arc::new(transport),
            codec,
            runtime: None,
        }
    }

    /// Spawn fetches on `handle` instead of the caller's runtime
    ///
    /// Lets threads without a runtime of their own start fetches.
    pub fn on_runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Create a client over a default [`HttpTransport`]
    pub fn http(codec: C) -> Result<Self> {
        let transport = HttpTransport::new()?;
        Ok(Self::from_transport(transport, codec))
    }

    /// Fetch and decode one resource
    pub async fn fetch<T>(&self, descriptor: &Descriptor<T>) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        fetch(self.transport.as_ref(), descriptor, &self.codec).await
    }

    /// Encode `value` with this client's codec and attach it as the body
    pub fn with_body<B: Serialize>(&self, request: Request, value: &B) -> Result<Request> {
        let bytes = self.codec.encode(value).map_err(Error::request_failed)?;
        Ok(request.body(bytes))
    }
}

impl<C: Codec + Clone + 'static> Client<C> {
    /// Fetch on a spawned task, delivering the result as a single emission
    ///
    /// Uses the handle from [`Client::on_runtime`] if set, then the current
    /// runtime. With neither, the fetch runs when the result is awaited.
    pub fn spawn_fetch<T>(&self, descriptor: Descriptor<T>) -> Single<T>
    where
        T: for<'de> Deserialize<'de> + Send + 'static,
    {
        let client = self.clone();
        let work = async move { client.fetch(&descriptor).await };
        match &self.runtime {
            Some(handle) => Single::spawn_on(handle, work),
            None => Single::spawn(work),
        }
    }
}

impl<C: Clone> Clone for Client<C> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            codec: self.codec.clone(),
            runtime: self.runtime.clone(),
        }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for Client<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("codec", &self.codec)
            .field("runtime", &self.runtime.is_some())
            .finish_non_exhaustive()
    }
}
