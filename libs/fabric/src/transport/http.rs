use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{Error, Result};
use crate::request::{Method, Request};
use crate::transport::{Response, Transport};

const DEFAULT_USER_AGENT: &str = concat!("networking/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport backed by a shared `reqwest::Client`
///
/// Non-2xx responses are returned as-is; no `error_for_status`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the default settings
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for configuring the transport
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }

    /// Wrap an already configured client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn to_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(Error::request_failed)?;
        let value = HeaderValue::from_str(value).map_err(Error::request_failed)?;
        map.append(name, value);
    }
    Ok(map)
}

/// Flatten response headers, joining repeated names with `", "`
///
/// Values that are not visible ASCII are skipped.
fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut map: HashMap<String, String> = HashMap::with_capacity(headers.keys_len());
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            tracing::debug!(header = %name, "skipping non-text header value");
            continue;
        };
        map.entry(name.as_str().to_string())
            .and_modify(|joined| {
                joined.push_str(", ");
                joined.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    map
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn perform(&self, request: &Request) -> Result<Response> {
        let url = request.parsed_url()?;
        tracing::debug!(method = %request.method(), %url, "sending request");

        let mut builder = self.client.request(to_reqwest_method(request.method()), url);
        if let Some(headers) = request.headers() {
            builder = builder.headers(to_header_map(headers)?);
        }
        if let Some(body) = request.payload() {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request failed");
            Error::request_failed(e)
        })?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());

        // The status line arrived, so a body we cannot read is a protocol fault
        let body = response.bytes().await.map_err(|e| {
            tracing::warn!(status, error = %e, "response body could not be read");
            Error::InvalidResponse
        })?;

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

/// Builder for configuring HTTP transport
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: String,
    default_headers: HashMap<String, String>,
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            connect_timeout: Some(DEFAULT_TIMEOUT),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers: HashMap::new(),
        }
    }
}

impl HttpTransportBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Disable both timeouts
    pub fn no_timeouts(mut self) -> Self {
        self.timeout = None;
        self.connect_timeout = None;
        self
    }

    /// Set the `User-Agent` sent with every request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a header sent with every request
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Build the transport with the configured settings
    pub fn build(self) -> Result<HttpTransport> {
        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .default_headers(to_header_map(&self.default_headers)?);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let client = builder.build().map_err(Error::request_failed)?;
        Ok(HttpTransport { client })
    }
}
