use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use bytes::Bytes;
use url::Url;

use crate::error::{Error, Result};

/// HTTP methods a descriptor may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire-level description of one outbound HTTP call
///
/// Built through the consuming setters below and never mutated afterwards.
/// The target address is optional here; a missing or malformed one is
/// reported as [`Error::InvalidUrl`] when the request is validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Request {
    url: Option<String>,
    method: Method,
    headers: Option<HashMap<String, String>>,
    body: Option<Bytes>,
}

impl Request {
    /// Request with no target, headers or body
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// `GET` request to `url`
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get).url(url)
    }

    /// `POST` request to `url`
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post).url(url)
    }

    /// `PUT` request to `url`
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put).url(url)
    }

    /// `DELETE` request to `url`
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete).url(url)
    }

    /// Set the target address
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Add a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach the type a successful response decodes into
    pub fn expecting<T>(self) -> Descriptor<T> {
        Descriptor {
            request: self,
            expects: PhantomData,
        }
    }

    /// Raw target address, unvalidated
    pub fn target(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// HTTP method
    pub fn method(&self) -> Method {
        self.method
    }

    /// Headers, if any were set
    pub fn headers(&self) -> Option<&HashMap<String, String>> {
        self.headers.as_ref()
    }

    /// Body, if one was set
    pub fn payload(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Parse the target address
    ///
    /// Only absolute `http`/`https` URLs with a host are accepted.
    pub fn parsed_url(&self) -> Result<Url> {
        let raw = self.url.as_deref().ok_or(Error::InvalidUrl)?;
        let url = Url::parse(raw).map_err(|e| {
            tracing::debug!(url = raw, error = %e, "rejecting target address");
            Error::InvalidUrl
        })?;

        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(url),
            _ => Err(Error::InvalidUrl),
        }
    }
}

/// A [`Request`] tagged with the type its success payload decodes into
pub struct Descriptor<T> {
    request: Request,
    expects: PhantomData<fn() -> T>,
}

impl<T> Descriptor<T> {
    /// Wire-level part of the descriptor
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Drop the type tag
    pub fn into_request(self) -> Request {
        self.request
    }
}

impl<T> Clone for Descriptor<T> {
    fn clone(&self) -> Self {
        Self {
            request: self.request.clone(),
            expects: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("request", &self.request)
            .field("expects", &std::any::type_name::<T>())
            .finish()
    }
}
