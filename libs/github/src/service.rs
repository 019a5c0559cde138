use networking_fabric::codec::{Codec, JsonCodec};
use networking_fabric::transport::{HttpTransport, Transport};
use networking_fabric::{Client, Result, Single};
use tokio::runtime::Handle;

use crate::models::GitHubUser;
use crate::request::GetUserRequest;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Where the user service sends its requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Create a config pointing at the public API
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root, e.g. a GitHub Enterprise `https://host/api/v3`
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_root(&self) -> &str {
        &self.base_url
    }
}

/// Fetches GitHub users
///
/// Each call yields exactly one emission: the user or one error.
pub trait UserFetcher: Send + Sync {
    fn get_user(&self, username: &str) -> Single<GitHubUser>;
}

/// Await the single emission of [`UserFetcher::get_user`]
pub async fn load_user(fetcher: &dyn UserFetcher, username: &str) -> Result<GitHubUser> {
    fetcher.get_user(username).first_value().await
}

/// [`UserFetcher`] over a [`Client`]
///
/// `get_user` spawns onto the handle given to [`UserService::on_runtime`],
/// else the current tokio runtime. Called from a thread with neither, the
/// request runs when the returned [`Single`] is awaited.
#[derive(Debug, Clone)]
pub struct UserService<C = JsonCodec> {
    client: Client<C>,
    config: ServiceConfig,
}

impl UserService<JsonCodec> {
    /// Service over a default [`HttpTransport`]
    pub fn http(config: ServiceConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new()?, config))
    }

    /// Service over any transport, decoding JSON
    pub fn with_transport(transport: impl Transport + 'static, config: ServiceConfig) -> Self {
        Self::new(Client::from_transport(transport, JsonCodec), config)
    }
}

impl<C: Codec> UserService<C> {
    /// Service over an existing client
    pub fn new(client: Client<C>, config: ServiceConfig) -> Self {
        Self { client, config }
    }

    /// Spawn every fetch on `handle`
    pub fn on_runtime(mut self, handle: Handle) -> Self {
        self.client = self.client.on_runtime(handle);
        self
    }

    /// Settings this service was built with
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl<C: Codec + Clone + 'static> UserFetcher for UserService<C> {
    fn get_user(&self, username: &str) -> Single<GitHubUser> {
        let descriptor = GetUserRequest::new(username).descriptor(self.config.api_root());
        tracing::debug!(username, "fetching user");
        self.client.spawn_fetch(descriptor)
    }
}
