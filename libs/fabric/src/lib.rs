//! Networking Fabric - typed HTTP request pipeline
//!
//! Provides request descriptors, a transport abstraction (reqwest-backed HTTP
//! and a mock), codec support (JSON), response classification into the
//! shared error taxonomy, and a single-emission channel for handing one
//! result to one consumer.
//!
//! # Example
//!
//! ```no_run
//! use networking_fabric::{Client, Request, codec::JsonCodec};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Repo { full_name: String, stargazers_count: u64 }
//!
//! # async fn example() -> networking_fabric::Result<()> {
//! let client = Client::http(JsonCodec)?;
//!
//! // Awaited directly
//! let descriptor =
//!     Request::get("https://api.github.com/repos/rust-lang/rust").expecting::<Repo>();
//! let repo = client.fetch(&descriptor).await?;
//!
//! // Or delivered as a single emission from a spawned task
//! let repo = client.spawn_fetch(descriptor).first_value().await?;
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod client;
pub mod codec;
pub mod error;
pub mod request;
pub mod single;
pub mod transport;

// Re-exports for convenience
pub use classify::classify;
pub use client::{fetch, Client};
pub use error::{Error, Result};
pub use request::{Descriptor, Method, Request};
pub use single::{single, Emitter, Single};
pub use transport::{HttpTransport, MockTransport, Response, Transport};
