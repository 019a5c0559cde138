//! Networking GitHub - user lookup on top of the fabric pipeline
//!
//! ```no_run
//! use networking_github::{load_user, ServiceConfig, UserService};
//!
//! # async fn example() -> networking_github::Result<()> {
//! let service = UserService::http(ServiceConfig::new())?;
//! let user = load_user(&service, "octocat").await?;
//! println!("{} - {}", user.login, user.bio);
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod request;
pub mod service;

pub use models::GitHubUser;
pub use networking_core::{Error, Result};
pub use request::GetUserRequest;
pub use service::{load_user, ServiceConfig, UserFetcher, UserService, DEFAULT_BASE_URL};
