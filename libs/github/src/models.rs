use serde::{Deserialize, Serialize};

/// Public profile returned by `GET /users/{username}`
///
/// Wire fields are snake_case (`avatar_url`), matching the Rust field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub avatar_url: String,
    pub bio: String,
}
