use networking_fabric::request::{Descriptor, Method, Request};
use url::Url;

use crate::models::GitHubUser;

/// `GET <base>/users/<username>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserRequest {
    pub username: String,
}

impl GetUserRequest {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Target address under `base_url`
    ///
    /// The username is pushed as a single path segment, so reserved
    /// characters are percent-encoded. A base that does not parse is passed
    /// through untouched and rejected when the request is validated.
    pub fn url(&self, base_url: &str) -> String {
        match Url::parse(base_url) {
            Ok(mut url) if !url.cannot_be_a_base() => {
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.pop_if_empty().push("users").push(&self.username);
                }
                url.into()
            }
            _ => format!("{}/users/{}", base_url.trim_end_matches('/'), self.username),
        }
    }

    /// No headers, no body
    pub fn descriptor(&self, base_url: &str) -> Descriptor<GitHubUser> {
        Request::new(Method::Get)
            .url(self.url(base_url))
            .expecting::<GitHubUser>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_users_path() {
        let request = GetUserRequest::new("octocat");
        assert_eq!(
            request.url("https://api.github.com"),
            "https://api.github.com/users/octocat"
        );
        assert_eq!(
            request.url("https://api.github.com/"),
            "https://api.github.com/users/octocat"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        let request = GetUserRequest::new("octocat");
        assert_eq!(
            request.url("http://127.0.0.1:8080/api/v3"),
            "http://127.0.0.1:8080/api/v3/users/octocat"
        );
    }

    #[test]
    fn escapes_username_segment() {
        let request = GetUserRequest::new("a/b?c");
        assert_eq!(
            request.url("https://api.github.com"),
            "https://api.github.com/users/a%2Fb%3Fc"
        );
    }

    #[test]
    fn descriptor_is_plain_get() {
        let descriptor = GetUserRequest::new("octocat").descriptor("https://api.github.com");
        let request = descriptor.request();
        assert_eq!(request.method(), Method::Get);
        assert!(request.headers().is_none());
        assert!(request.payload().is_none());
        assert!(request.parsed_url().is_ok());
    }

    #[test]
    fn unparseable_base_yields_invalid_target() {
        let descriptor = GetUserRequest::new("octocat").descriptor("not a url");
        assert!(descriptor.request().parsed_url().is_err());
    }
}
