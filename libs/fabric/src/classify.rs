//! Response classification
//!
//! A 2xx body decodes into the expected type or fails with
//! [`Error::Decoding`]. Any other status always ends in [`Error::Server`]:
//! the structured `{code, message}` payload when the body carries one,
//! otherwise a message synthesized from the HTTP status.

use serde::Deserialize;

use crate::codec::Codec;
use crate::error::{Error, Result, ServerErrorPayload};
use crate::transport::Response;

/// Decode `response` into `T` or the matching taxonomy error
pub fn classify<T, C>(codec: &C, response: &Response) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    C: Codec,
{
    tracing::debug!(status = response.status, "classifying response");

    if response.is_success() {
        return codec.decode(&response.body).map_err(|e| {
            tracing::warn!(status = response.status, error = %e, "success body did not decode");
            Error::decoding(e)
        });
    }

    Err(server_error(codec, response))
}

fn server_error<C: Codec>(codec: &C, response: &Response) -> Error {
    match codec.decode::<ServerErrorPayload>(&response.body) {
        Ok(payload) => payload.into(),
        Err(e) => {
            tracing::debug!(status = response.status, error = %e, "no structured error payload");
            Error::server_status(response.status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::JsonCodec;
    use std::error::Error as _;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Profile {
        login: String,
        avatar_url: String,
        bio: String,
    }

    fn classify_profile(status: u16, body: &'static str) -> Result<Profile> {
        classify(&JsonCodec, &Response::new(status, body))
    }

    #[test]
    fn success_body_decodes() {
        let profile = classify_profile(
            200,
            r#"{"login":"testuser","avatar_url":"http://x/a.png","bio":"A test user"}"#,
        )
        .unwrap();

        assert_eq!(
            profile,
            Profile {
                login: "testuser".to_string(),
                avatar_url: "http://x/a.png".to_string(),
                bio: "A test user".to_string(),
            }
        );
    }

    #[test]
    fn every_2xx_status_is_success() {
        for status in [200, 201, 204, 250, 299] {
            let result = classify_profile(status, r#"{"login":"a","avatar_url":"b","bio":"c"}"#);
            assert!(result.is_ok(), "status {status} should decode");
        }
    }

    #[test]
    fn bad_success_body_is_decoding_error() {
        let err = classify_profile(200, r#"{"login":"testuser"}"#).unwrap_err();
        match &err {
            Error::Decoding(cause) => assert!(cause.to_string().contains("missing field")),
            other => panic!("Expected decoding error, got {:?}", other),
        }
        assert!(err.source().is_some());
    }

    #[test]
    fn html_on_success_is_decoding_error_not_server_error() {
        let err = classify_profile(200, "<html></html>").unwrap_err();
        assert!(matches!(err, Error::Decoding(_)));
    }

    #[test]
    fn structured_error_payload_is_surfaced() {
        let err = classify_profile(404, r#"{"code":404,"message":"User not found"}"#).unwrap_err();
        match err {
            Error::Server { code, message } => {
                assert_eq!(code, 404);
                assert_eq!(message, "User not found");
            }
            other => panic!("Expected server error, got {:?}", other),
        }
    }

    #[test]
    fn payload_code_wins_over_http_status() {
        let err = classify_profile(400, r#"{"code":1001,"message":"bad input"}"#).unwrap_err();
        assert_eq!(err.server_code(), Some(1001));
    }

    #[test]
    fn unparseable_error_body_falls_back_to_status() {
        for (status, body) in [
            (500, "<html><body><h1>Internal Server Error</h1></body></html>"),
            (503, ""),
            (404, r#"{"message":"Not Found","documentation_url":"https://docs"}"#),
            (302, "redirect"),
            (101, ""),
        ] {
            match classify_profile(status, body).unwrap_err() {
                Error::Server { code, message } => {
                    assert_eq!(code, i64::from(status));
                    assert_eq!(message, format!("Server returned status code {}", status));
                }
                other => panic!("Expected server error for {status}, got {:?}", other),
            }
        }
    }
}
