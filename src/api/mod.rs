//! Shortening Service client
//!
//! The backend performs the actual shortening; this module only submits URLs
//! and builds short-link addresses. It sits behind the [`Shortener`] trait so
//! the store can be exercised without a network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{JshortError, Result};
use crate::storage::{SerializableShortenedLink, ShortenedLink};

/// Submission endpoint, relative to the API base URL.
pub const SHORTEN_ENDPOINT: &str = "/url/encurtar";

/// Shown when the backend fails without a usable error message.
const FALLBACK_SUBMIT_ERROR: &str = "Failed to shorten URL";

/// Build the public short URL for a code. Pure string template, no network.
pub fn short_url(base_url: &str, short_code: &str) -> String {
    format!("{}/url/{}", base_url.trim_end_matches('/'), short_code)
}

#[async_trait]
pub trait Shortener: Send + Sync {
    /// Submit a URL for shortening and return the created record.
    async fn shorten(&self, original_url: &str) -> Result<ShortenedLink>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShortenRequest<'a> {
    original_url: &'a str,
}

#[derive(Deserialize)]
struct ErrorPayload {
    message: Option<String>,
}

/// HTTP implementation of [`Shortener`] against the JShort backend.
pub struct HttpShortener {
    client: reqwest::Client,
    base_url: String,
}

impl HttpShortener {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        HttpShortener {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Short URL for a code on this backend.
    pub fn short_url(&self, short_code: &str) -> String {
        short_url(&self.base_url, short_code)
    }
}

#[async_trait]
impl Shortener for HttpShortener {
    async fn shorten(&self, original_url: &str) -> Result<ShortenedLink> {
        let endpoint = format!("{}{}", self.base_url, SHORTEN_ENDPOINT);
        let request = ShortenRequest { original_url };

        let response = self
            .client
            .post(&endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Shorten request to {} failed: {}", endpoint, e);
                JshortError::submission(FALLBACK_SUBMIT_ERROR)
            })?;

        if response.status().is_success() {
            let raw: SerializableShortenedLink = response.json().await.map_err(|e| {
                warn!("Malformed shorten response: {}", e);
                JshortError::submission(FALLBACK_SUBMIT_ERROR)
            })?;
            ShortenedLink::try_from(raw).map_err(|e| {
                warn!("Malformed shorten response: {}", e);
                JshortError::submission(FALLBACK_SUBMIT_ERROR)
            })
        } else {
            // Surface the backend's message verbatim when it provides one
            let status = response.status();
            let message = response
                .json::<ErrorPayload>()
                .await
                .ok()
                .and_then(|payload| payload.message)
                .unwrap_or_else(|| FALLBACK_SUBMIT_ERROR.to_string());
            warn!("Backend rejected shorten request ({}): {}", status, message);
            Err(JshortError::submission(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url_template() {
        assert_eq!(
            short_url("http://localhost:8080/api", "Ab3xYz"),
            "http://localhost:8080/api/url/Ab3xYz"
        );
    }

    #[test]
    fn test_short_url_strips_trailing_slash() {
        assert_eq!(
            short_url("http://localhost:8080/api/", "AAA"),
            "http://localhost:8080/api/url/AAA"
        );
    }

    #[test]
    fn test_shorten_request_uses_backend_field_name() {
        let body = serde_json::to_value(ShortenRequest {
            original_url: "https://example.com",
        })
        .unwrap();
        assert_eq!(body["originalUrl"], "https://example.com");
    }

    #[test]
    fn test_error_payload_message_is_optional() {
        let with: ErrorPayload = serde_json::from_str(r#"{"message":"URL inválida"}"#).unwrap();
        assert_eq!(with.message.as_deref(), Some("URL inválida"));
        let without: ErrorPayload = serde_json::from_str(r#"{"status":400}"#).unwrap();
        assert!(without.message.is_none());
    }

    #[test]
    fn test_http_shortener_normalizes_base_url() {
        let client = HttpShortener::new("https://jshort.example/api/");
        assert_eq!(client.base_url(), "https://jshort.example/api");
        assert_eq!(
            client.short_url("AAA"),
            "https://jshort.example/api/url/AAA"
        );
    }
}
