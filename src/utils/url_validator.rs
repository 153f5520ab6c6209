//! Submission URL validation
//!
//! Rejects anything that is not a well-formed absolute http(s) URL before it
//! reaches the network.

use url::Url;

#[derive(Debug)]
pub enum UrlValidationError {
    EmptyUrl,
    UnsupportedScheme(String),
    BlockedScheme(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::UnsupportedScheme(scheme) => write!(
                f,
                "Unsupported scheme: {}. Only http:// and https:// are allowed",
                scheme
            ),
            Self::BlockedScheme(scheme) => write!(f, "Blocked scheme: {}", scheme),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// Schemes that must never be forwarded to the shortener.
const BLOCKED_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

/// Validate a URL before submission.
///
/// Checks, in order: non-empty input, no blocked scheme, http/https only,
/// and a parseable absolute URL.
pub fn validate_submission_url(input: &str) -> Result<(), UrlValidationError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let scheme = input
        .split_once(':')
        .map(|(s, _)| s.to_lowercase())
        .unwrap_or_default();

    if BLOCKED_SCHEMES.contains(&scheme.as_str()) {
        return Err(UrlValidationError::BlockedScheme(scheme));
    }

    if scheme != "http" && scheme != "https" {
        return Err(UrlValidationError::UnsupportedScheme(scheme));
    }

    Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    Ok(())
}
