use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{JshortError, Result};

/// A shortened link as tracked by the client.
///
/// All fields are backend-assigned; the client never mutates a record after
/// it is stored. `access_count` is the last value seen at creation time and
/// may be stale relative to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortenedLink {
    pub id: String,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub access_count: u64,
}

/// Wire/snapshot form of [`ShortenedLink`].
///
/// Field names and date encoding match the backend's JSON payload, which is
/// also the snapshot format (the browser variant stored the raw API records
/// in local storage).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SerializableShortenedLink {
    pub id: String,
    pub original_url: String,
    pub short_code: String,
    pub creation_date: String,
    pub expiration_date: String,
    #[serde(default)]
    pub access_count: u64,
}

impl From<&ShortenedLink> for SerializableShortenedLink {
    fn from(link: &ShortenedLink) -> Self {
        SerializableShortenedLink {
            id: link.id.clone(),
            original_url: link.original_url.clone(),
            short_code: link.short_code.clone(),
            creation_date: link.created_at.to_rfc3339(),
            expiration_date: link.expires_at.to_rfc3339(),
            access_count: link.access_count,
        }
    }
}

impl TryFrom<SerializableShortenedLink> for ShortenedLink {
    type Error = JshortError;

    fn try_from(raw: SerializableShortenedLink) -> Result<Self> {
        let created_at = parse_rfc3339(&raw.creation_date)?;
        let expires_at = parse_rfc3339(&raw.expiration_date)?;
        Ok(ShortenedLink {
            id: raw.id,
            original_url: raw.original_url,
            short_code: raw.short_code,
            created_at,
            expires_at,
            access_count: raw.access_count,
        })
    }
}

fn parse_rfc3339(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            JshortError::serialization(format!("Invalid timestamp '{}': {}", value, e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_link() -> ShortenedLink {
        ShortenedLink {
            id: "9f6c2a".into(),
            original_url: "https://example.com/some/long/path".into(),
            short_code: "Ab3xYz".into(),
            created_at: "2025-01-01T10:00:00Z".parse().unwrap(),
            expires_at: "2025-02-01T10:00:00Z".parse().unwrap(),
            access_count: 7,
        }
    }

    #[test]
    fn test_serializes_with_backend_field_names() {
        let raw = SerializableShortenedLink::from(&sample_link());
        let json = serde_json::to_value(&raw).unwrap();
        assert!(json.get("originalUrl").is_some());
        assert!(json.get("shortCode").is_some());
        assert!(json.get("creationDate").is_some());
        assert!(json.get("expirationDate").is_some());
        assert!(json.get("accessCount").is_some());
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let link = sample_link();
        let raw = SerializableShortenedLink::from(&link);
        let back = ShortenedLink::try_from(raw).unwrap();
        assert_eq!(back, link);
    }

    #[test]
    fn test_missing_access_count_defaults_to_zero() {
        let json = r#"{
            "id": "1",
            "originalUrl": "https://a.com",
            "shortCode": "AAA",
            "creationDate": "2025-01-01T00:00:00Z",
            "expirationDate": "2025-01-02T00:00:00Z"
        }"#;
        let raw: SerializableShortenedLink = serde_json::from_str(json).unwrap();
        assert_eq!(raw.access_count, 0);
    }

    #[test]
    fn test_invalid_timestamp_is_an_error() {
        let raw = SerializableShortenedLink {
            id: "1".into(),
            original_url: "https://a.com".into(),
            short_code: "AAA".into(),
            creation_date: "not-a-date".into(),
            expiration_date: "2025-01-02T00:00:00Z".into(),
            access_count: 0,
        };
        let err = ShortenedLink::try_from(raw).unwrap_err();
        assert!(matches!(err, JshortError::Serialization(_)));
    }
}
