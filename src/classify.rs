//! Expiry lifecycle classification
//!
//! Buckets are a pure function of `(record, now)` and are recomputed on
//! every query; membership drifts as time passes, so nothing here is cached
//! on the record.

use chrono::{DateTime, Utc};

use crate::storage::ShortenedLink;

/// Links expiring within this many days count as "expiring soon".
pub const EXPIRING_WINDOW_DAYS: i64 = 7;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Active,
    ExpiringSoon,
    Expired,
}

impl LinkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LinkStatus::Active => "active",
            LinkStatus::ExpiringSoon => "expiring",
            LinkStatus::Expired => "expired",
        }
    }
}

/// Whole days until expiry, rounded toward positive infinity.
///
/// Ceiling, not truncation: a link expiring in 30 minutes reports 1 day, so
/// the warning never understates remaining time to zero. A link less than a
/// full day past expiry reports 0.
pub fn days_until_expiry(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = expires_at.signed_duration_since(now).num_milliseconds();
    // ceil(millis / MILLIS_PER_DAY) via floor division of the negation
    -((-millis).div_euclid(MILLIS_PER_DAY))
}

/// Classify a link against `now`.
///
/// `diff_days == 0` lands in ExpiringSoon, not Expired; the original UI drew
/// the boundary at a strictly negative day difference and that behavior is
/// kept.
pub fn classify(link: &ShortenedLink, now: DateTime<Utc>) -> LinkStatus {
    let diff_days = days_until_expiry(link.expires_at, now);
    if diff_days < 0 {
        LinkStatus::Expired
    } else if diff_days <= EXPIRING_WINDOW_DAYS {
        LinkStatus::ExpiringSoon
    } else {
        LinkStatus::Active
    }
}
