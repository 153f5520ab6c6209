//! Status and free-text filtering over the link collection

use chrono::{DateTime, Utc};
use clap::ValueEnum;

use crate::classify::{LinkStatus, classify};
use crate::storage::ShortenedLink;

/// Status bucket selector for list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Expiring,
    Expired,
}

impl StatusFilter {
    fn matches(&self, status: LinkStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == LinkStatus::Active,
            StatusFilter::Expiring => status == LinkStatus::ExpiringSoon,
            StatusFilter::Expired => status == LinkStatus::Expired,
        }
    }
}

/// Select the links to display.
///
/// Both predicates are conjunctive and the collection's most-recent-first
/// order is preserved. The search term matches case-insensitively against
/// the original URL and the short code; an empty term matches everything.
pub fn filter_links<'a>(
    links: &'a [ShortenedLink],
    status: StatusFilter,
    search_term: &str,
    now: DateTime<Utc>,
) -> Vec<&'a ShortenedLink> {
    let needle = search_term.to_lowercase();
    links
        .iter()
        .filter(|link| status.matches(classify(link, now)))
        .filter(|link| {
            needle.is_empty()
                || link.original_url.to_lowercase().contains(&needle)
                || link.short_code.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn link(id: &str, url: &str, code: &str, expires_in_days: i64) -> ShortenedLink {
        let now = Utc::now();
        ShortenedLink {
            id: id.into(),
            original_url: url.into(),
            short_code: code.into(),
            created_at: now,
            expires_at: now + Duration::days(expires_in_days),
            access_count: 0,
        }
    }

    fn sample_pair() -> Vec<ShortenedLink> {
        vec![
            link("1", "https://a.com", "AAA", 10),
            link("2", "https://b.com", "BBB", -1),
        ]
    }

    #[test]
    fn test_empty_collection_yields_empty() {
        let links: Vec<ShortenedLink> = Vec::new();
        assert!(filter_links(&links, StatusFilter::All, "", Utc::now()).is_empty());
    }

    #[test]
    fn test_status_filter_selects_expired() {
        let links = sample_pair();
        let result = filter_links(&links, StatusFilter::Expired, "", Utc::now());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let links = sample_pair();
        let result = filter_links(&links, StatusFilter::All, "bbb", Utc::now());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn test_search_matches_short_code_only() {
        let links = vec![link("1", "https://docs.example.com", "Zq9", 10)];
        let result = filter_links(&links, StatusFilter::All, "zq", Utc::now());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let links = sample_pair();
        // "a.com" matches the first link, but the first link is not expired
        let result = filter_links(&links, StatusFilter::Expired, "a.com", Utc::now());
        assert!(result.is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let links = vec![
            link("1", "https://one.com", "AAA", 10),
            link("2", "https://two.com", "BBB", 20),
            link("3", "https://three.com", "CCC", 30),
        ];
        let result = filter_links(&links, StatusFilter::Active, "", Utc::now());
        let ids: Vec<&str> = result.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_no_matches_is_not_an_error() {
        let links = sample_pair();
        let result = filter_links(&links, StatusFilter::All, "nothing-matches-this", Utc::now());
        assert!(result.is_empty());
    }
}
