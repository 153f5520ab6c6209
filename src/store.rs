//! The link collection and its mutation entry points
//!
//! All mutations go through [`LinkCollection`]; each one computes the next
//! list, persists it as a full snapshot, and only then commits it in memory.
//! A failed persist therefore never leaves memory and snapshot disagreeing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::api::Shortener;
use crate::classify::{LinkStatus, classify};
use crate::errors::{JshortError, Result};
use crate::storage::{ShortenedLink, SnapshotStore};
use crate::utils::url_validator::validate_submission_url;

/// Derived collection statistics, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStats {
    pub total_links: usize,
    pub total_accesses: u64,
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

/// Owner of the shortened-link collection for this session.
///
/// The list is ordered most-recently-added first. Records are only ever
/// created by a successful submission and destroyed by an explicit removal.
pub struct LinkCollection {
    links: Vec<ShortenedLink>,
    snapshot: Arc<dyn SnapshotStore>,
}

impl LinkCollection {
    /// Restore the collection from the snapshot backend.
    ///
    /// A missing or unparsable snapshot starts the collection empty; that is
    /// never an error.
    pub async fn load(snapshot: Arc<dyn SnapshotStore>) -> Self {
        let links = snapshot.load().await;
        debug!(
            "Collection loaded: {} links ({} backend)",
            links.len(),
            snapshot.backend_name()
        );
        LinkCollection { links, snapshot }
    }

    pub fn links(&self) -> &[ShortenedLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn find_by_code(&self, short_code: &str) -> Option<&ShortenedLink> {
        self.links.iter().find(|l| l.short_code == short_code)
    }

    /// Prepend a record and rewrite the snapshot.
    ///
    /// The snapshot is written before memory is updated, so a write failure
    /// leaves the collection exactly as it was.
    pub async fn add(&mut self, link: ShortenedLink) -> Result<()> {
        let mut next = self.links.clone();
        next.insert(0, link);
        self.snapshot.save(&next).await?;
        self.links = next;
        Ok(())
    }

    /// Remove the record with the given id, if present.
    ///
    /// Idempotent: removing an unknown id is a no-op and skips the snapshot
    /// rewrite. Returns whether a record was removed.
    pub async fn remove(&mut self, id: &str) -> Result<bool> {
        let mut next = self.links.clone();
        next.retain(|l| l.id != id);
        if next.len() == self.links.len() {
            debug!("Remove: id {} not in collection", id);
            return Ok(false);
        }
        self.snapshot.save(&next).await?;
        self.links = next;
        info!("Removed link {}", id);
        Ok(true)
    }

    /// Validate and submit a URL, storing the record the backend returns.
    ///
    /// Invalid input fails before any network call. A collaborator failure
    /// surfaces its message and leaves the collection untouched.
    pub async fn submit(
        &mut self,
        original_url: &str,
        shortener: &dyn Shortener,
    ) -> Result<&ShortenedLink> {
        validate_submission_url(original_url)
            .map_err(|e| JshortError::validation(e.to_string()))?;

        let link = shortener.shorten(original_url.trim()).await?;
        info!("Shortened {} as {}", link.original_url, link.short_code);
        self.add(link).await?;
        Ok(&self.links[0])
    }

    /// Count links per lifecycle bucket against `now`.
    pub fn stats(&self, now: DateTime<Utc>) -> LinkStats {
        let mut stats = LinkStats {
            total_links: self.links.len(),
            total_accesses: self.links.iter().map(|l| l.access_count).sum(),
            active: 0,
            expiring_soon: 0,
            expired: 0,
        };
        for link in &self.links {
            match classify(link, now) {
                LinkStatus::Active => stats.active += 1,
                LinkStatus::ExpiringSoon => stats.expiring_soon += 1,
                LinkStatus::Expired => stats.expired += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySnapshot;
    use chrono::Duration;

    fn link(id: &str, code: &str, expires_in_days: i64, access_count: u64) -> ShortenedLink {
        let now = Utc::now();
        ShortenedLink {
            id: id.into(),
            original_url: format!("https://example.com/{}", id),
            short_code: code.into(),
            created_at: now,
            expires_at: now + Duration::days(expires_in_days),
            access_count,
        }
    }

    #[tokio::test]
    async fn test_add_prepends() {
        let mut collection = LinkCollection::load(Arc::new(MemorySnapshot::new())).await;
        collection.add(link("1", "AAA", 10, 0)).await.unwrap();
        collection.add(link("2", "BBB", 10, 0)).await.unwrap();
        let ids: Vec<&str> = collection.links().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[tokio::test]
    async fn test_find_by_code() {
        let mut collection = LinkCollection::load(Arc::new(MemorySnapshot::new())).await;
        collection.add(link("1", "AAA", 10, 0)).await.unwrap();
        assert!(collection.find_by_code("AAA").is_some());
        assert!(collection.find_by_code("ZZZ").is_none());
    }

    #[tokio::test]
    async fn test_stats_buckets() {
        let mut collection = LinkCollection::load(Arc::new(MemorySnapshot::new())).await;
        collection.add(link("1", "AAA", 30, 5)).await.unwrap();
        collection.add(link("2", "BBB", 3, 2)).await.unwrap();
        collection.add(link("3", "CCC", -2, 9)).await.unwrap();
        let stats = collection.stats(Utc::now());
        assert_eq!(stats.total_links, 3);
        assert_eq!(stats.total_accesses, 16);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.expiring_soon, 1);
        assert_eq!(stats.expired, 1);
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_noop() {
        let mut collection = LinkCollection::load(Arc::new(MemorySnapshot::new())).await;
        collection.add(link("1", "AAA", 10, 0)).await.unwrap();
        assert!(!collection.remove("missing").await.unwrap());
        assert_eq!(collection.len(), 1);
    }
}
