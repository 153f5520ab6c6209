use std::sync::Mutex;

use async_trait::async_trait;

use super::{ShortenedLink, SnapshotStore};
use crate::errors::Result;

/// In-memory snapshot backend.
///
/// Nothing survives the process; this is the non-persisting variant of the
/// original front end, and the backend used by tests.
#[derive(Default)]
pub struct MemorySnapshot {
    links: Mutex<Vec<ShortenedLink>>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshot {
    async fn load(&self) -> Vec<ShortenedLink> {
        self.links.lock().map(|l| l.clone()).unwrap_or_default()
    }

    async fn save(&self, links: &[ShortenedLink]) -> Result<()> {
        if let Ok(mut stored) = self.links.lock() {
            *stored = links.to_vec();
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
