//! Link records and snapshot persistence
//!
//! The collection is persisted as a single serialized snapshot under a fixed
//! key (a JSON file for the CLI), overwritten in full on every mutation. A
//! missing or unreadable snapshot is never fatal: it degrades to an empty
//! collection.

pub mod file;
pub mod memory;
mod models;

pub use file::FileSnapshot;
pub use memory::MemorySnapshot;
pub use models::{SerializableShortenedLink, ShortenedLink};

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::errors::Result;

/// Key-value snapshot capability for the link collection.
///
/// `load` is soft: backends log read/parse problems and return an empty
/// collection. `save` overwrites the whole snapshot.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn load(&self) -> Vec<ShortenedLink>;
    async fn save(&self, links: &[ShortenedLink]) -> Result<()>;
    fn backend_name(&self) -> &'static str;
}

/// Build the snapshot backend selected by configuration.
///
/// Unknown backend names fall back to "file" so a typo in the config never
/// silently discards the user's saved links.
pub fn create_snapshot(config: &Config) -> Arc<dyn SnapshotStore> {
    match config.storage.backend.as_str() {
        "memory" => Arc::new(MemorySnapshot::new()),
        "file" => Arc::new(FileSnapshot::new(&config.storage.snapshot_file)),
        other => {
            tracing::warn!("Unknown snapshot backend '{}', using file", other);
            Arc::new(FileSnapshot::new(&config.storage.snapshot_file))
        }
    }
}
