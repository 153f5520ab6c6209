use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{SerializableShortenedLink, ShortenedLink, SnapshotStore};
use crate::errors::Result;

/// JSON-file snapshot backend.
///
/// The whole collection is written on every save, so the file always matches
/// the in-memory state that produced it.
pub struct FileSnapshot {
    file_path: PathBuf,
}

impl FileSnapshot {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        FileSnapshot {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    fn load_from_file(&self) -> Result<Vec<ShortenedLink>> {
        let content = fs::read_to_string(&self.file_path)?;
        let raw: Vec<SerializableShortenedLink> = serde_json::from_str(&content)?;
        raw.into_iter().map(ShortenedLink::try_from).collect()
    }

    fn save_to_file(&self, links: &[ShortenedLink]) -> Result<()> {
        let raw: Vec<SerializableShortenedLink> =
            links.iter().map(SerializableShortenedLink::from).collect();
        let json = serde_json::to_string_pretty(&raw)?;
        fs::write(&self.file_path, json)?;
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshot {
    async fn load(&self) -> Vec<ShortenedLink> {
        if !self.file_path.exists() {
            debug!("Snapshot file {:?} not found, starting empty", self.file_path);
            return Vec::new();
        }
        match self.load_from_file() {
            Ok(links) => {
                debug!("Loaded {} links from {:?}", links.len(), self.file_path);
                links
            }
            Err(e) => {
                // Unreadable snapshot degrades to an empty collection
                warn!("Failed to load snapshot {:?}: {}", self.file_path, e);
                Vec::new()
            }
        }
    }

    async fn save(&self, links: &[ShortenedLink]) -> Result<()> {
        self.save_to_file(links)
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
