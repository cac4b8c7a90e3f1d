use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use recall_core::Card;
use tracing::debug;

use crate::repository::{CardRecord, SnapshotRepository, StorageError};

/// File-backed snapshot store.
///
/// Snapshots are a JSON array of `{term, definition, mistakes}` objects;
/// saving replaces the whole file in one write.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSnapshotRepository;

impl JsonSnapshotRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SnapshotRepository for JsonSnapshotRepository {
    fn load(&self, path: &Path) -> Result<Vec<Card>, StorageError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound,
            _ => StorageError::Io(e.to_string()),
        })?;

        let records: Vec<CardRecord> =
            serde_json::from_str(&content).map_err(|e| StorageError::Parse(e.to_string()))?;

        debug!(path = %path.display(), count = records.len(), "snapshot loaded");
        Ok(records.into_iter().map(CardRecord::into_card).collect())
    }

    fn save(&self, path: &Path, cards: &[Card]) -> Result<usize, StorageError> {
        let records: Vec<CardRecord> = cards.iter().map(CardRecord::from_card).collect();
        let content = serde_json::to_string_pretty(&records)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(path, content).map_err(|e| StorageError::Io(e.to_string()))?;

        debug!(path = %path.display(), count = cards.len(), "snapshot saved");
        Ok(cards.len())
    }
}
