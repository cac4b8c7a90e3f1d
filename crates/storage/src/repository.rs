use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use recall_core::Card;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by snapshot adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageError {
    /// The snapshot source does not exist.
    #[error("not found")]
    NotFound,

    #[error("io error: {0}")]
    Io(String),

    /// Malformed snapshot content; carries the parser's own message so it
    /// can be shown to the user verbatim.
    #[error("{0}")]
    Parse(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape for a card.
///
/// This mirrors the domain `Card` so snapshot backends can serialize and
/// deserialize without leaking storage concerns into the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub term: String,
    pub definition: String,
    pub mistakes: u32,
}

impl CardRecord {
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self {
            term: card.term().to_owned(),
            definition: card.definition().to_owned(),
            mistakes: card.mistakes(),
        }
    }

    /// Convert the record back into a domain `Card`.
    ///
    /// Snapshots are validated for shape only; the contents are taken as-is.
    #[must_use]
    pub fn into_card(self) -> Card {
        Card::from_persisted(self.term, self.definition, self.mistakes)
    }
}

/// Contract for reading and writing whole-store snapshots.
pub trait SnapshotRepository {
    /// Read every card from the snapshot at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if there is no snapshot at `path`,
    /// `StorageError::Parse` for malformed content, or `StorageError::Io`
    /// for other read failures.
    fn load(&self, path: &Path) -> Result<Vec<Card>, StorageError>;

    /// Write every card to the snapshot at `path`, replacing any previous
    /// contents. Returns the number of cards written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if encoding fails or
    /// `StorageError::Io` if the destination cannot be written.
    fn save(&self, path: &Path, cards: &[Card]) -> Result<usize, StorageError>;
}

/// Simple in-memory snapshot store for testing and prototyping.
///
/// Contents are encoded with the same JSON shape as the file-backed store so
/// parse behavior matches; [`InMemorySnapshotRepository::put_raw`] can seed
/// malformed snapshots directly.
#[derive(Clone, Default)]
pub struct InMemorySnapshotRepository {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl InMemorySnapshotRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw content at `path`, bypassing encoding.
    ///
    /// # Panics
    ///
    /// Panics if the backing lock is poisoned.
    pub fn put_raw(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files
            .lock()
            .expect("snapshot lock poisoned")
            .insert(path.into(), content.into());
    }

    /// Raw content previously written to `path`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the backing lock is poisoned.
    #[must_use]
    pub fn raw(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .expect("snapshot lock poisoned")
            .get(path)
            .cloned()
    }
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn load(&self, path: &Path) -> Result<Vec<Card>, StorageError> {
        let guard = self
            .files
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        let content = guard.get(path).ok_or(StorageError::NotFound)?;
        let records: Vec<CardRecord> =
            serde_json::from_str(content).map_err(|e| StorageError::Parse(e.to_string()))?;
        Ok(records.into_iter().map(CardRecord::into_card).collect())
    }

    fn save(&self, path: &Path, cards: &[Card]) -> Result<usize, StorageError> {
        let records: Vec<CardRecord> = cards.iter().map(CardRecord::from_card).collect();
        let content = serde_json::to_string_pretty(&records)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.files
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?
            .insert(path.to_path_buf(), content);
        Ok(cards.len())
    }
}
