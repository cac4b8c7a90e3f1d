#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::JsonSnapshotRepository;
pub use repository::{CardRecord, InMemorySnapshotRepository, SnapshotRepository, StorageError};
