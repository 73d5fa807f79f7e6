//! Snapshot-backed review repositories

mod json_repository;

pub use json_repository::{
    JsonSnapshotRepository, SnapshotDocument, SnapshotError, SnapshotReview,
};
