//! Commit object
//!
//! Commits are immutable snapshots of the repository at specific points in time.
//! They contain:
//! - An id produced by the content addresser from the timestamp and message
//! - The commit message
//! - The commit timestamp
//! - The full set of named objects at that point (not a delta)

use crate::artifacts::objects::commit_id::CommitId;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;

/// Commit object
///
/// Once built, a commit is never mutated. Branches share commits through
/// `Arc<Commit<C>>`, so copying a branch's history never copies snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit<C> {
    /// Id assigned by the content addresser
    id: CommitId,
    /// Commit message
    message: String,
    /// Time the commit was recorded
    timestamp: DateTime<FixedOffset>,
    /// Full object state, keyed by object name
    commit_files: BTreeMap<String, C>,
}

impl<C> Commit<C> {
    /// Create a new commit
    ///
    /// # Arguments
    ///
    /// * `id` - Id produced by the content addresser
    /// * `message` - Commit message
    /// * `timestamp` - Time the commit was recorded
    /// * `commit_files` - Full snapshot of named objects
    pub fn new(
        id: CommitId,
        message: String,
        timestamp: DateTime<FixedOffset>,
        commit_files: BTreeMap<String, C>,
    ) -> Self {
        Commit {
            id,
            message,
            timestamp,
            commit_files,
        }
    }

    pub fn id(&self) -> &CommitId {
        &self.id
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format the timestamp with a chrono format string
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34 2024 +0000" for the default log format
    pub fn readable_timestamp(&self, format: &str) -> String {
        self.timestamp.format(format).to_string()
    }

    pub fn commit_files(&self) -> &BTreeMap<String, C> {
        &self.commit_files
    }

    /// Committed contents, ordered by object name
    pub fn objects(&self) -> Vec<&C> {
        self.commit_files.values().collect()
    }

    /// Look up a single committed object by name
    pub fn object(&self, name: &str) -> Option<&C> {
        self.commit_files.get(name)
    }
}
