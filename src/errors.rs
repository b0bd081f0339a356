//! Expected, recoverable failures of repository operations
//!
//! Every variant renders to the exact human-readable message callers see
//! through [`Report::message`](crate::artifacts::outcome::Report::message).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Nothing to commit, working directory clean.")]
    NothingToCommit,
    #[error("Object {0} is not committed.")]
    ObjectNotCommitted(String),
    #[error("Commit {0} does not exist.")]
    CommitNotFound(String),
    #[error("Branch {0} does not exist.")]
    BranchNotFound(String),
    #[error("Branch {0} already exists.")]
    BranchAlreadyExists(String),
    #[error("Cannot remove current branch.")]
    CannotRemoveCurrentBranch,
    #[error("Branch {0} does not have any commits yet.")]
    NoCommitsYet(String),
}
