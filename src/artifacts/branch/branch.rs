//! Branch: a named line of commit history
//!
//! Commits are kept in chronological order. The sequence only grows by
//! `push`, except for [`Branch::truncate_to`], which drops every commit after
//! a checkout target. Dropped commits are not kept anywhere else on the branch.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub struct Branch<C> {
    name: BranchName,
    commits: Vec<Arc<Commit<C>>>,
}

// Hand-written so cloning a branch does not require `C: Clone`; only the
// `Arc` handles are copied.
impl<C> Clone for Branch<C> {
    fn clone(&self) -> Self {
        Branch {
            name: self.name.clone(),
            commits: self.commits.clone(),
        }
    }
}

impl<C> Branch<C> {
    pub fn new(name: BranchName) -> Self {
        Branch {
            name,
            commits: Vec::new(),
        }
    }

    /// Start a new branch from a copy of another branch's history
    ///
    /// The two sequences are independent afterwards: pushing to or truncating
    /// either one leaves the other untouched.
    pub fn fork(&self, name: BranchName) -> Self {
        Branch {
            name,
            commits: self.commits.clone(),
        }
    }

    pub fn name(&self) -> &BranchName {
        &self.name
    }

    pub fn commits(&self) -> &[Arc<Commit<C>>] {
        &self.commits
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Most recent commit on the branch
    pub fn head(&self) -> Option<&Arc<Commit<C>>> {
        self.commits.last()
    }

    pub fn push(&mut self, commit: Arc<Commit<C>>) {
        self.commits.push(commit);
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.commits
            .iter()
            .position(|commit| commit.id().as_ref() == id)
    }

    /// Truncate history so the commit with `id` becomes the head
    ///
    /// # Returns
    ///
    /// The new head, or None if no commit on this branch has that id (in which
    /// case the branch is left unchanged)
    pub fn truncate_to(&mut self, id: &CommitId) -> Option<Arc<Commit<C>>> {
        let index = self.position(id.as_ref())?;
        self.commits.truncate(index + 1);

        self.head().cloned()
    }
}
