//! Branch registry and commit orchestration
//!
//! The branch manager owns every branch, the shared staging area and the
//! content addresser. Staged changes are not
//! per-branch: they are applied to whichever branch is current at commit time.
//!
//! Every operation either succeeds completely or fails without changing any
//! state, so repeating a failed call yields the same error.

use crate::areas::staging::StagingArea;
use crate::artifacts::branch::branch::Branch;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::addresser::{ContentAddresser, Sha1Addresser};
use crate::artifacts::log::{render_branch_list, render_history};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::outcome::{Outcome, Success};
use crate::errors::StoreError;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use std::sync::Arc;

pub struct BranchManager<C> {
    /// The checked-out branch; kept out of the registry map so it can never be missing
    current: Branch<C>,
    /// Every other branch, keyed by name
    others: BTreeMap<BranchName, Branch<C>>,
    staging: StagingArea<C>,
    addresser: Box<dyn ContentAddresser>,
}

impl<C: std::fmt::Debug> std::fmt::Debug for BranchManager<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BranchManager")
            .field("current", &self.current)
            .field("others", &self.others)
            .field("staging", &self.staging)
            .finish_non_exhaustive()
    }
}

impl<C: Clone> BranchManager<C> {
    /// Create a manager holding a single empty branch, which becomes current
    pub fn new(initial_branch: BranchName) -> Self {
        BranchManager {
            current: Branch::new(initial_branch),
            others: BTreeMap::new(),
            staging: StagingArea::new(),
            addresser: Box::new(Sha1Addresser),
        }
    }

    pub fn set_addresser(&mut self, addresser: Box<dyn ContentAddresser>) {
        self.addresser = addresser;
    }

    pub fn staging(&self) -> &StagingArea<C> {
        &self.staging
    }

    pub fn current_branch(&self) -> &Branch<C> {
        &self.current
    }

    /// All branches, sorted by name
    pub fn branches(&self) -> Vec<&Branch<C>> {
        let mut branches = self
            .others
            .values()
            .chain(std::iter::once(&self.current))
            .collect::<Vec<_>>();
        branches.sort_by(|a, b| a.name().cmp(b.name()));

        branches
    }

    pub fn branch(&self, name: &str) -> Option<&Branch<C>> {
        if self.is_current(name) {
            Some(&self.current)
        } else {
            self.others.get(name)
        }
    }

    fn is_current(&self, name: &str) -> bool {
        self.current.name().as_ref() == name
    }

    pub fn add(&mut self, name: &str, content: C) -> Outcome<C> {
        let outcome = self.staging.add(name, content);
        tracing::debug!(object = name, changed = self.staging.changed(), "staged object");

        outcome
    }

    pub fn remove(&mut self, name: &str) -> Outcome<C> {
        let outcome = self
            .staging
            .remove(name, self.current.head().map(Arc::as_ref));

        match &outcome {
            Ok(_) => {
                tracing::debug!(object = name, changed = self.staging.changed(), "staged removal")
            }
            Err(error) => tracing::debug!(object = name, %error, "removal refused"),
        }

        outcome
    }

    /// Fold the staging area into a new commit on the current branch
    ///
    /// # Returns
    ///
    /// The new commit, with a message of the form "<message>\n\t<N> objects changed"
    pub fn commit(
        &mut self,
        message: &str,
        timestamp: DateTime<FixedOffset>,
    ) -> Outcome<Arc<Commit<C>>> {
        if self.staging.is_clean() {
            tracing::debug!(branch = %self.current.name(), "nothing to commit");
            return Err(StoreError::NothingToCommit);
        }

        let changed = self.staging.changed();
        let commit_files = self
            .staging
            .build_commit_files(self.current.head().map(Arc::as_ref));
        let id = self.addresser.address(&timestamp, message);
        let commit = Arc::new(Commit::new(id, message.to_string(), timestamp, commit_files));

        self.current.push(commit.clone());
        self.staging.clear();

        tracing::debug!(
            branch = %self.current.name(),
            commit = %commit.id(),
            changed,
            "created commit"
        );

        Ok(Success::new(
            format!("{message}\n\t{changed} objects changed"),
            commit,
        ))
    }

    /// Move the current branch's head back to the commit with `id`
    ///
    /// Commits after the target are discarded from this branch. The staging
    /// area is left as it is.
    pub fn checkout_commit(&mut self, id: &str) -> Outcome<Arc<Commit<C>>> {
        let before = self.current.len();
        let commit = self
            .current
            .truncate_to(&CommitId::from(id))
            .ok_or_else(|| StoreError::CommitNotFound(id.to_string()))?;

        tracing::debug!(
            branch = %self.current.name(),
            commit = id,
            dropped = before - self.current.len(),
            "moved head"
        );

        Ok(Success::new(format!("HEAD is now at {id}."), commit))
    }

    /// Register a new branch starting from a copy of the current history
    pub fn create_branch(&mut self, name: &str) -> Outcome<Branch<C>> {
        if self.branch(name).is_some() {
            return Err(StoreError::BranchAlreadyExists(name.to_string()));
        }

        let branch = self.current.fork(BranchName::from(name));
        self.others.insert(branch.name().clone(), branch.clone());

        tracing::debug!(
            branch = name,
            from = %self.current.name(),
            commits = branch.len(),
            "created branch"
        );

        Ok(Success::new(format!("Created branch {name}."), branch))
    }

    pub fn checkout_branch(&mut self, name: &str) -> Outcome<Branch<C>> {
        if !self.is_current(name) {
            let target = self
                .others
                .remove(name)
                .ok_or_else(|| StoreError::BranchNotFound(name.to_string()))?;
            let previous = std::mem::replace(&mut self.current, target);
            self.others.insert(previous.name().clone(), previous);
        }

        tracing::debug!(branch = name, "switched branch");

        Ok(Success::new(
            format!("Switched to branch {name}."),
            self.current.clone(),
        ))
    }

    pub fn remove_branch(&mut self, name: &str) -> Outcome<Branch<C>> {
        if self.is_current(name) {
            return Err(StoreError::CannotRemoveCurrentBranch);
        }

        let removed = self
            .others
            .remove(name)
            .ok_or_else(|| StoreError::BranchNotFound(name.to_string()))?;

        tracing::debug!(branch = name, "removed branch");

        Ok(Success::new(format!("Removed branch {name}."), removed))
    }

    pub fn list_branches(&self) -> Outcome<()> {
        let branches = self.branches();

        Ok(Success::message_only(render_branch_list(
            branches.iter().map(|branch| branch.name()),
            self.current.name(),
        )))
    }

    pub fn log(&self, date_format: &str) -> Outcome<()> {
        if self.current.is_empty() {
            return Err(StoreError::NoCommitsYet(self.current.name().to_string()));
        }

        Ok(Success::message_only(render_history(
            self.current.commits(),
            date_format,
        )))
    }

    pub fn head(&self) -> Outcome<Arc<Commit<C>>> {
        let commit = self
            .current
            .head()
            .ok_or_else(|| StoreError::NoCommitsYet(self.current.name().to_string()))?;

        Ok(Success::new(commit.message().to_string(), commit.clone()))
    }

    pub fn get(&self, name: &str) -> Outcome<C> {
        let content = self
            .current
            .head()
            .and_then(|commit| commit.object(name))
            .ok_or_else(|| StoreError::ObjectNotCommitted(name.to_string()))?;

        Ok(Success::new(format!("Found object {name}."), content.clone()))
    }
}
