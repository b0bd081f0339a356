//! Staging area
//!
//! Collects the adds and removals made since the last commit. Nothing here is
//! visible through `get` until a commit folds it into a snapshot.
//!
//! ## Data Structures
//!
//! - `added`: Pending content keyed by object name
//! - `removed`: Names to drop from the next snapshot
//! - `changed`: Number of changes recorded since the last commit

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::outcome::{Outcome, Success};
use crate::errors::StoreError;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub struct StagingArea<C> {
    added: BTreeMap<String, C>,
    removed: BTreeSet<String>,
    changed: usize,
}

impl<C> Default for StagingArea<C> {
    fn default() -> Self {
        StagingArea {
            added: BTreeMap::new(),
            removed: BTreeSet::new(),
            changed: 0,
        }
    }
}

impl<C: Clone> StagingArea<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changed(&self) -> usize {
        self.changed
    }

    pub fn is_clean(&self) -> bool {
        self.changed == 0
    }

    /// Content currently staged for addition under `name`
    pub fn staged(&self, name: &str) -> Option<&C> {
        self.added.get(name)
    }

    pub fn is_staged_for_removal(&self, name: &str) -> bool {
        self.removed.contains(name)
    }

    /// Stage `content` under `name`
    ///
    /// Re-adding a name that is already staged overwrites its content without
    /// counting a second change. A pending removal of the same name still
    /// applies at commit time.
    pub fn add(&mut self, name: &str, content: C) -> Outcome<C> {
        if !self.added.contains_key(name) {
            self.changed += 1;
        }
        self.added.insert(name.to_string(), content.clone());

        Ok(Success::new(format!("Added {name} to stage."), content))
    }

    /// Mark `name` for removal in the next commit
    ///
    /// A staged add is un-staged first; otherwise the name must exist in
    /// `head`. Fails without touching any state when neither holds.
    pub fn remove(&mut self, name: &str, head: Option<&Commit<C>>) -> Outcome<C> {
        let removed = match self.added.remove(name) {
            Some(content) => content,
            None => head
                .and_then(|commit| commit.object(name))
                .cloned()
                .ok_or_else(|| StoreError::ObjectNotCommitted(name.to_string()))?,
        };

        self.removed.insert(name.to_string());
        self.changed += 1;

        Ok(Success::new(format!("Added {name} for removal."), removed))
    }

    /// Candidate snapshot for the next commit
    ///
    /// Starts from `head`'s files (or nothing), overlays staged adds and
    /// drops staged removals.
    pub fn build_commit_files(&self, head: Option<&Commit<C>>) -> BTreeMap<String, C> {
        let mut files = head
            .map(|commit| commit.commit_files().clone())
            .unwrap_or_default();

        files.extend(
            self.added
                .iter()
                .map(|(name, content)| (name.clone(), content.clone())),
        );
        files.retain(|name, _| !self.removed.contains(name));

        files
    }

    pub fn clear(&mut self) {
        self.added.clear();
        self.removed.clear();
        self.changed = 0;
    }
}
