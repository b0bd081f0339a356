use crate::areas::repository::Repository;
use crate::artifacts::branch::branch::Branch;
use crate::artifacts::outcome::Outcome;

/// Branch sub-commands, borrowed from a repository via [`Repository::branch`]
pub struct BranchCommands<'r, C> {
    repository: &'r mut Repository<C>,
}

impl<C: Clone> Repository<C> {
    pub fn branch(&mut self) -> BranchCommands<'_, C> {
        BranchCommands { repository: self }
    }
}

impl<C: Clone> BranchCommands<'_, C> {
    /// Create `name` from a copy of the current branch's history
    pub fn create(&mut self, name: &str) -> Outcome<Branch<C>> {
        self.repository.manager_mut().create_branch(name)
    }

    pub fn checkout(&mut self, name: &str) -> Outcome<Branch<C>> {
        self.repository.manager_mut().checkout_branch(name)
    }

    /// Delete `name`; the current branch cannot be removed
    pub fn remove(&mut self, name: &str) -> Outcome<Branch<C>> {
        self.repository.manager_mut().remove_branch(name)
    }

    pub fn list(&self) -> Outcome<()> {
        self.repository.manager().list_branches()
    }
}
