use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::outcome::Outcome;
use std::sync::Arc;

impl<C: Clone> Repository<C> {
    /// Reset the current branch to the commit with `id`, dropping later commits
    pub fn checkout(&mut self, id: &str) -> Outcome<Arc<Commit<C>>> {
        self.manager_mut().checkout_commit(id)
    }
}
