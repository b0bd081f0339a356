use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::outcome::Outcome;
use std::sync::Arc;

impl<C: Clone> Repository<C> {
    /// Commit the staging area, stamped with the repository clock
    pub fn commit(&mut self, message: &str) -> Outcome<Arc<Commit<C>>> {
        let timestamp = self.clock().now();
        self.manager_mut().commit(message, timestamp)
    }
}
