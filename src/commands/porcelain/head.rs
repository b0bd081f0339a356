use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::outcome::Outcome;
use std::sync::Arc;

impl<C: Clone> Repository<C> {
    /// Most recent commit of the current branch; the message is the commit's message
    pub fn head(&self) -> Outcome<Arc<Commit<C>>> {
        self.manager().head()
    }
}
