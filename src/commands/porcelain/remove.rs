use crate::areas::repository::Repository;
use crate::artifacts::outcome::Outcome;

impl<C: Clone> Repository<C> {
    /// Stage the removal of `name`
    ///
    /// Fails when `name` is neither staged nor present in the head commit.
    pub fn remove(&mut self, name: &str) -> Outcome<C> {
        self.manager_mut().remove(name)
    }
}
