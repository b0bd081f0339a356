use crate::areas::repository::Repository;
use crate::artifacts::outcome::Outcome;

impl<C: Clone> Repository<C> {
    /// Stage `content` under `name`; always succeeds
    pub fn add(&mut self, name: &str, content: C) -> Outcome<C> {
        self.manager_mut().add(name, content)
    }
}
