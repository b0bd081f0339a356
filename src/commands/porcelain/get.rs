use crate::areas::repository::Repository;
use crate::artifacts::outcome::Outcome;

impl<C: Clone> Repository<C> {
    pub fn get(&self, name: &str) -> Outcome<C> {
        self.manager().get(name)
    }
}
