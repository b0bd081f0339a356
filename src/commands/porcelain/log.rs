use crate::areas::repository::Repository;
use crate::artifacts::outcome::Outcome;

impl<C: Clone> Repository<C> {
    /// History of the current branch, newest first, using the configured date format
    pub fn log(&self) -> Outcome<()> {
        self.manager().log(&self.config().log_date_format)
    }
}
