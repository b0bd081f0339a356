//! Scripted repository operations
//!
//! An [`Operation`] is the data form of one façade call. A sequence of them
//! can be replayed against a repository, which is how repositories are set up
//! in one expression (see [`Repository::init`]).

use crate::areas::repository::Repository;
use crate::errors::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation<C> {
    Add { name: String, content: C },
    Remove { name: String },
    Commit { message: String },
    Checkout { id: String },
    CreateBranch { name: String },
    CheckoutBranch { name: String },
    RemoveBranch { name: String },
}

impl<C> Operation<C> {
    pub fn add(name: impl Into<String>, content: C) -> Self {
        Operation::Add {
            name: name.into(),
            content,
        }
    }

    pub fn remove(name: impl Into<String>) -> Self {
        Operation::Remove { name: name.into() }
    }

    pub fn commit(message: impl Into<String>) -> Self {
        Operation::Commit {
            message: message.into(),
        }
    }

    pub fn checkout(id: impl Into<String>) -> Self {
        Operation::Checkout { id: id.into() }
    }

    pub fn create_branch(name: impl Into<String>) -> Self {
        Operation::CreateBranch { name: name.into() }
    }

    pub fn checkout_branch(name: impl Into<String>) -> Self {
        Operation::CheckoutBranch { name: name.into() }
    }

    pub fn remove_branch(name: impl Into<String>) -> Self {
        Operation::RemoveBranch { name: name.into() }
    }
}

impl<C> std::fmt::Display for Operation<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add { name, .. } => write!(f, "add {name}"),
            Operation::Remove { name } => write!(f, "remove {name}"),
            Operation::Commit { message } => write!(f, "commit {message:?}"),
            Operation::Checkout { id } => write!(f, "checkout {id}"),
            Operation::CreateBranch { name } => write!(f, "branch create {name}"),
            Operation::CheckoutBranch { name } => write!(f, "branch checkout {name}"),
            Operation::RemoveBranch { name } => write!(f, "branch remove {name}"),
        }
    }
}

impl<C: Clone> Repository<C> {
    /// Run one operation
    ///
    /// # Returns
    ///
    /// The success message, or the error the operation failed with
    pub fn apply(&mut self, operation: Operation<C>) -> Result<String, StoreError> {
        let message = match operation {
            Operation::Add { name, content } => self.add(&name, content)?.message().to_string(),
            Operation::Remove { name } => self.remove(&name)?.message().to_string(),
            Operation::Commit { message } => self.commit(&message)?.message().to_string(),
            Operation::Checkout { id } => self.checkout(&id)?.message().to_string(),
            Operation::CreateBranch { name } => self.branch().create(&name)?.message().to_string(),
            Operation::CheckoutBranch { name } => {
                self.branch().checkout(&name)?.message().to_string()
            }
            Operation::RemoveBranch { name } => self.branch().remove(&name)?.message().to_string(),
        };

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::outcome::Report;
    use pretty_assertions::assert_eq;

    #[test]
    fn operations_describe_themselves() {
        assert_eq!(Operation::add("a", 1).to_string(), "add a");
        assert_eq!(Operation::<i32>::commit("m").to_string(), "commit \"m\"");
        assert_eq!(
            Operation::<i32>::create_branch("dev").to_string(),
            "branch create dev"
        );
    }

    #[test]
    fn init_replays_operations_in_order() -> anyhow::Result<()> {
        let repository = Repository::init([
            Operation::add("value", 21),
            Operation::commit("message"),
            Operation::create_branch("dev"),
        ]);

        assert_eq!(repository.head().message(), "message");
        assert_eq!(repository.get("value")?.into_payload(), 21);
        assert!(repository.manager().branch("dev").is_some());
        Ok(())
    }

    #[test]
    fn init_keeps_going_after_a_failure() -> anyhow::Result<()> {
        let repository = Repository::init([
            Operation::add("value", 21),
            Operation::remove("missing"),
            Operation::commit("message"),
        ]);

        assert_eq!(repository.head().message(), "message");
        assert_eq!(repository.get("value")?.into_payload(), 21);
        Ok(())
    }

    #[test]
    fn apply_each_reports_every_operation() {
        let mut repository = Repository::new();

        let results = repository.apply_each([
            Operation::add("value", 21),
            Operation::commit("message"),
            Operation::commit("again"),
            Operation::add("later", 0),
        ]);

        assert_eq!(
            results,
            vec![
                Ok("Added value to stage.".to_string()),
                Ok("message\n\t1 objects changed".to_string()),
                Err(StoreError::NothingToCommit),
                Ok("Added later to stage.".to_string()),
            ]
        );
    }

    #[test]
    fn apply_all_stops_at_first_failure() {
        let mut repository = Repository::new();

        let error = repository
            .apply_all([
                Operation::add("value", 21),
                Operation::commit("message"),
                Operation::commit("again"),
                Operation::add("never", 0),
            ])
            .expect_err("second commit has nothing to commit");

        let chain = format!("{error:#}");
        assert!(chain.contains("operation #2 (commit \"again\") failed"));
        assert!(chain.contains("Nothing to commit, working directory clean."));
        assert!(repository.manager().staging().staged("never").is_none());
    }

    #[test]
    fn apply_returns_success_message() {
        let mut repository = Repository::new();

        assert_eq!(
            repository.apply(Operation::add("a", 1)),
            Ok("Added a to stage.".to_string())
        );
        assert_eq!(
            repository.apply(Operation::remove_branch("master")),
            Err(StoreError::CannotRemoveCurrentBranch)
        );
    }
}
