use crate::areas::branches::BranchManager;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::addresser::ContentAddresser;
use crate::artifacts::core::clock::{Clock, FixedClock, SystemClock};
use crate::artifacts::core::config::StoreConfig;
use crate::commands::operation::Operation;
use crate::errors::StoreError;
use anyhow::Context;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// A single in-memory repository
///
/// All state lives in the instance; any number of repositories can coexist
/// in one process. Commit-level operations live in `commands::porcelain`.
pub struct Repository<C> {
    manager: BranchManager<C>,
    clock: Box<dyn Clock>,
    config: StoreConfig,
}

impl<C: std::fmt::Debug> std::fmt::Debug for Repository<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("manager", &self.manager)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<C: Clone> Default for Repository<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clone> Repository<C> {
    /// Create a repository with the default configuration and the wall clock
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        let clock: Box<dyn Clock> = match config.commit_date {
            Some(date) => Box::new(FixedClock::new(date)),
            None => Box::new(SystemClock),
        };

        Repository {
            manager: BranchManager::new(BranchName::new(config.initial_branch.clone())),
            clock,
            config,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_addresser(mut self, addresser: impl ContentAddresser + 'static) -> Self {
        self.manager.set_addresser(Box::new(addresser));
        self
    }

    /// Build a repository by applying `operations` in order
    ///
    /// Every operation is applied; a failing one leaves the repository as it
    /// was and the next one runs.
    pub fn init(operations: impl IntoIterator<Item = Operation<C>>) -> Self {
        let mut repository = Self::new();
        repository.apply_each(operations);

        repository
    }

    /// Apply every operation in `operations`, collecting each result
    pub fn apply_each(
        &mut self,
        operations: impl IntoIterator<Item = Operation<C>>,
    ) -> Vec<Result<String, StoreError>> {
        operations
            .into_iter()
            .enumerate()
            .map(|(index, operation)| {
                let description = operation.to_string();
                let result = self.apply(operation);
                if let Err(error) = &result {
                    tracing::debug!(index, operation = %description, %error, "operation failed");
                }

                result
            })
            .collect()
    }

    /// Apply `operations` in order, stopping at the first failure
    pub fn apply_all(
        &mut self,
        operations: impl IntoIterator<Item = Operation<C>>,
    ) -> anyhow::Result<()> {
        for (index, operation) in operations.into_iter().enumerate() {
            let description = operation.to_string();
            self.apply(operation)
                .with_context(|| format!("operation #{index} ({description}) failed"))?;
        }

        Ok(())
    }

    pub fn manager(&self) -> &BranchManager<C> {
        &self.manager
    }

    pub(crate) fn manager_mut(&mut self) -> &mut BranchManager<C> {
        &mut self.manager
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

/// A repository behind one async mutex
///
/// Every operation reads and then writes the same state, so the whole
/// repository is guarded by a single lock.
pub struct SharedRepository<C> {
    inner: Arc<Mutex<Repository<C>>>,
}

impl<C> Clone for SharedRepository<C> {
    fn clone(&self) -> Self {
        SharedRepository {
            inner: self.inner.clone(),
        }
    }
}

impl<C> SharedRepository<C> {
    pub fn new(repository: Repository<C>) -> Self {
        SharedRepository {
            inner: Arc::new(Mutex::new(repository)),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, Repository<C>> {
        self.inner.lock().await
    }
}

impl<C> From<Repository<C>> for SharedRepository<C> {
    fn from(repository: Repository<C>) -> Self {
        Self::new(repository)
    }
}
