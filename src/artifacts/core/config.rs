//! Repository configuration
//!
//! All settings have defaults; `load_from_env` overrides them from
//! `OBJSTORE_*` variables, mirroring how commit authorship is read from
//! `GIT_AUTHOR_*` in git.

use crate::artifacts::branch::branch_name::DEFAULT_BRANCH;
use crate::artifacts::core::LOG_DATE_FORMAT;
use anyhow::Context;
use chrono::{DateTime, FixedOffset};

pub const INITIAL_BRANCH_VAR: &str = "OBJSTORE_INITIAL_BRANCH";
pub const LOG_DATE_FORMAT_VAR: &str = "OBJSTORE_LOG_DATE_FORMAT";
pub const COMMIT_DATE_VAR: &str = "OBJSTORE_COMMIT_DATE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Branch created (and made current) when the repository is constructed
    pub initial_branch: String,
    /// chrono format string for the `Date:` line of `log`
    pub log_date_format: String,
    /// When set, every commit is stamped with this instant instead of the wall clock
    pub commit_date: Option<DateTime<FixedOffset>>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            initial_branch: DEFAULT_BRANCH.to_string(),
            log_date_format: LOG_DATE_FORMAT.to_string(),
            commit_date: None,
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables
    ///
    /// Reads OBJSTORE_INITIAL_BRANCH, OBJSTORE_LOG_DATE_FORMAT and
    /// OBJSTORE_COMMIT_DATE. Unset variables keep their defaults.
    pub fn load_from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = StoreConfig::default();

        if let Some(branch) = lookup(INITIAL_BRANCH_VAR) {
            if branch.is_empty() {
                anyhow::bail!("{INITIAL_BRANCH_VAR} cannot be empty");
            }
            config.initial_branch = branch;
        }

        if let Some(format) = lookup(LOG_DATE_FORMAT_VAR) {
            config.log_date_format = format;
        }

        if let Some(date_str) = lookup(COMMIT_DATE_VAR) {
            let date = parse_date(&date_str)
                .with_context(|| format!("invalid {COMMIT_DATE_VAR}: {date_str}"))?;
            config.commit_date = Some(date);
        }

        Ok(config)
    }
}

/// Parse RFC 2822 or `%Y-%m-%d %H:%M:%S %z` dates
fn parse_date(date_str: &str) -> anyhow::Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(date_str)
        .or_else(|_| DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S %z"))
        .context("expected RFC 2822 or '%Y-%m-%d %H:%M:%S %z'")
}
