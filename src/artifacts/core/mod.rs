//! Injectable collaborators and configuration
//!
//! - `addresser`: Maps a commit's timestamp and message to its id
//! - `clock`: Time source read at commit time
//! - `config`: Repository-wide settings, optionally loaded from the environment

pub mod addresser;
pub mod clock;
pub mod config;

/// Timestamp layout fed into the default content addresser
pub const ADDRESS_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Default date layout of `log` entries, e.g. "Fri Jan 5 09:07 2024 +0200"
pub const LOG_DATE_FORMAT: &str = "%a %b %-d %H:%M %Y %z";
