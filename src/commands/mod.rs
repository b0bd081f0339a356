//! Repository operations
//!
//! - `operation`: Data form of every façade call, used to script repository setup
//! - `porcelain`: The caller-facing operations (add, commit, log, etc.)

pub mod operation;
pub mod porcelain;
