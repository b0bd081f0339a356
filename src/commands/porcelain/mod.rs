//! Porcelain commands
//!
//! Each command is a thin method on [`Repository`](crate::areas::repository::Repository)
//! that forwards to the branch manager and returns its outcome unchanged.
//!
//! ## Commands
//!
//! - `add`: Stage an object
//! - `remove`: Stage the removal of an object
//! - `commit`: Snapshot the staging area
//! - `checkout`: Move the current branch back to an earlier commit
//! - `get`: Read an object from the head commit
//! - `log`: Render the current branch's history
//! - `head`: Read the most recent commit
//! - `branch`: Create, switch, remove, or list branches

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod get;
pub mod head;
pub mod log;
pub mod remove;
