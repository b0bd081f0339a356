//! An in-memory version-control object store.
//!
//! Named objects are staged with `add`/`remove`, snapshotted by `commit`, and
//! tracked along independent branches. See [`Repository`] for the call surface.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use areas::branches::BranchManager;
pub use areas::repository::{Repository, SharedRepository};
pub use areas::staging::StagingArea;
pub use artifacts::core::addresser::{ContentAddresser, Sha1Addresser};
pub use artifacts::core::clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use artifacts::core::config::StoreConfig;
pub use artifacts::branch::branch::Branch;
pub use artifacts::branch::branch_name::BranchName;
pub use artifacts::objects::commit::Commit;
pub use artifacts::objects::commit_id::CommitId;
pub use artifacts::outcome::{Outcome, Report, Success};
pub use commands::operation::Operation;
pub use commands::porcelain::branch::BranchCommands;
pub use errors::StoreError;
