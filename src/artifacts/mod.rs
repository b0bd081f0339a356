//! Object store data structures
//!
//! - `branch`: Branch names and commit sequences
//! - `core`: Injectable collaborators (clock, content addresser) and configuration
//! - `log`: Plain-text rendering of history and branch listings
//! - `objects`: Commits and their identifiers
//! - `outcome`: Uniform success/failure wrapper returned by every operation

pub mod branch;
pub mod core;
pub mod log;
pub mod objects;
pub mod outcome;
