//! Core repository components
//!
//! This module contains the stateful building blocks of a repository:
//!
//! - `branches`: Branch registry, current branch and commit orchestration
//! - `repository`: Caller-facing façade and its thread-safe wrapper
//! - `staging`: Staging area for pending additions and removals

pub mod branches;
pub mod repository;
pub mod staging;
