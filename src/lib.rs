//! todo - Personal Task List Library
//!
//! This library provides the core functionality for the todo CLI tool:
//! an in-memory task store with stable, never-reused identifiers and a
//! JSON persistence layer.
//!
//! # Core Concepts
//!
//! - **Tasks**: short text entries with a stable identifier and a
//!   completion flag
//! - **Identifiers vs. positions**: identifiers never change and are never
//!   reused; the 1-based positions shown by `list` shift after deletions
//! - **Persistence**: the whole store is written to a single JSON file on
//!   every invocation; a missing file loads as an empty store
//!
//! # Module Organization
//!
//! - `cli`: command-line interface using clap
//! - `config`: configuration loading and data file resolution
//! - `error`: error types and result aliases
//! - `output`: human and JSON output rendering
//! - `storage`: persistence of the task store
//! - `task`: the in-memory task store and its operations

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod storage;
pub mod task;

pub use error::{Error, Result};
