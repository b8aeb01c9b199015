//! # taskheap - a flat-file task tracker
//!
//! taskheap keeps a roster of students and a set of prioritized tasks.
//! Tasks live in a binary heap so the most urgent ones can be peeked at or
//! popped first. State is saved to a plain line-based file.
//!
//! ## Quick Start
//!
//! ```bash
//! taskheap init
//! taskheap student add Ana 2
//! taskheap add 80 1 Prepare the exam
//! taskheap pop -n 3
//! ```
//!
//! ## Modules
//!
//! - [`heap`]: the priority heap with configurable direction
//! - [`model`]: students, tasks, priorities and the board
//! - [`storage`]: line-based file format and the board repository
//! - [`config`]: configuration loading
//! - [`error`]: error types and result alias
//! - [`cli`]: command-line interface and interactive shell

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.taskheap.toml` discovery and defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `TaskheapError` enum and `Result<T>` type alias.
pub mod error;

/// Binary heap priority queue.
pub mod heap;

pub mod logging;

/// Data models for taskheap.
pub mod model;

/// File-based storage layer.
pub mod storage;

/// Input validation utilities.
///
/// Validates names, years, descriptions and priority ranges.
pub mod validation;

pub use error::{Result, TaskheapError};
pub use heap::{Direction, Layout, PriorityHeap};
