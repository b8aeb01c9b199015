//! File-based storage for the board.
//!
//! ## File Format
//!
//! One field per line: the student count, then each student's name and
//! year, then the task count, then each task's priority, 1-based assignee
//! and description. Tasks are stored in heap array order.
//!
//! ```text
//! 2
//! Ana
//! 1
//! Theo
//! 3
//! 1
//! 9
//! 2
//! Prepare slides
//! ```
//!
//! ## Components
//!
//! - [`BoardRepository`]: load and save the project's board
//! - [`parse_lines`] / [`render_lines`]: the save format
//! - [`parse_console`]: the whitespace-separated import format

mod lines;
mod repository;

pub use lines::{parse_console, parse_lines, render_lines};
pub use repository::{BoardRepository, atomic_write};
