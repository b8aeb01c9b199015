//! Data models for taskheap.
//!
//! - [`Student`]: someone tasks are assigned to
//! - [`Task`]: a prioritized unit of work, ordered by priority alone
//! - [`Priority`]: validated integer priority with a named band
//! - [`Board`]: the roster plus the task heap

mod board;
mod priority;
mod student;
mod task;

pub use board::Board;
pub use priority::Priority;
pub use student::Student;
pub use task::Task;
