use super::priority::Priority;
use crate::error::Result;
use crate::validation::validate_description;
use serde::Serialize;
use std::cmp::Ordering;

/// A unit of work. Tasks compare by priority alone, so two tasks with the
/// same priority are equal as far as ordering is concerned.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub priority: Priority,
    /// Index into the board's roster.
    pub assignee: usize,
    pub description: String,
}

impl Task {
    pub fn new(priority: Priority, assignee: usize, description: impl Into<String>) -> Result<Self> {
        let description = description.into().trim().to_string();
        validate_description(&description)?;
        Ok(Self {
            priority,
            assignee,
            description,
        })
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for Task {}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Task {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}
