//! Input validation for students and tasks.

use crate::error::{Result, TaskheapError};

/// Lowest accepted task priority.
pub const MIN_PRIORITY: i32 = 0;

/// Highest accepted task priority.
pub const MAX_PRIORITY: i32 = 100;

/// Maximum allowed length for a student name.
pub const MAX_NAME_LENGTH: usize = 64;

/// Highest accepted study year.
pub const MAX_YEAR: u32 = 10;

/// Maximum allowed length for a task description.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Validates a task priority.
pub fn validate_priority(priority: i32) -> Result<()> {
    if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
        return Err(TaskheapError::Validation(format!(
            "Priority {} is outside the allowed range {}..={}",
            priority, MIN_PRIORITY, MAX_PRIORITY
        )));
    }
    Ok(())
}

/// Validates a student name.
///
/// Names are stored one per line and read back as a single whitespace token
/// by the console importer, so they cannot contain whitespace.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TaskheapError::Validation("Name cannot be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(TaskheapError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(TaskheapError::Validation(
            "Name cannot contain whitespace".to_string(),
        ));
    }
    Ok(())
}

/// Validates a study year.
pub fn validate_year(year: u32) -> Result<()> {
    if year == 0 || year > MAX_YEAR {
        return Err(TaskheapError::Validation(format!(
            "Year must be between 1 and {}",
            MAX_YEAR
        )));
    }
    Ok(())
}

/// Validates a task description.
pub fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(TaskheapError::Validation(
            "Description cannot be empty".to_string(),
        ));
    }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(TaskheapError::Validation(format!(
            "Description exceeds maximum length of {} characters",
            MAX_DESCRIPTION_LENGTH
        )));
    }
    if description.contains(['\n', '\r']) {
        return Err(TaskheapError::Validation(
            "Description must be a single line".to_string(),
        ));
    }
    Ok(())
}
