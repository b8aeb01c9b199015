use crate::error::Result;
use crate::validation::validate_priority;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of each named band, best first.
const PRIORITY_NAMES: [(i32, &str); 5] = [
    (90, "critical"),
    (70, "high"),
    (40, "normal"),
    (10, "low"),
    (i32::MIN, "deferred"),
];

/// A task priority. Larger numbers are more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Priority(i32);

impl Priority {
    pub fn new(value: i32) -> Result<Self> {
        validate_priority(value)?;
        Ok(Self(value))
    }

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn name(self) -> &'static str {
        PRIORITY_NAMES
            .iter()
            .find(|(floor, _)| self.0 >= *floor)
            .map(|(_, name)| *name)
            .unwrap_or("deferred")
    }
}

impl TryFrom<i32> for Priority {
    type Error = crate::error::TaskheapError;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Priority> for i32 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.name())
    }
}
