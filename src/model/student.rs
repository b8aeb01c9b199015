use crate::error::Result;
use crate::validation::{validate_name, validate_year};
use serde::Serialize;
use std::fmt;

/// A person tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub name: String,
    pub year: u32,
}

impl Student {
    pub fn new(name: impl Into<String>, year: u32) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_year(year)?;
        Ok(Self { name, year })
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, year: {}}}", self.name, self.year)
    }
}
