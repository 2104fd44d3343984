//! Result wrappers for displaying cookbook operation outcomes.

use std::fmt;

use crate::models::{Recipe, RecipeSummary};

/// Outcome of saving a recipe to the cookbook.
#[derive(Debug)]
pub struct SaveResult {
    pub summary: RecipeSummary,
}

impl SaveResult {
    pub fn new(summary: RecipeSummary) -> Self {
        Self { summary }
    }
}

impl fmt::Display for SaveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved recipe with ID: {}", self.summary.id)?;
        writeln!(f)?;
        write!(f, "{}", self.summary)
    }
}

/// Outcome of deleting a cookbook entry.
#[derive(Debug)]
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Recipe> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted recipe '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}
