//! Collection wrappers for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{Completion, RecipeSummary};

/// Newtype wrapper for displaying saved recipe summaries.
///
/// # Examples
///
/// ```rust
/// use sous_core::{display::RecipeSummaries, models::{Recipe, RecipeSummary, Step}};
/// use jiff::Timestamp;
///
/// let recipe = Recipe::new("김치볶음밥", vec![], vec![Step::new(1, "볶는다", 5)]);
/// let summaries = RecipeSummaries(vec![RecipeSummary::from_recipe(&recipe, Timestamp::now())]);
/// assert!(summaries.to_string().contains("김치볶음밥"));
///
/// assert_eq!(RecipeSummaries(vec![]).to_string(), "No recipes found.\n");
/// ```
#[derive(Debug, Clone)]
pub struct RecipeSummaries(pub Vec<RecipeSummary>);

impl RecipeSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&RecipeSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecipeSummary> {
        self.0.iter()
    }
}

impl Index<usize> for RecipeSummaries {
    type Output = RecipeSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for RecipeSummaries {
    type Item = RecipeSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecipeSummaries {
    type Item = &'a RecipeSummary;
    type IntoIter = std::slice::Iter<'a, RecipeSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RecipeSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No recipes found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}

/// Cooking history for one recipe.
#[derive(Debug, Clone)]
pub struct Completions(pub Vec<Completion>);

impl fmt::Display for Completions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "Not cooked yet.");
        }
        writeln!(f, "## History")?;
        writeln!(f)?;
        for completion in &self.0 {
            write!(f, "{completion}")?;
        }
        Ok(())
    }
}
