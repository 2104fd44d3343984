//! Recipe summary types for cookbook listings.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Recipe, RecipeId};

/// Summary information about a saved recipe with cooking statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Recipe ID
    pub id: RecipeId,
    /// Title of the recipe
    pub title: String,
    /// Number of steps
    pub step_count: u32,
    /// Total cooking time in minutes
    pub cooking_time_minutes: u32,
    /// When the recipe was saved to the cookbook
    pub saved_at: Timestamp,
    /// How many times the recipe was cooked to completion
    pub times_cooked: u32,
    /// Average of the ratings given on completion, if any
    pub average_rating: Option<f64>,
}

impl RecipeSummary {
    /// Create a summary for a freshly saved recipe.
    pub fn from_recipe(recipe: &Recipe, saved_at: Timestamp) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            step_count: u32::try_from(recipe.step_count()).unwrap_or(u32::MAX),
            cooking_time_minutes: recipe.cooking_time_minutes,
            saved_at,
            times_cooked: 0,
            average_rating: None,
        }
    }
}
