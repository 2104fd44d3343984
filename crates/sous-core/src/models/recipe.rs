//! Recipe model definition and identifier generation.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Step;

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Opaque recipe identifier.
///
/// Generated identifiers combine the current time in milliseconds with a
/// process-wide sequence number, so two extractions within the same
/// millisecond still get distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        let millis = Timestamp::now().as_millisecond();
        let sequence = NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("{millis}-{sequence}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecipeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A structured recipe: title, ingredients and ordered steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identifier assigned when the recipe was extracted or created
    #[serde(default = "RecipeId::generate")]
    pub id: RecipeId,

    /// Recipe title
    pub title: String,

    /// Ingredient lines in source order
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Ordered cooking steps
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Total cooking time in minutes
    #[serde(default)]
    pub cooking_time_minutes: u32,
}

impl Recipe {
    /// Title used when none can be found.
    pub const DEFAULT_TITLE: &'static str = "레시피";

    /// Cooking time reported when no step carries a timer.
    pub const DEFAULT_COOKING_TIME_MINUTES: u32 = 30;

    /// Builds a recipe with a fresh id, renumbered steps and a computed
    /// cooking time.
    pub fn new(title: impl Into<String>, ingredients: Vec<String>, steps: Vec<Step>) -> Self {
        let mut recipe = Self {
            id: RecipeId::generate(),
            title: title.into(),
            ingredients,
            steps,
            cooking_time_minutes: 0,
        };
        recipe.normalize();
        recipe
    }

    /// Replaces the identifier.
    pub fn with_id(mut self, id: impl Into<RecipeId>) -> Self {
        self.id = id.into();
        self
    }

    /// Restores the step numbering invariant and recomputes the cooking time.
    ///
    /// Recipes that arrive from outside the extractor (JSON, the cookbook)
    /// are normalized before a session runs over them.
    pub fn normalize(&mut self) {
        for (index, step) in self.steps.iter_mut().enumerate() {
            step.step_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
        }
        self.cooking_time_minutes = cooking_time_for(&self.steps);
    }

    /// Number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// Sum of the step timers, or the default cooking time when that sum is 0.
pub fn cooking_time_for(steps: &[Step]) -> u32 {
    let total = steps
        .iter()
        .fold(0u32, |acc, step| acc.saturating_add(step.timer_minutes));
    if total == 0 {
        Recipe::DEFAULT_COOKING_TIME_MINUTES
    } else {
        total
    }
}
