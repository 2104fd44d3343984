//! Recipe extraction from free-form chat text.
//!
//! [`is_recipe_text`] is a cheap heuristic classifier; [`extract`] runs only
//! when it says yes and never returns a recipe without steps:
//!
//! ```text
//! text ─▶ title ─▶ ingredients ─▶ steps: formal markers
//!                                       └▶ numbered list
//!                                          └▶ paragraphs
//!                                             └▶ synthetic step
//! ```
//!
//! Every stage is a pure function. A stage that finds nothing returns
//! `None` and the next one runs, so malformed input degrades to the
//! synthetic step instead of failing.
//!
//! ```rust
//! use sous_core::extractor;
//!
//! let recipe = extractor::extract("레시피: 라면\n1. 물을 끓인다 3분\n2. 면을 넣는다")
//!     .expect("recipe text");
//! assert_eq!(recipe.title, "라면");
//! assert_eq!(recipe.steps.len(), 2);
//! assert!(extractor::extract("오늘 날씨가 좋네요").is_none());
//! ```

pub mod classify;
pub mod ingredients;
pub mod steps;
pub mod time;
pub mod title;

#[cfg(test)]
mod tests;

pub use classify::is_recipe_text;
pub use steps::StepSource;

use log::debug;
use serde::Serialize;

use crate::models::Recipe;

/// A recipe together with the stage its steps came from.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub recipe: Recipe,
    pub step_source: StepSource,
}

/// Parses `text` into a recipe, or `None` when it does not look like one.
pub fn extract(text: &str) -> Option<Recipe> {
    extract_detailed(text).map(|extraction| extraction.recipe)
}

/// Like [`extract`], also reporting which stage produced the steps.
pub fn extract_detailed(text: &str) -> Option<Extraction> {
    if !is_recipe_text(text) {
        debug!("text is not recipe-shaped, skipping extraction");
        return None;
    }

    let text = text.replace("\r\n", "\n");
    let title = title::extract_title(&text).unwrap_or_else(|| Recipe::DEFAULT_TITLE.to_string());
    let ingredients = ingredients::extract_ingredients(&text);
    let (step_source, steps) = steps::extract_steps(&text);

    let recipe = Recipe::new(title, ingredients, steps);
    debug!(
        "extracted recipe {} '{}' with {} step(s)",
        recipe.id,
        recipe.title,
        recipe.steps.len()
    );
    Some(Extraction {
        recipe,
        step_source,
    })
}
