//! Data models for recipes, steps and the cookbook.
//!
//! These are plain data types. Display implementations live in
//! [`crate::display::models`] so presentation stays out of the model
//! definitions.
//!
//! # Examples
//!
//! ```rust
//! use sous_core::models::{Recipe, Step};
//!
//! let recipe = Recipe::new(
//!     "된장찌개",
//!     vec!["된장".to_string(), "두부".to_string()],
//!     vec![
//!         Step::new(1, "육수를 끓인다", 10),
//!         Step::new(2, "된장을 푼다", 0),
//!     ],
//! );
//! assert_eq!(recipe.cooking_time_minutes, 10);
//! println!("{}", recipe); // markdown recipe card
//! ```

pub mod completion;
pub mod recipe;
pub mod status;
pub mod step;
pub mod summary;

#[cfg(test)]
mod tests;

pub use completion::Completion;
pub use recipe::{Recipe, RecipeId};
pub use status::TimerState;
pub use step::Step;
pub use summary::RecipeSummary;
