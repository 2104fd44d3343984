//! Core library for sous, a hands-free cooking assistant.
//!
//! sous turns an AI assistant's free-form answer into a structured
//! [`Recipe`] and walks the cook through it one step at a time with a single
//! countdown timer.
//!
//! - [`extractor`]: classify chat text and extract a recipe through a chain
//!   of fallbacks that always yields at least one step
//! - [`session`]: the cooking session state machine (step navigation and the
//!   timer)
//! - [`guide`]: wires a session to [`GuideSettings`] and a
//!   [`narration::Speaker`]
//! - [`voice`]: maps recognized utterances to guide commands
//! - [`cookbook`]: saved recipes and cooking history in SQLite
//! - [`display`]: markdown formatting shared by every interface
//!
//! # Quick Start
//!
//! ```rust
//! use sous_core::{extract, CookingSession};
//!
//! let text = "레시피: 토마토 파스타\n\
//!             재료: 파스타면, 토마토 소스\n\
//!             1. 물을 끓이고 면을 10분 삶는다\n\
//!             2. 소스를 넣고 3분 볶는다";
//!
//! let recipe = extract(text).expect("looks like a recipe");
//! assert_eq!(recipe.cooking_time_minutes, 13);
//!
//! let mut session = CookingSession::new(recipe)?;
//! session.start_timer(600);
//! session.next_step();
//! assert_eq!(session.current_step_index(), 1);
//! # Ok::<(), sous_core::SousError>(())
//! ```

pub mod config;
pub mod cookbook;
pub mod db;
pub mod display;
pub mod error;
pub mod extractor;
pub mod guide;
pub mod models;
pub mod narration;
pub mod params;
pub mod session;
pub mod voice;

pub use config::GuideSettings;
pub use cookbook::{Cookbook, CookbookBuilder};
pub use db::Database;
pub use display::{OperationStatus, RecipeSummaries};
pub use error::{Result, SousError};
pub use extractor::{extract, extract_detailed, is_recipe_text, Extraction, StepSource};
pub use guide::{CookingGuide, GuideCommand};
pub use models::{Completion, Recipe, RecipeId, RecipeSummary, Step, TimerState};
pub use session::{CookingSession, SessionEvent, SessionSnapshot};
