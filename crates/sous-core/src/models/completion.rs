//! Completion record for a finished cooking session.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::RecipeId;

/// One finished run of the cooking guide over a saved recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Completion {
    /// Row ID of the completion
    pub id: u64,
    /// The recipe that was cooked
    pub recipe_id: RecipeId,
    /// Optional 1–5 rating given after cooking
    pub rating: Option<u8>,
    /// When the session was completed (UTC)
    pub completed_at: Timestamp,
}
