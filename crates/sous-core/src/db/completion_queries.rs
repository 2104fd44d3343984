//! Completion history for saved recipes.

use jiff::Timestamp;
use rusqlite::{params, types::Type};

use crate::{
    error::{DatabaseResultExt, Result, SousError},
    models::{Completion, RecipeId},
};

const INSERT_COMPLETION_SQL: &str =
    "INSERT INTO completions (recipe_id, rating, completed_at) VALUES (?1, ?2, ?3)";
const SELECT_COMPLETIONS_SQL: &str = "SELECT id, recipe_id, rating, completed_at FROM completions WHERE recipe_id = ?1 ORDER BY id DESC";

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

impl super::Database {
    /// Records a finished cooking session for a saved recipe.
    pub fn record_completion(&mut self, recipe_id: &str, rating: Option<u8>) -> Result<Completion> {
        if let Some(rating) = rating {
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(SousError::invalid_input("rating").with_reason(format!(
                    "must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
                )));
            }
        }

        if !self.recipe_exists(recipe_id)? {
            return Err(SousError::RecipeNotFound {
                id: recipe_id.to_string(),
            });
        }

        let now = Timestamp::now();
        self.connection
            .execute(
                INSERT_COMPLETION_SQL,
                params![recipe_id, rating, now.to_string()],
            )
            .db_context("Failed to record completion")?;

        Ok(Completion {
            id: self.connection.last_insert_rowid() as u64,
            recipe_id: RecipeId::from(recipe_id),
            rating,
            completed_at: now,
        })
    }

    /// Lists completions for a recipe, newest first.
    pub fn list_completions(&self, recipe_id: &str) -> Result<Vec<Completion>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COMPLETIONS_SQL)
            .db_context("Failed to prepare query")?;

        let completions = stmt.query_map(params![recipe_id], |row| {
            Ok(Completion {
                id: row.get::<_, i64>(0)? as u64,
                recipe_id: RecipeId::from(row.get::<_, String>(1)?),
                rating: row.get(2)?,
                completed_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
                })?,
            })
        })
        .db_context("Failed to query completions")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch completions")?;

        Ok(completions)
    }
}
