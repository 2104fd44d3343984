//! Recipe CRUD operations and cookbook listings.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, SousError},
    models::{Recipe, RecipeId, RecipeSummary, Step},
};

const UPSERT_RECIPE_SQL: &str = "INSERT INTO recipes (id, title, ingredients, cooking_time_minutes, saved_at) VALUES (?1, ?2, ?3, ?4, ?5) \
     ON CONFLICT(id) DO UPDATE SET title = excluded.title, ingredients = excluded.ingredients, cooking_time_minutes = excluded.cooking_time_minutes";
const DELETE_RECIPE_STEPS_SQL: &str = "DELETE FROM recipe_steps WHERE recipe_id = ?1";
const INSERT_STEP_SQL: &str = "INSERT INTO recipe_steps (recipe_id, step_number, instruction, timer_minutes) VALUES (?1, ?2, ?3, ?4)";
const SELECT_RECIPE_SQL: &str =
    "SELECT id, title, ingredients, cooking_time_minutes FROM recipes WHERE id = ?1";
const SELECT_STEPS_SQL: &str = "SELECT step_number, instruction, timer_minutes FROM recipe_steps WHERE recipe_id = ?1 ORDER BY step_number";
const DELETE_RECIPE_SQL: &str = "DELETE FROM recipes WHERE id = ?1";
const CHECK_RECIPE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM recipes WHERE id = ?1)";

const SUMMARY_COLUMNS: &str =
    "id, title, step_count, cooking_time_minutes, saved_at, times_cooked, average_rating";
const SUMMARY_SQL_BY_ID: &str = "SELECT id, title, step_count, cooking_time_minutes, saved_at, times_cooked, average_rating FROM recipe_summaries WHERE id = ?1";

fn parse_timestamp(row: &Row<'_>, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<RecipeSummary> {
    Ok(RecipeSummary {
        id: RecipeId::from(row.get::<_, String>(0)?),
        title: row.get(1)?,
        step_count: row.get(2)?,
        cooking_time_minutes: row.get(3)?,
        saved_at: parse_timestamp(row, 4)?,
        times_cooked: row.get(5)?,
        average_rating: row.get(6)?,
    })
}

impl super::Database {
    /// Saves a recipe, replacing any previously saved recipe with the same
    /// ID. The recipe is normalized before it is written, so step numbers
    /// and cooking time are always consistent in storage.
    pub fn save_recipe(&mut self, recipe: &Recipe) -> Result<RecipeSummary> {
        if recipe.steps.is_empty() {
            return Err(SousError::invalid_recipe("recipe has no steps"));
        }

        let mut recipe = recipe.clone();
        recipe.normalize();

        let ingredients = serde_json::to_string(&recipe.ingredients)?;
        let now = Timestamp::now();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_RECIPE_SQL,
            params![
                recipe.id.as_str(),
                &recipe.title,
                &ingredients,
                recipe.cooking_time_minutes,
                now.to_string()
            ],
        )
        .db_context("Failed to save recipe")?;

        tx.execute(DELETE_RECIPE_STEPS_SQL, params![recipe.id.as_str()])
            .db_context("Failed to clear recipe steps")?;

        {
            let mut stmt = tx
                .prepare(INSERT_STEP_SQL)
                .db_context("Failed to prepare step insert")?;
            for step in &recipe.steps {
                stmt.execute(params![
                    recipe.id.as_str(),
                    step.step_number,
                    &step.instruction,
                    step.timer_minutes
                ])
                .db_context("Failed to insert recipe step")?;
            }
        }

        let summary = tx
            .query_row(SUMMARY_SQL_BY_ID, params![recipe.id.as_str()], summary_from_row)
            .db_context("Failed to load saved recipe summary")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(summary)
    }

    /// Retrieves a saved recipe with its steps.
    pub fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        let header = self
            .connection
            .query_row(SELECT_RECIPE_SQL, params![id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, u32>(3)?,
                ))
            })
            .optional()
            .db_context("Failed to query recipe")?;

        let Some((id, title, ingredients, cooking_time_minutes)) = header else {
            return Ok(None);
        };

        let ingredients: Vec<String> = serde_json::from_str(&ingredients)?;

        let mut stmt = self
            .connection
            .prepare(SELECT_STEPS_SQL)
            .db_context("Failed to prepare query")?;
        let steps = stmt
            .query_map(params![&id], |row| {
                Ok(Step {
                    step_number: row.get(0)?,
                    instruction: row.get(1)?,
                    timer_minutes: row.get(2)?,
                })
            })
            .db_context("Failed to query recipe steps")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch recipe steps")?;

        Ok(Some(Recipe {
            id: RecipeId::from(id),
            title,
            ingredients,
            steps,
            cooking_time_minutes,
        }))
    }

    /// Lists saved recipes, most recently saved first.
    pub fn list_recipes(&self, title_contains: Option<&str>) -> Result<Vec<RecipeSummary>> {
        let mut query = format!("SELECT {SUMMARY_COLUMNS} FROM recipe_summaries");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(title) = title_contains {
            query.push_str(" WHERE title LIKE ?");
            params_vec.push(Box::new(format!("%{title}%")));
        }

        query.push_str(" ORDER BY seq DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let summaries = stmt
            .query_map(&params_refs[..], summary_from_row)
            .db_context("Failed to query recipes")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch recipes")?;

        Ok(summaries)
    }

    /// Deletes a saved recipe along with its steps and completion history.
    /// Returns the deleted recipe.
    pub fn delete_recipe(&mut self, id: &str) -> Result<Recipe> {
        let recipe = self
            .get_recipe(id)?
            .ok_or_else(|| SousError::RecipeNotFound { id: id.to_string() })?;

        self.connection
            .execute(DELETE_RECIPE_SQL, params![id])
            .db_context("Failed to delete recipe")?;

        Ok(recipe)
    }

    /// Returns whether a recipe with the given ID is saved.
    pub fn recipe_exists(&self, id: &str) -> Result<bool> {
        self.connection
            .query_row(CHECK_RECIPE_EXISTS_SQL, params![id], |row| row.get(0))
            .db_context("Failed to check recipe existence")
    }
}
