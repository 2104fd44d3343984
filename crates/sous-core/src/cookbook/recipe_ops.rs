//! Cookbook operations that run database work on blocking threads.

use tokio::task;

use super::Cookbook;
use crate::{
    db::Database,
    error::{Result, SousError},
    models::{Completion, Recipe, RecipeSummary},
    params::{ListRecipes, RecipeRef, RecordCompletion},
};

fn join_error(e: task::JoinError) -> SousError {
    SousError::Configuration {
        message: format!("Task join error: {e}"),
    }
}

impl Cookbook {
    /// Saves a recipe, replacing an earlier save with the same ID.
    pub async fn save_recipe(&self, recipe: &Recipe) -> Result<RecipeSummary> {
        let db_path = self.db_path.clone();
        let recipe = recipe.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_recipe(&recipe)
        })
        .await
        .map_err(join_error)?
    }

    /// Retrieves a saved recipe by ID.
    pub async fn get_recipe(&self, params: &RecipeRef) -> Result<Option<Recipe>> {
        let db_path = self.db_path.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_recipe(&id)
        })
        .await
        .map_err(join_error)?
    }

    /// Lists saved recipes with cooking statistics, newest first.
    pub async fn list_recipes(&self, params: &ListRecipes) -> Result<Vec<RecipeSummary>> {
        let db_path = self.db_path.clone();
        let title = params.title.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_recipes(title.as_deref())
        })
        .await
        .map_err(join_error)?
    }

    /// Deletes a saved recipe and its completion history.
    pub async fn delete_recipe(&self, params: &RecipeRef) -> Result<Recipe> {
        let db_path = self.db_path.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_recipe(&id)
        })
        .await
        .map_err(join_error)?
    }

    /// Records a finished cooking session with an optional 1–5 rating.
    pub async fn record_completion(&self, params: &RecordCompletion) -> Result<Completion> {
        let db_path = self.db_path.clone();
        let id = params.id.clone();
        let rating = params.rating;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.record_completion(&id, rating)
        })
        .await
        .map_err(join_error)?
    }

    /// Lists completions for a saved recipe, newest first.
    pub async fn list_completions(&self, params: &RecipeRef) -> Result<Vec<Completion>> {
        let db_path = self.db_path.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_completions(&id)
        })
        .await
        .map_err(join_error)?
    }
}
