//! Cookbook handlers that return display-ready results for the command line
//! and MCP interfaces.

use log::info;

use super::Cookbook;
use crate::{
    display::{DeleteResult, RecipeSummaries, SaveResult},
    error::{Result, SousError},
    extractor,
    models::Recipe,
    narration,
    params::{ExtractText, ListRecipes, NarrateStep, RecipeRef},
};

impl Cookbook {
    /// Extracts a recipe from chat text and saves it.
    ///
    /// # Errors
    ///
    /// Returns `SousError::InvalidRecipe` when the text is not recognized as
    /// a recipe.
    pub async fn save_from_text(&self, params: &ExtractText) -> Result<SaveResult> {
        let recipe = extractor::extract(&params.text)
            .ok_or_else(|| SousError::invalid_recipe("text does not look like a recipe"))?;
        self.save_result(&recipe).await
    }

    /// Saves an already extracted recipe.
    pub async fn save_result(&self, recipe: &Recipe) -> Result<SaveResult> {
        let summary = self.save_recipe(recipe).await?;
        info!("Saved recipe '{}' ({})", summary.title, summary.id);
        Ok(SaveResult::new(summary))
    }

    /// Lists saved recipes as a display collection.
    pub async fn list_recipes_summary(&self, params: &ListRecipes) -> Result<RecipeSummaries> {
        Ok(RecipeSummaries(self.list_recipes(params).await?))
    }

    /// Retrieves a saved recipe, treating a missing ID as an error.
    pub async fn show_recipe(&self, params: &RecipeRef) -> Result<Recipe> {
        self.get_recipe(params)
            .await?
            .ok_or_else(|| SousError::RecipeNotFound {
                id: params.id.clone(),
            })
    }

    /// Deletes a saved recipe and wraps the removed recipe for display.
    pub async fn delete_result(&self, params: &RecipeRef) -> Result<DeleteResult<Recipe>> {
        let recipe = self.delete_recipe(params).await?;
        info!("Deleted recipe '{}' ({})", recipe.title, recipe.id);
        Ok(DeleteResult::new(recipe))
    }

    /// Produces the sentence the guide would speak for one step.
    pub async fn narrate_step(&self, params: &NarrateStep) -> Result<String> {
        let recipe = self
            .show_recipe(&RecipeRef {
                id: params.id.clone(),
            })
            .await?;

        let index = usize::try_from(params.step_number)
            .ok()
            .and_then(|n| n.checked_sub(1));
        let step = index
            .and_then(|index| recipe.steps.get(index))
            .ok_or_else(|| {
                SousError::invalid_input("step_number").with_reason(format!(
                    "must be between 1 and {}",
                    recipe.step_count()
                ))
            })?;

        Ok(narration::step_sentence(step))
    }
}
