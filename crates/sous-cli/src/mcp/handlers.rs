//! MCP tool handler implementations.

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::Deserialize;
use sous_core::{
    display::OperationStatus, extract_detailed, is_recipe_text, params as core, Cookbook,
};

use super::errors::to_mcp_error;

/// Transparent wrapper that lets core parameter types travel through MCP
/// without the core depending on rmcp.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type ExtractText = McpParams<core::ExtractText>;
pub type RecipeRef = McpParams<core::RecipeRef>;
pub type ListRecipes = McpParams<core::ListRecipes>;
pub type RecordCompletion = McpParams<core::RecordCompletion>;
pub type NarrateStep = McpParams<core::NarrateStep>;

pub type McpResult = Result<CallToolResult, McpError>;

fn text_result(text: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text.into())]))
}

/// Handler implementations for the MCP server.
pub struct McpHandlers {
    cookbook: Cookbook,
}

impl McpHandlers {
    pub fn new(cookbook: Cookbook) -> Self {
        Self { cookbook }
    }

    pub fn check_recipe_text(Parameters(params): Parameters<ExtractText>) -> McpResult {
        let verdict = if is_recipe_text(&params.as_ref().text) {
            "Looks like a recipe."
        } else {
            "Not a recipe."
        };
        text_result(verdict)
    }

    pub fn extract_recipe(Parameters(params): Parameters<ExtractText>) -> McpResult {
        let Some(extraction) = extract_detailed(&params.as_ref().text) else {
            return text_result("Not a recipe.");
        };
        let json = serde_json::to_string_pretty(&extraction).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize recipe: {e}"), None)
        })?;
        text_result(json)
    }

    pub async fn save_recipe(&self, Parameters(params): Parameters<ExtractText>) -> McpResult {
        debug!("save_recipe: {} bytes", params.as_ref().text.len());

        let result = self
            .cookbook
            .save_from_text(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to save recipe", &e))?;
        text_result(result.to_string())
    }

    pub async fn list_recipes(&self, Parameters(params): Parameters<ListRecipes>) -> McpResult {
        debug!("list_recipes: {params:?}");

        let summaries = self
            .cookbook
            .list_recipes_summary(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list recipes", &e))?;

        let title = if summaries.is_empty() {
            "# No saved recipes"
        } else {
            "# Saved Recipes"
        };
        text_result(format!("{title}\n\n{summaries}"))
    }

    pub async fn show_recipe(&self, Parameters(params): Parameters<RecipeRef>) -> McpResult {
        debug!("show_recipe: {params:?}");

        let recipe = self
            .cookbook
            .show_recipe(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show recipe", &e))?;
        text_result(recipe.to_string())
    }

    pub async fn delete_recipe(&self, Parameters(params): Parameters<RecipeRef>) -> McpResult {
        debug!("delete_recipe: {params:?}");

        let result = self
            .cookbook
            .delete_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete recipe", &e))?;
        text_result(result.to_string())
    }

    pub async fn record_completion(
        &self,
        Parameters(params): Parameters<RecordCompletion>,
    ) -> McpResult {
        debug!("record_completion: {params:?}");

        let completion = self
            .cookbook
            .record_completion(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to record completion", &e))?;
        text_result(
            OperationStatus::success(format!(
                "Recorded completion {} for recipe {}",
                completion.id, completion.recipe_id
            ))
            .to_string(),
        )
    }

    pub async fn narrate_step(&self, Parameters(params): Parameters<NarrateStep>) -> McpResult {
        debug!("narrate_step: {params:?}");

        let sentence = self
            .cookbook
            .narrate_step(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to narrate step", &e))?;
        text_result(sentence)
    }
}
