//! MCP server for sous.
//!
//! Exposes recipe recognition, extraction and the cookbook to AI
//! assistants over the Model Context Protocol on stdio.

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use sous_core::Cookbook;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    ExtractText, ListRecipes, McpHandlers, McpResult, NarrateStep, RecipeRef, RecordCompletion,
};

const INSTRUCTIONS: &str = r#"sous turns recipes found in AI chat answers into step-by-step cooking guides.

## Core Concepts
- **Recipe**: title, ingredients and numbered steps; each step may carry a timer in minutes
- **Cookbook**: locally saved recipes with cooking history and 1-5 ratings

## Workflow
1. Use `check_recipe_text` to see whether an answer contains a recipe
2. Use `extract_recipe` to get the structured recipe as JSON
3. Use `save_recipe` to keep it, then `list_recipes` / `show_recipe` to find it again
4. Use `narrate_step` to get the sentence read aloud for a step
5. Use `record_completion` after cooking, optionally with a rating

## Tool Categories
- **Extraction**: check_recipe_text, extract_recipe
- **Cookbook**: save_recipe, list_recipes, show_recipe, delete_recipe, record_completion
- **Guide**: narrate_step"#;

/// MCP server for sous.
#[derive(Clone)]
pub struct SousMcpServer {
    cookbook: Cookbook,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SousMcpServer {
    pub fn new(cookbook: Cookbook) -> Self {
        Self {
            cookbook,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.cookbook.clone())
    }

    #[tool(
        name = "check_recipe_text",
        description = "Check whether a chat answer looks like a recipe. Cheap keyword heuristic; use it before extract_recipe."
    )]
    async fn check_recipe_text(&self, params: Parameters<ExtractText>) -> McpResult {
        McpHandlers::check_recipe_text(params)
    }

    #[tool(
        name = "extract_recipe",
        description = "Extract a structured recipe (title, ingredients, numbered steps with timer minutes, total cooking time) from a chat answer. Returns JSON, or 'Not a recipe.' when the text is not recognized."
    )]
    async fn extract_recipe(&self, params: Parameters<ExtractText>) -> McpResult {
        McpHandlers::extract_recipe(params)
    }

    #[tool(
        name = "save_recipe",
        description = "Extract a recipe from a chat answer and save it to the local cookbook. Returns the new recipe ID."
    )]
    async fn save_recipe(&self, params: Parameters<ExtractText>) -> McpResult {
        self.handlers().save_recipe(params).await
    }

    #[tool(
        name = "list_recipes",
        description = "List saved recipes, newest first, with step count, cooking time, times cooked and average rating. Optionally filter by title."
    )]
    async fn list_recipes(&self, params: Parameters<ListRecipes>) -> McpResult {
        self.handlers().list_recipes(params).await
    }

    #[tool(
        name = "show_recipe",
        description = "Show a saved recipe with its ingredients and steps."
    )]
    async fn show_recipe(&self, params: Parameters<RecipeRef>) -> McpResult {
        self.handlers().show_recipe(params).await
    }

    #[tool(
        name = "delete_recipe",
        description = "Delete a saved recipe together with its cooking history."
    )]
    async fn delete_recipe(&self, params: Parameters<RecipeRef>) -> McpResult {
        self.handlers().delete_recipe(params).await
    }

    #[tool(
        name = "record_completion",
        description = "Record that a saved recipe was cooked, with an optional rating from 1 to 5."
    )]
    async fn record_completion(&self, params: Parameters<RecordCompletion>) -> McpResult {
        self.handlers().record_completion(params).await
    }

    #[tool(
        name = "narrate_step",
        description = "Get the sentence the cooking guide reads aloud for a step (1-based step_number) of a saved recipe."
    )]
    async fn narrate_step(&self, params: Parameters<NarrateStep>) -> McpResult {
        self.handlers().narrate_step(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SousMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sous".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport until the client disconnects or
/// the process is interrupted.
pub async fn run_stdio_server(server: SousMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting sous MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
