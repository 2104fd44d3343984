use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    CookArgs, ExtractArgs, ListRecipesArgs, RecipeIdArgs, SaveArgs, SettingsArgs, TextInputArgs,
};

/// Hands-free cooking guide for recipes found in AI chat answers
///
/// sous recognizes recipes in an assistant's free-form answer, turns them
/// into numbered steps with timers, and walks you through them one step at
/// a time. Saved recipes and cooking history live in a local cookbook, and
/// `sous serve` exposes the same tools over MCP.
#[derive(Parser)]
#[command(version, about, name = "sous")]
pub struct Args {
    /// Path to the SQLite cookbook file. Defaults to
    /// $XDG_DATA_HOME/sous/cookbook.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the guide settings file. Defaults to
    /// $XDG_CONFIG_HOME/sous/settings.json
    #[arg(long, global = true)]
    pub settings_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tell whether a chat answer looks like a recipe
    Check(TextInputArgs),
    /// Extract a recipe from a chat answer
    #[command(alias = "x")]
    Extract(ExtractArgs),
    /// Extract a recipe and save it to the cookbook
    Save(SaveArgs),
    /// List saved recipes
    #[command(alias = "ls")]
    List(ListRecipesArgs),
    /// Show a saved recipe with its cooking history
    Show(RecipeIdArgs),
    /// Delete a saved recipe
    #[command(alias = "rm")]
    Delete(RecipeIdArgs),
    /// Cook a recipe step by step with a timer
    Cook(CookArgs),
    /// Show or change guide settings
    Settings(SettingsArgs),
    /// Start the MCP server
    Serve,
}
