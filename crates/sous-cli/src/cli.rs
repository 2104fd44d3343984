//! Command-line argument structs and command handlers.
//!
//! Each `*Args` struct carries the clap attributes for one command and
//! converts into a core parameter type, so the core stays free of clap.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Args};
use log::{debug, info};
use sous_core::{
    display::{Completions, OperationStatus},
    extract_detailed, is_recipe_text,
    narration::Silent,
    params::{ListRecipes, RecipeRef, RecordCompletion},
    Cookbook, GuideSettings, Recipe, SousError,
};

use crate::{
    cook::{self, ConsoleSpeaker, CookOutcome, StdinRecognizer},
    renderer::TerminalRenderer,
};

/// Where to read chat text from
#[derive(Args)]
pub struct TextInputArgs {
    /// File containing the chat answer. Reads standard input when omitted
    /// or `-`
    pub file: Option<PathBuf>,
}

impl TextInputArgs {
    fn read(&self) -> Result<String> {
        match self.file.as_deref() {
            Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            _ => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read standard input")?;
                Ok(text)
            }
        }
    }
}

#[derive(Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: TextInputArgs,
    /// Print the recipe as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SaveArgs {
    #[command(flatten)]
    pub input: TextInputArgs,
    /// Treat the input as recipe JSON (as printed by `extract --json`)
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ListRecipesArgs {
    /// Only list recipes whose title contains this text
    #[arg(short, long)]
    pub title: Option<String>,
}

impl From<ListRecipesArgs> for ListRecipes {
    fn from(val: ListRecipesArgs) -> Self {
        ListRecipes { title: val.title }
    }
}

#[derive(Args)]
pub struct RecipeIdArgs {
    /// ID of the saved recipe
    pub id: String,
}

impl From<RecipeIdArgs> for RecipeRef {
    fn from(val: RecipeIdArgs) -> Self {
        RecipeRef { id: val.id }
    }
}

#[derive(Args)]
#[command(group(ArgGroup::new("recipe_source").required(true).args(["file", "saved"])))]
pub struct CookArgs {
    /// Recipe file. Standard input is kept for commands, so `-` is refused
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
    /// Cook a recipe from the cookbook instead of chat text
    #[arg(long, conflicts_with = "file")]
    pub saved: Option<String>,
    /// Treat the input as recipe JSON
    #[arg(long)]
    pub json: bool,
    /// Do not print spoken lines
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct SettingsArgs {
    /// Read each step aloud when it becomes current
    #[arg(long)]
    pub auto_read: Option<bool>,
    /// Start a step's timer automatically when the step has one
    #[arg(long)]
    pub auto_timer: Option<bool>,
}

/// Command handlers bound to a cookbook and a renderer.
pub struct Cli {
    cookbook: Cookbook,
    renderer: TerminalRenderer,
    settings_file: Option<PathBuf>,
}

impl Cli {
    pub fn new(
        cookbook: Cookbook,
        renderer: TerminalRenderer,
        settings_file: Option<PathBuf>,
    ) -> Self {
        Self {
            cookbook,
            renderer,
            settings_file,
        }
    }

    /// Resolved on demand: only `cook` and `settings` touch the config
    /// directory.
    fn settings_path(&self) -> Result<PathBuf> {
        match &self.settings_file {
            Some(path) => Ok(path.clone()),
            None => GuideSettings::default_path().context("Failed to locate settings file"),
        }
    }

    pub fn check(&self, args: &TextInputArgs) -> Result<()> {
        let text = args.read()?;
        let verdict = if is_recipe_text(&text) {
            "Looks like a recipe."
        } else {
            "Not a recipe."
        };
        self.renderer.render(&format!("{verdict}\n"))
    }

    pub fn extract(&self, args: &ExtractArgs) -> Result<()> {
        let text = args.input.read()?;
        let Some(extraction) = extract_detailed(&text) else {
            // Not a recipe: show the answer as it was written.
            print!("{text}");
            return Ok(());
        };

        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&extraction.recipe)
                    .context("Failed to serialize recipe")?
            );
            return Ok(());
        }

        debug!("steps extracted from {}", extraction.step_source);
        self.renderer.render(&format!(
            "{}\n_Steps from: {}_\n",
            extraction.recipe, extraction.step_source
        ))
    }

    pub async fn save(&self, args: &SaveArgs) -> Result<()> {
        let recipe = self.load_recipe(&args.input, args.json)?;
        let result = self
            .cookbook
            .save_result(&recipe)
            .await
            .context("Failed to save recipe")?;
        self.renderer.render(&result.to_string())
    }

    pub async fn list(&self, params: &ListRecipes) -> Result<()> {
        let summaries = self
            .cookbook
            .list_recipes_summary(params)
            .await
            .context("Failed to list recipes")?;
        self.renderer.render(&summaries.to_string())
    }

    pub async fn show(&self, params: &RecipeRef) -> Result<()> {
        let recipe = self
            .cookbook
            .show_recipe(params)
            .await
            .context("Failed to show recipe")?;
        let history = self
            .cookbook
            .list_completions(params)
            .await
            .context("Failed to load cooking history")?;
        self.renderer
            .render(&format!("{recipe}\n{}", Completions(history)))
    }

    pub async fn delete(&self, params: &RecipeRef) -> Result<()> {
        let result = self
            .cookbook
            .delete_result(params)
            .await
            .context("Failed to delete recipe")?;
        self.renderer.render(&result.to_string())
    }

    pub async fn cook(&self, args: &CookArgs) -> Result<()> {
        let recipe = match &args.saved {
            Some(id) => self
                .cookbook
                .show_recipe(&RecipeRef { id: id.clone() })
                .await
                .context("recipe could not be loaded")?,
            None => match &args.file {
                Some(path) if path != Path::new("-") => self.load_recipe(
                    &TextInputArgs {
                        file: Some(path.clone()),
                    },
                    args.json,
                )?,
                _ => bail!("cook reads commands from standard input; pass a recipe file or --saved"),
            },
        };
        let settings = GuideSettings::load(&self.settings_path()?)?;

        let outcome = if args.quiet {
            cook::run(recipe, settings, Silent, StdinRecognizer, &self.renderer).await
        } else {
            cook::run(recipe, settings, ConsoleSpeaker, StdinRecognizer, &self.renderer).await
        };
        let outcome = match outcome {
            Err(e) if is_invalid_recipe(&e) => {
                return self
                    .renderer
                    .render(&OperationStatus::failure("recipe could not be loaded").to_string());
            }
            result => result?,
        };

        match (outcome, &args.saved) {
            (CookOutcome::Completed { rating }, Some(id)) => {
                let completion = self
                    .cookbook
                    .record_completion(&RecordCompletion {
                        id: id.clone(),
                        rating,
                    })
                    .await
                    .context("Failed to record completion")?;
                info!("Recorded completion {} for {id}", completion.id);
                self.renderer.render(
                    &OperationStatus::success("Cooking history updated").to_string(),
                )
            }
            (CookOutcome::Completed { .. }, None) | (CookOutcome::Stopped, _) => Ok(()),
        }
    }

    pub fn settings(&self, args: &SettingsArgs) -> Result<()> {
        let settings_path = self.settings_path()?;
        let mut settings = GuideSettings::load(&settings_path)?;
        let changed = args.auto_read.is_some() || args.auto_timer.is_some();

        if let Some(auto_read) = args.auto_read {
            settings.auto_read = auto_read;
        }
        if let Some(auto_timer) = args.auto_timer {
            settings.auto_start_timer = auto_timer;
        }
        if changed {
            settings.save(&settings_path)?;
            self.renderer
                .render(&OperationStatus::success("Settings saved").to_string())?;
        }

        self.renderer.render(&format!(
            "- **Auto read**: {}\n- **Auto start timer**: {}\n- **File**: {}\n",
            settings.auto_read,
            settings.auto_start_timer,
            settings_path.display()
        ))
    }

    fn load_recipe(&self, input: &TextInputArgs, json: bool) -> Result<Recipe> {
        let text = input.read()?;
        if json {
            let mut recipe: Recipe =
                serde_json::from_str(&text).context("Failed to parse recipe JSON")?;
            recipe.normalize();
            return Ok(recipe);
        }
        match sous_core::extract(&text) {
            Some(recipe) => Ok(recipe),
            None => bail!("recipe could not be loaded: the text does not look like a recipe"),
        }
    }
}

fn is_invalid_recipe(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<SousError>(),
        Some(SousError::InvalidRecipe { .. })
    )
}
