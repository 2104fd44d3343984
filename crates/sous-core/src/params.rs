//! Parameter structures shared by the command line and MCP interfaces.
//!
//! These carry no framework derives beyond serde. JSON schema generation is
//! available behind the `schema` feature for the MCP server; command-line
//! argument structs convert into these with `From`.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Free-form chat text to classify or extract a recipe from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ExtractText {
    /// The assistant's answer text
    pub text: String,
}

/// Reference to a saved recipe.
///
/// Used by show, delete and cook operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecipeRef {
    /// ID of the saved recipe
    pub id: String,
}

/// Parameters for listing saved recipes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListRecipes {
    /// Only list recipes whose title contains this text
    #[serde(default)]
    pub title: Option<String>,
}

/// Parameters for recording a finished cooking session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecordCompletion {
    /// ID of the saved recipe that was cooked
    pub id: String,
    /// Optional rating from 1 to 5
    #[serde(default)]
    pub rating: Option<u8>,
}

/// Parameters for narrating a single step of a saved recipe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct NarrateStep {
    /// ID of the saved recipe
    pub id: String,
    /// 1-based step number
    pub step_number: u32,
}
