//! Error conversion for MCP responses.

use rmcp::ErrorData;
use sous_core::SousError;

/// Maps a core error onto an MCP error: caller mistakes become invalid
/// params, everything else an internal error.
pub fn to_mcp_error(message: &str, error: &SousError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        SousError::InvalidRecipe { .. }
        | SousError::RecipeNotFound { .. }
        | SousError::InvalidInput { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
