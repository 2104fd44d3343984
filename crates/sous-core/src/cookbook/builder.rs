//! Builder for creating and configuring Cookbook instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Cookbook;
use crate::{
    db::Database,
    error::{Result, SousError},
};

/// Builder for creating and configuring Cookbook instances.
#[derive(Debug, Clone, Default)]
pub struct CookbookBuilder {
    database_path: Option<PathBuf>,
}

impl CookbookBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/sous/cookbook.db` or
    /// `~/.local/share/sous/cookbook.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the cookbook, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `SousError::FileSystem` if the parent directory cannot be
    /// created and `SousError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Cookbook> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| SousError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), SousError>(())
        })
        .await
        .map_err(|e| SousError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        debug!("Cookbook ready at {}", db_path.display());
        Ok(Cookbook::new(db_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("sous")
            .place_data_file("cookbook.db")
            .map_err(|e| SousError::XdgDirectory(e.to_string()))
    }
}
