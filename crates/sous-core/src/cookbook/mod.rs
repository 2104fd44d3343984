//! Async cookbook API over the SQLite store.
//!
//! Every operation opens its own [`Database`](crate::db::Database) on a
//! blocking thread, so a [`Cookbook`] is cheap to clone and share between
//! the command line and the MCP server.
//!
//! ```rust,no_run
//! use sous_core::{params::ExtractText, CookbookBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let cookbook = CookbookBuilder::new()
//!     .with_database_path(Some("/tmp/cookbook.db"))
//!     .build()
//!     .await?;
//!
//! let saved = cookbook
//!     .save_from_text(&ExtractText {
//!         text: "레시피: 라면\n1. 물을 끓인다 3분\n2. 면을 넣는다".to_string(),
//!     })
//!     .await?;
//! println!("{saved}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod builder;
pub mod handlers;
pub mod recipe_ops;


pub use builder::CookbookBuilder;

/// Handle to a cookbook database file.
#[derive(Debug, Clone)]
pub struct Cookbook {
    pub(crate) db_path: PathBuf,
}

impl Cookbook {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the backing database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }
}
