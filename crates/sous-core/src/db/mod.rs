//! SQLite storage for the cookbook.
//!
//! The [`Database`] handle is synchronous; async callers go through
//! [`crate::cookbook::Cookbook`], which opens a connection per operation on
//! a blocking thread.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod completion_queries;
pub mod migrations;
pub mod recipe_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the cookbook database and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
