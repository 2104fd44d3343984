//! Markdown formatting for recipes, cookbook listings and guide state.
//!
//! Domain models implement [`std::fmt::Display`] in [`models`]; this module
//! adds newtype wrappers for collections and operation results so every
//! interface prints the same text.
//!
//! ```rust
//! use sous_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Settings saved");
//! assert_eq!(status.to_string(), "Success: Settings saved\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Completions, RecipeSummaries};
pub use datetime::{Countdown, LocalDateTime};
pub use results::{DeleteResult, SaveResult};
pub use status::OperationStatus;
