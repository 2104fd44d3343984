//! Signals and read-only views produced by a cooking session.

use serde::Serialize;

use crate::models::{RecipeId, TimerState};

/// Signal returned by a session operation.
///
/// Events are handed back only after the session state is consistent, so a
/// handler may call straight back into the session (for example resetting
/// the timer when it finishes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The current step moved. `to` is already the current index.
    StepChanged { from: usize, to: usize },
    /// The countdown reached zero while on `step_index`.
    TimerFinished { step_index: usize },
    /// The user finished the recipe.
    Completed {
        recipe_id: RecipeId,
        timer_state: TimerState,
    },
}

/// What presentation code needs to draw the guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub current_step_index: usize,
    pub step_number: u32,
    pub step_count: usize,
    pub time_left_seconds: u32,
    pub timer_state: TimerState,
    pub is_last_step: bool,
    pub completed: bool,
}
