//! Guided cooking session.
//!
//! A [`CookingSession`] owns the position within a recipe and one countdown
//! timer. It is driven entirely by its caller: navigation and timer calls
//! come from the UI, and [`CookingSession::tick`] from whatever clock the
//! host runs (a `tokio` interval in the CLI, a plain loop in tests).
//!
//! Operations never fail on bad arguments. Indices are clamped and
//! meaningless timer requests are ignored, because recipe data derived from
//! chat text is untrusted. The only error is building a session from a
//! recipe without steps.
//!
//! ```rust
//! use sous_core::{models::{Recipe, Step}, session::{CookingSession, SessionEvent}};
//!
//! let recipe = Recipe::new("라면", vec![], vec![Step::new(1, "물을 끓인다", 3)]);
//! let mut session = CookingSession::new(recipe)?;
//! session.start_timer(2);
//! assert_eq!(session.tick(), None);
//! assert!(matches!(session.tick(), Some(SessionEvent::TimerFinished { .. })));
//! # Ok::<(), sous_core::SousError>(())
//! ```

pub mod events;
pub mod timer;

#[cfg(test)]
mod tests;

pub use events::{SessionEvent, SessionSnapshot};
pub use timer::{Timer, TimerCommand, TimerEvent};

use log::debug;

use crate::{
    error::{Result, SousError},
    models::{Recipe, Step, TimerState},
};

/// Converts an untrusted seconds argument into timer seconds.
fn clamp_seconds(seconds: i64) -> u32 {
    u32::try_from(seconds.max(0)).unwrap_or(u32::MAX)
}

/// One live guided-cooking run over a recipe.
#[derive(Debug, Clone)]
pub struct CookingSession {
    recipe: Recipe,
    current_step_index: usize,
    timer: Timer,
    completed: bool,
}

impl CookingSession {
    /// Starts a session at the first step with an idle timer.
    ///
    /// Step numbers are re-synchronized with positions, since recipes built
    /// outside the extractor may carry stale numbering.
    ///
    /// # Errors
    ///
    /// Returns [`SousError::InvalidRecipe`] if the recipe has no steps.
    pub fn new(mut recipe: Recipe) -> Result<Self> {
        if recipe.steps.is_empty() {
            return Err(SousError::invalid_recipe(format!(
                "recipe '{}' has no steps",
                recipe.title
            )));
        }
        recipe.normalize();
        debug!(
            "cooking session started for '{}' ({} steps)",
            recipe.title,
            recipe.step_count()
        );

        Ok(Self {
            recipe,
            current_step_index: 0,
            timer: Timer::new(),
            completed: false,
        })
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn current_step(&self) -> &Step {
        &self.recipe.steps[self.current_step_index]
    }

    pub fn step_count(&self) -> usize {
        self.recipe.step_count()
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn time_left_seconds(&self) -> u32 {
        self.timer.time_left_seconds()
    }

    pub fn last_notified_finish(&self) -> bool {
        self.timer.last_notified_finish()
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step_index == self.step_count() - 1
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Moves to `index`, clamped into the recipe's step range.
    ///
    /// The timer is left alone: a running countdown keeps running on the new
    /// step. Returns [`SessionEvent::StepChanged`] when the index moved.
    pub fn go_to_step(&mut self, index: i64) -> Option<SessionEvent> {
        let last = self.step_count() - 1;
        let target = usize::try_from(index.max(0)).unwrap_or(usize::MAX).min(last);
        if target == self.current_step_index {
            return None;
        }

        let from = self.current_step_index;
        self.current_step_index = target;
        debug!("step {} -> {}", from + 1, target + 1);
        Some(SessionEvent::StepChanged { from, to: target })
    }

    /// Advances one step; no-op on the last step.
    pub fn next_step(&mut self) -> Option<SessionEvent> {
        if self.is_last_step() {
            return None;
        }
        self.go_to_step(self.position() + 1)
    }

    /// Goes back one step; no-op on the first step.
    pub fn previous_step(&mut self) -> Option<SessionEvent> {
        if self.current_step_index == 0 {
            return None;
        }
        self.go_to_step(self.position() - 1)
    }

    fn position(&self) -> i64 {
        i64::try_from(self.current_step_index).unwrap_or(i64::MAX)
    }

    /// Applies a timer command and reports whether anything changed.
    fn drive_timer(&mut self, command: TimerCommand) -> (bool, Option<TimerEvent>) {
        let before = self.timer;
        let event = self.timer.apply(command);
        (before != self.timer, event)
    }

    /// Starts the countdown. Non-positive seconds are ignored, as is a
    /// finished timer that has not been reset. Returns whether the timer
    /// changed.
    pub fn start_timer(&mut self, seconds: i64) -> bool {
        self.drive_timer(TimerCommand::Start(clamp_seconds(seconds))).0
    }

    /// Pauses a running timer or resumes one with time left.
    pub fn toggle_timer(&mut self) -> bool {
        self.drive_timer(TimerCommand::Toggle).0
    }

    /// Loads `seconds` into an idle timer. Ignored while the timer runs.
    pub fn reset_timer(&mut self, seconds: i64) -> bool {
        self.drive_timer(TimerCommand::Reset(clamp_seconds(seconds))).0
    }

    /// Advances the countdown by one second.
    ///
    /// Returns [`SessionEvent::TimerFinished`] exactly once per run, on the
    /// tick that reaches zero.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        let (_, event) = self.drive_timer(TimerCommand::Tick);
        event.map(|TimerEvent::Finished| {
            debug!("timer finished on step {}", self.current_step_index + 1);
            SessionEvent::TimerFinished {
                step_index: self.current_step_index,
            }
        })
    }

    /// Finishes the recipe, whatever step or timer state the session is in.
    pub fn complete(&mut self) -> SessionEvent {
        self.completed = true;
        debug!("cooking session completed for '{}'", self.recipe.title);
        SessionEvent::Completed {
            recipe_id: self.recipe.id.clone(),
            timer_state: self.timer.state(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_step_index: self.current_step_index,
            step_number: self.current_step().step_number,
            step_count: self.step_count(),
            time_left_seconds: self.timer.time_left_seconds(),
            timer_state: self.timer.state(),
            is_last_step: self.is_last_step(),
            completed: self.completed,
        }
    }
}
