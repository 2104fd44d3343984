//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};

/// One instruction unit of a recipe with an optional timer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// 1-based position of the step, always `index + 1` within its recipe
    #[serde(default)]
    pub step_number: u32,

    /// What to do in this step
    pub instruction: String,

    /// Suggested timer for this step in minutes (0 = no timer)
    #[serde(default)]
    pub timer_minutes: u32,
}

impl Step {
    pub fn new(step_number: u32, instruction: impl Into<String>, timer_minutes: u32) -> Self {
        Self {
            step_number,
            instruction: instruction.into(),
            timer_minutes,
        }
    }

    /// Whether the step carries a timer.
    pub fn has_timer(&self) -> bool {
        self.timer_minutes > 0
    }

    /// Timer duration in seconds, saturating on absurd minute counts.
    pub fn timer_seconds(&self) -> u32 {
        self.timer_minutes.saturating_mul(60)
    }
}
