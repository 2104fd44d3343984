//! Timer state enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// State of the single countdown timer owned by a cooking session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// No countdown in progress
    #[default]
    Idle,

    /// Counting down once per tick
    Running,

    /// Countdown suspended, time left preserved
    Paused,

    /// Countdown reached zero; only a reset leaves this state
    Finished,
}

impl FromStr for TimerState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idle" => Ok(TimerState::Idle),
            "running" => Ok(TimerState::Running),
            "paused" => Ok(TimerState::Paused),
            "finished" => Ok(TimerState::Finished),
            _ => Err(format!("Invalid timer state: {s}")),
        }
    }
}

impl TimerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
            TimerState::Paused => "paused",
            TimerState::Finished => "finished",
        }
    }

    /// Get state with consistent icon formatting for display.
    ///
    /// ```rust
    /// use sous_core::models::TimerState;
    ///
    /// assert_eq!(TimerState::Running.with_icon(), "▶ Running");
    /// assert_eq!(TimerState::Finished.with_icon(), "✓ Finished");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TimerState::Idle => "○ Idle",
            TimerState::Running => "▶ Running",
            TimerState::Paused => "⏸ Paused",
            TimerState::Finished => "✓ Finished",
        }
    }
}
