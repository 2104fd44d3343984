//! Countdown timer state machine.
//!
//! ```text
//! Idle ──start──▶ Running ──toggle──▶ Paused
//!   ▲               │  ▲                │
//!   │               │  └────toggle──────┘
//!   │             tick→0
//!   │               ▼
//!   └───reset─── Finished
//! ```
//!
//! The timer never reads a clock. Time only advances through
//! [`TimerCommand::Tick`], which the host sends once per second.

use log::trace;

use crate::models::TimerState;

/// Input to [`Timer::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Start counting down from the given seconds (0 is ignored)
    Start(u32),
    /// Pause a running timer, or resume one with time left
    Toggle,
    /// Load the given seconds and go idle, unless running
    Reset(u32),
    /// One second elapsed
    Tick,
}

/// Output of [`Timer::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The countdown reached zero. Emitted once per run.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timer {
    state: TimerState,
    time_left_seconds: u32,
    last_notified_finish: bool,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn time_left_seconds(&self) -> u32 {
        self.time_left_seconds
    }

    /// Whether the finish of the current run was already signalled.
    pub fn last_notified_finish(&self) -> bool {
        self.last_notified_finish
    }

    /// Applies one command. Commands that make no sense in the current state
    /// leave the timer untouched.
    pub fn apply(&mut self, command: TimerCommand) -> Option<TimerEvent> {
        use TimerCommand::*;
        use TimerState::*;

        trace!("timer {:?} <- {:?}", self.state, command);
        match (self.state, command) {
            // A finished timer has to be reset before it can run again
            (Finished, Start(_)) | (_, Start(0)) => None,
            (_, Start(seconds)) => {
                self.time_left_seconds = seconds;
                self.state = Running;
                self.last_notified_finish = false;
                None
            }
            (Running, Toggle) => {
                self.state = Paused;
                None
            }
            (Paused | Idle, Toggle) if self.time_left_seconds > 0 => {
                self.state = Running;
                None
            }
            (_, Toggle) => None,
            (Running, Reset(_)) => None,
            (_, Reset(seconds)) => {
                self.time_left_seconds = seconds;
                self.state = Idle;
                self.last_notified_finish = false;
                None
            }
            (Running, Tick) => {
                self.time_left_seconds = self.time_left_seconds.saturating_sub(1);
                if self.time_left_seconds > 0 {
                    return None;
                }
                self.state = Finished;
                if self.last_notified_finish {
                    return None;
                }
                self.last_notified_finish = true;
                Some(TimerEvent::Finished)
            }
            (_, Tick) => None,
        }
    }
}
