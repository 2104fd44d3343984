//! Cooking guide: a session wired to settings and a speaker.
//!
//! The session only reports what happened. The guide decides what follows:
//! when a step becomes current it prepares that step's timer (unless one is
//! already running), optionally starts it, and optionally reads the step
//! aloud. All of this happens after the session has returned its event, so
//! the reactions always see the new step.

use log::warn;

use crate::{
    config::GuideSettings,
    error::Result,
    models::{Recipe, TimerState},
    narration::{self, Speaker},
    session::{CookingSession, SessionEvent},
};

/// A user or voice request to the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideCommand {
    Next,
    Previous,
    /// Jump to a 0-based step index (clamped)
    GoTo(i64),
    /// Start the timer with the given seconds, or the current step's timer
    StartTimer(Option<i64>),
    ToggleTimer,
    /// Reset the timer to the given seconds, or the current step's timer
    ResetTimer(Option<i64>),
    /// Read the current step again
    Repeat,
    Complete,
}

pub struct CookingGuide<S: Speaker> {
    session: CookingSession,
    settings: GuideSettings,
    speaker: S,
}

impl<S: Speaker> CookingGuide<S> {
    /// Starts guiding `recipe` at its first step.
    ///
    /// # Errors
    ///
    /// Returns `SousError::InvalidRecipe` if the recipe has no steps.
    pub fn new(recipe: Recipe, settings: GuideSettings, speaker: S) -> Result<Self> {
        let session = CookingSession::new(recipe)?;
        let mut guide = Self {
            session,
            settings,
            speaker,
        };
        if guide.settings.auto_read {
            guide.say(&narration::recipe_intro(guide.session.recipe()));
        }
        guide.enter_step();
        Ok(guide)
    }

    pub fn session(&self) -> &CookingSession {
        &self.session
    }

    pub fn settings(&self) -> GuideSettings {
        self.settings
    }

    pub fn speaker(&self) -> &S {
        &self.speaker
    }

    /// Carries out one command. Returns the session event it caused, if any.
    pub fn handle(&mut self, command: GuideCommand) -> Option<SessionEvent> {
        match command {
            GuideCommand::Next => self.navigate(CookingSession::next_step),
            GuideCommand::Previous => self.navigate(CookingSession::previous_step),
            GuideCommand::GoTo(index) => self.navigate(|session| session.go_to_step(index)),
            GuideCommand::StartTimer(seconds) => {
                let seconds = seconds.unwrap_or_else(|| self.step_seconds());
                if self.session.timer_state() == TimerState::Finished {
                    self.session.reset_timer(seconds);
                }
                self.session.start_timer(seconds);
                None
            }
            GuideCommand::ToggleTimer => {
                self.session.toggle_timer();
                None
            }
            GuideCommand::ResetTimer(seconds) => {
                let seconds = seconds.unwrap_or_else(|| self.step_seconds());
                self.session.reset_timer(seconds);
                None
            }
            GuideCommand::Repeat => {
                self.say(&narration::step_sentence(self.session.current_step()));
                None
            }
            GuideCommand::Complete => {
                let event = self.session.complete();
                if self.settings.auto_read {
                    self.say(&narration::completion_sentence(self.session.recipe()));
                }
                Some(event)
            }
        }
    }

    /// Forwards one clock tick to the session and announces a finished timer.
    pub fn tick(&mut self) -> Option<SessionEvent> {
        let event = self.session.tick()?;
        if let SessionEvent::TimerFinished { step_index } = event {
            let step = &self.session.recipe().steps[step_index];
            let sentence = narration::timer_finished_sentence(step);
            self.say(&sentence);
        }
        Some(event)
    }

    fn navigate<F>(&mut self, move_to: F) -> Option<SessionEvent>
    where
        F: FnOnce(&mut CookingSession) -> Option<SessionEvent>,
    {
        let event = move_to(&mut self.session)?;
        self.enter_step();
        Some(event)
    }

    fn step_seconds(&self) -> i64 {
        i64::from(self.session.current_step().timer_seconds())
    }

    /// Prepares the current step's timer and reads the step aloud.
    ///
    /// A running timer belongs to an earlier step and keeps running.
    fn enter_step(&mut self) {
        let step = self.session.current_step().clone();
        if self.session.timer_state() != TimerState::Running {
            let seconds = i64::from(step.timer_seconds());
            self.session.reset_timer(seconds);
            if self.settings.auto_start_timer && step.has_timer() {
                self.session.start_timer(seconds);
            }
        }
        if self.settings.auto_read {
            self.say(&narration::step_sentence(&step));
        }
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = self.speaker.speak(text) {
            warn!("failed to speak: {e}");
        }
    }
}
