//! Display implementations for domain models.
//!
//! Output is markdown so the command line can render it with rich styling
//! and the MCP server can return it to clients as-is.

use std::fmt;

use super::datetime::{Countdown, LocalDateTime};
use crate::{
    models::{Completion, Recipe, RecipeSummary, Step, TimerState},
    session::SessionSnapshot,
};

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Cooking time: {}분", self.cooking_time_minutes)?;
        writeln!(f, "- Steps: {}", self.step_count())?;

        if !self.ingredients.is_empty() {
            writeln!(f, "\n## 재료")?;
            writeln!(f)?;
            for ingredient in &self.ingredients {
                writeln!(f, "- {ingredient}")?;
            }
        }

        if self.steps.is_empty() {
            writeln!(f, "\nNo steps in this recipe.")?;
        } else {
            writeln!(f, "\n## 조리 순서")?;
            writeln!(f)?;
            for step in &self.steps {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_timer() {
            writeln!(
                f,
                "{}. {} ⏱ {}분",
                self.step_number, self.instruction, self.timer_minutes
            )
        } else {
            writeln!(f, "{}. {}", self.step_number, self.instruction)
        }
    }
}

impl fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Steps**: {} ({}분)",
            self.step_count, self.cooking_time_minutes
        )?;
        writeln!(f, "- **Saved**: {}", LocalDateTime(&self.saved_at))?;
        if self.times_cooked > 0 {
            write!(f, "- **Cooked**: {} times", self.times_cooked)?;
            match self.average_rating {
                Some(rating) => writeln!(f, ", rated {rating:.1}/5")?,
                None => writeln!(f)?,
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}", LocalDateTime(&self.completed_at))?;
        match self.rating {
            Some(rating) => {
                let filled = usize::from(rating.min(5));
                writeln!(f, " {}{}", "★".repeat(filled), "☆".repeat(5 - filled))
            }
            None => writeln!(f),
        }
    }
}

impl fmt::Display for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.completed {
            return writeln!(f, "**Completed** ({} steps)", self.step_count);
        }

        write!(f, "**Step {}/{}**", self.step_number, self.step_count)?;
        if self.is_last_step {
            write!(f, " (last)")?;
        }
        writeln!(
            f,
            " · {} {}",
            self.timer_state.with_icon(),
            Countdown(self.time_left_seconds)
        )
    }
}
