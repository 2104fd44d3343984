//! Sentences for read-aloud.
//!
//! Nothing here talks to a speech engine. [`Speaker`] is the seam where the
//! host plugs in its text-to-speech capability.

use crate::{
    error::Result,
    models::{Recipe, Step},
};

/// External text-to-speech capability.
pub trait Speaker {
    fn speak(&mut self, text: &str) -> Result<()>;
}

/// Collects spoken lines, for transcripts and tests.
impl Speaker for Vec<String> {
    fn speak(&mut self, text: &str) -> Result<()> {
        self.push(text.to_string());
        Ok(())
    }
}

/// A speaker that says nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Speaker for Silent {
    fn speak(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// "2단계. 물을 끓인다. 이 단계는 약 10분 정도 걸립니다."
pub fn step_sentence(step: &Step) -> String {
    let mut sentence = format!("{}단계. {}", step.step_number, step.instruction);
    if step.has_timer() {
        sentence.push_str(&format!(" 이 단계는 약 {}분 정도 걸립니다.", step.timer_minutes));
    }
    sentence
}

pub fn recipe_intro(recipe: &Recipe) -> String {
    format!(
        "{} 요리를 시작합니다. 모두 {}단계이고, 약 {}분 정도 걸립니다.",
        recipe.title,
        recipe.step_count(),
        recipe.cooking_time_minutes
    )
}

pub fn timer_finished_sentence(step: &Step) -> String {
    format!("{}단계 타이머가 끝났습니다.", step.step_number)
}

pub fn completion_sentence(recipe: &Recipe) -> String {
    format!("{} 완성! 맛있게 드세요.", recipe.title)
}
