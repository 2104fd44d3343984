//! Voice command recognition on top of an external speech-to-text engine.

use std::sync::LazyLock;

use regex::Regex;

use crate::{error::Result, extractor::time::mentioned_minutes, guide::GuideCommand};

/// External speech-to-text capability.
pub trait Recognizer {
    /// Listens for one utterance. `None` means nothing was heard.
    fn recognize(&mut self) -> Result<Option<String>>;
}

static GO_TO_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:([0-9]+)\s*단계|(?:step|go)\s*([0-9]+))").expect("Invalid go-to regex")
});

const NEXT_WORDS: &[&str] = &["다음", "next"];
const PREVIOUS_WORDS: &[&str] = &["이전", "뒤로", "previous", "back", "prev"];
const TOGGLE_WORDS: &[&str] = &["일시정지", "멈춰", "정지", "계속", "pause", "resume"];
const RESET_WORDS: &[&str] = &["리셋", "초기화", "reset"];
const REPEAT_WORDS: &[&str] = &["다시", "반복", "repeat", "again"];
const COMPLETE_WORDS: &[&str] = &["완료", "다 했", "끝", "done", "complete", "finish"];

fn mentions(utterance: &str, words: &[&str]) -> bool {
    words.iter().any(|word| utterance.contains(word))
}

fn timer_seconds(utterance: &str) -> Option<i64> {
    mentioned_minutes(utterance).map(|minutes| i64::from(minutes) * 60)
}

/// Maps a recognized utterance to a guide command.
///
/// Step jumps are spoken 1-based ("3단계", "step 3") and returned as 0-based
/// indices. Timer phrases may carry a duration ("타이머 3분 시작").
pub fn parse_command(utterance: &str) -> Option<GuideCommand> {
    let utterance = utterance.trim().to_lowercase();
    if utterance.is_empty() {
        return None;
    }

    if let Some(caps) = GO_TO_REGEX.captures(&utterance) {
        let number = caps.get(1).or_else(|| caps.get(2))?;
        let number: i64 = number.as_str().parse().ok()?;
        return Some(GuideCommand::GoTo(number - 1));
    }

    let about_timer = utterance.contains("타이머") || utterance.contains("timer");
    if about_timer || utterance == "start" || utterance == "시작" {
        if mentions(&utterance, TOGGLE_WORDS) {
            return Some(GuideCommand::ToggleTimer);
        }
        if mentions(&utterance, RESET_WORDS) {
            return Some(GuideCommand::ResetTimer(timer_seconds(&utterance)));
        }
        return Some(GuideCommand::StartTimer(timer_seconds(&utterance)));
    }

    if mentions(&utterance, NEXT_WORDS) {
        Some(GuideCommand::Next)
    } else if mentions(&utterance, PREVIOUS_WORDS) {
        Some(GuideCommand::Previous)
    } else if mentions(&utterance, TOGGLE_WORDS) {
        Some(GuideCommand::ToggleTimer)
    } else if mentions(&utterance, RESET_WORDS) {
        Some(GuideCommand::ResetTimer(None))
    } else if mentions(&utterance, REPEAT_WORDS) {
        Some(GuideCommand::Repeat)
    } else if mentions(&utterance, COMPLETE_WORDS) {
        Some(GuideCommand::Complete)
    } else {
        None
    }
}
