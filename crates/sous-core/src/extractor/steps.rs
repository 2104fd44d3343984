//! Step extraction stages.
//!
//! Each stage is a pure `fn(&str) -> Option<Vec<Step>>`; `None` means the
//! stage found nothing and the next one gets a try. The synthetic step at the
//! end guarantees a recipe never has zero steps.

use std::{fmt, sync::LazyLock};

use log::debug;
use regex::{Match, Regex};
use serde::Serialize;

use super::{classify::STEP_MARKER_REGEX, time::mentioned_minutes};
use crate::models::Step;

/// Timer guessed for list and paragraph steps that mention no time.
pub const DEFAULT_LIST_TIMER_MINUTES: u32 = 5;

/// Timer of the synthetic step.
pub const SYNTHETIC_TIMER_MINUTES: u32 = 10;

/// Instruction of the synthetic step.
pub const SYNTHETIC_INSTRUCTION: &str = "레시피를 참고하여 요리를 진행하세요.";

const MIN_PARAGRAPH_CHARS: usize = 10;

const PARAGRAPH_SKIP_PREFIXES: &[&str] = &["재료:", "레시피:"];

static NUMBERED_ITEM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[0-9]+[.)]").expect("Invalid numbered item regex"));

static PARAGRAPH_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("Invalid paragraph break regex"));

/// Which stage of the pipeline produced a recipe's steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepSource {
    FormalMarkers,
    NumberedList,
    Paragraphs,
    Synthetic,
}

impl StepSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepSource::FormalMarkers => "formal markers",
            StepSource::NumberedList => "numbered list",
            StepSource::Paragraphs => "paragraphs",
            StepSource::Synthetic => "synthetic",
        }
    }
}

impl fmt::Display for StepSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Stage = fn(&str) -> Option<Vec<Step>>;

const STAGES: [(StepSource, Stage); 3] = [
    (StepSource::FormalMarkers, formal_marker_steps),
    (StepSource::NumberedList, numbered_list_steps),
    (StepSource::Paragraphs, paragraph_steps),
];

/// Runs the stages in order and returns the first non-empty result.
pub fn extract_steps(text: &str) -> (StepSource, Vec<Step>) {
    STAGES
        .iter()
        .find_map(|(source, stage)| stage(text).map(|steps| (*source, steps)))
        .inspect(|(source, steps)| debug!("{} step(s) parsed from {}", steps.len(), source))
        .unwrap_or_else(|| {
            debug!("no steps parsed, using a synthetic step");
            (StepSource::Synthetic, vec![synthetic_step()])
        })
}

/// The single step emitted when nothing else parses.
pub fn synthetic_step() -> Step {
    Step::new(1, SYNTHETIC_INSTRUCTION, SYNTHETIC_TIMER_MINUTES)
}

/// Joins the non-empty lines of a segment and drops leftover separators.
fn clean_instruction(segment: &str) -> Option<String> {
    let joined = segment
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let cleaned =
        joined.trim_start_matches(|c: char| matches!(c, ':' | '.' | ')' | '-') || c.is_whitespace());
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

/// Text between consecutive markers, the last one running to the end.
fn segments<'t>(text: &'t str, markers: &[Match<'t>]) -> Vec<&'t str> {
    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.start());
            &text[marker.end()..end]
        })
        .collect()
}

fn number_steps<I>(instructions: I, default_timer: u32) -> Option<Vec<Step>>
where
    I: IntoIterator<Item = String>,
{
    let steps: Vec<Step> = instructions
        .into_iter()
        .zip(1u32..)
        .map(|(instruction, number)| {
            let timer = mentioned_minutes(&instruction).unwrap_or(default_timer);
            Step::new(number, instruction, timer)
        })
        .collect();
    (!steps.is_empty()).then_some(steps)
}

/// `Step N` / `단계 N` markers. Steps without a time mention get no timer.
pub fn formal_marker_steps(text: &str) -> Option<Vec<Step>> {
    let markers: Vec<Match<'_>> = STEP_MARKER_REGEX.find_iter(text).collect();
    let instructions = segments(text, &markers)
        .into_iter()
        .filter_map(clean_instruction);
    number_steps(instructions, 0)
}

/// `N.` / `N)` items at the start of a line. Source numbers only delimit
/// items; steps are renumbered from 1.
pub fn numbered_list_steps(text: &str) -> Option<Vec<Step>> {
    let markers: Vec<Match<'_>> = NUMBERED_ITEM_REGEX
        .find_iter(text)
        .filter(|m| {
            // "3.5컵" is a quantity, not an item
            !text[m.end()..].starts_with(|c: char| c.is_ascii_digit())
        })
        .collect();
    let instructions = segments(text, &markers)
        .into_iter()
        .filter_map(clean_instruction);
    number_steps(instructions, DEFAULT_LIST_TIMER_MINUTES)
}

/// Blank-line separated paragraphs, skipping short ones and the title and
/// ingredient sections.
pub fn paragraph_steps(text: &str) -> Option<Vec<Step>> {
    let instructions = PARAGRAPH_BREAK_REGEX
        .split(text)
        .map(str::trim)
        .filter(|paragraph| paragraph.chars().count() > MIN_PARAGRAPH_CHARS)
        .filter(|paragraph| {
            !PARAGRAPH_SKIP_PREFIXES
                .iter()
                .any(|prefix| paragraph.starts_with(prefix))
        })
        .filter_map(clean_instruction);
    number_steps(instructions, DEFAULT_LIST_TIMER_MINUTES)
}
