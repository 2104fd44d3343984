//! Ingredient section parsing.

use std::sync::LazyLock;

use regex::Regex;

use super::classify::STEP_MARKER_REGEX;

const INGREDIENTS_MARKER: &str = "재료:";

static SECTION_END_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*[0-9]+(?:\.(?:[^0-9]|$)|\))|만드는 법:|조리법:").expect("Invalid section end regex")
});

fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| matches!(c, '•' | '-' | '*') || c.is_whitespace())
        .trim_end()
}

/// Ingredient lines listed under a `재료:` marker, in source order.
///
/// The section runs until the first step marker, numbered item, or
/// cooking-method marker. Text without the marker has no ingredients.
pub fn extract_ingredients(text: &str) -> Vec<String> {
    let Some(marker_at) = text.find(INGREDIENTS_MARKER) else {
        return Vec::new();
    };
    let section = &text[marker_at + INGREDIENTS_MARKER.len()..];

    let end = [
        STEP_MARKER_REGEX.find(section).map(|m| m.start()),
        SECTION_END_REGEX.find(section).map(|m| m.start()),
    ]
    .into_iter()
    .flatten()
    .min()
    .unwrap_or(section.len());

    section[..end]
        .lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
