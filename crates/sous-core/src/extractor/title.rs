//! Title detection.

use std::sync::LazyLock;

use regex::Regex;

static TITLE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"레시피:[ \t]*([^\n]*)").expect("Invalid title marker regex"));

static TITLE_KEYWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)[ \t]*(?:레시피|만드는[ \t]*법|조리법|만들기)")
        .expect("Invalid title keyword regex")
});

fn non_empty(candidate: &str) -> Option<String> {
    let candidate = candidate.trim();
    (!candidate.is_empty()).then(|| candidate.to_string())
}

fn from_marker(text: &str) -> Option<String> {
    TITLE_MARKER_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| non_empty(m.as_str()))
}

fn from_keyword(first_line: &str) -> Option<String> {
    TITLE_KEYWORD_REGEX
        .captures(first_line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| non_empty(m.as_str()))
}

/// Title of the recipe in `text`, falling back to the first line and then
/// to [`crate::models::Recipe::DEFAULT_TITLE`].
pub fn extract_title(text: &str) -> Option<String> {
    let first_line = text.lines().map(str::trim).find(|line| !line.is_empty());

    from_marker(text)
        .or_else(|| first_line.and_then(from_keyword))
        .or_else(|| first_line.and_then(non_empty))
}
