//! Heuristic recipe classifier.
//!
//! False negatives (a prose recipe without markers) and false positives
//! (any numbered to-do list) are accepted trade-offs.

use std::sync::LazyLock;

use regex::Regex;

use super::time::TIME_UNIT_REGEX;

/// Section markers that only appear in recipe-shaped text.
pub(crate) const RECIPE_MARKERS: &[&str] = &["레시피:", "재료:", "만드는 법:", "조리법:"];

/// "Step 3" / "단계 3". Shared with the formal-marker stage.
pub(crate) static STEP_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:step|단계)[ \t]*([0-9]+)[ \t]*[:.)]?").expect("Invalid step marker regex")
});

static NUMBERED_DOT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*[0-9]+\.(?:[^0-9]|$)").expect("Invalid numbered item regex")
});

static NUMBERED_PAREN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\)").expect("Invalid paren item regex"));

/// Returns true when `text` looks like it contains a recipe.
pub fn is_recipe_text(text: &str) -> bool {
    RECIPE_MARKERS.iter().any(|marker| text.contains(marker))
        || STEP_MARKER_REGEX.is_match(text)
        || NUMBERED_DOT_REGEX.is_match(text)
        || (NUMBERED_PAREN_REGEX.is_match(text) && TIME_UNIT_REGEX.is_match(text))
}
