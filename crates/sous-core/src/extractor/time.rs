//! Time mentions embedded in step text ("10분", "1시간 30분", "30초").

use std::sync::LazyLock;

use regex::Regex;

static MINUTES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*분").expect("Invalid minutes regex"));

static HOURS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*시간").expect("Invalid hours regex"));

static SECONDS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*초").expect("Invalid seconds regex"));

/// Any number followed by a time unit, used by the recipe classifier.
pub(crate) static TIME_UNIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\s*(?:분|시간|초)").expect("Invalid time unit regex"));

fn first_number(regex: &Regex, text: &str) -> Option<u32> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Minutes mentioned in `text`, or `None` when it carries no usable time
/// mention.
///
/// The first hour, minute and second mentions are added up; seconds round
/// up to a whole minute. A number too large for `u32`, or a total that
/// overflows, counts as no mention at all.
pub fn mentioned_minutes(text: &str) -> Option<u32> {
    let hours = first_number(&HOURS_REGEX, text);
    let minutes = first_number(&MINUTES_REGEX, text);
    let seconds = first_number(&SECONDS_REGEX, text);

    if hours.is_none() && minutes.is_none() && seconds.is_none() {
        return None;
    }

    hours
        .unwrap_or(0)
        .checked_mul(60)?
        .checked_add(minutes.unwrap_or(0))?
        .checked_add(seconds.unwrap_or(0).div_ceil(60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes() {
        assert_eq!(mentioned_minutes("물을 끓인다 10분"), Some(10));
        assert_eq!(mentioned_minutes("약 5 분간 볶는다"), Some(5));
    }

    #[test]
    fn test_hours_and_minutes_add_up() {
        assert_eq!(mentioned_minutes("1시간 30분 동안 재운다"), Some(90));
        assert_eq!(mentioned_minutes("2시간 삶는다"), Some(120));
    }

    #[test]
    fn test_seconds_round_up() {
        assert_eq!(mentioned_minutes("30초 데친다"), Some(1));
        assert_eq!(mentioned_minutes("1분 30초 볶는다"), Some(2));
    }

    #[test]
    fn test_no_mention() {
        assert_eq!(mentioned_minutes("소스를 넣는다"), None);
        // "충분히" contains 분 but no number precedes it
        assert_eq!(mentioned_minutes("충분히 저어준다"), None);
        assert_eq!(mentioned_minutes("2인분 기준"), None);
    }

    #[test]
    fn test_overflow_is_no_mention() {
        assert_eq!(mentioned_minutes("99999999999분 끓인다"), None);
        assert_eq!(mentioned_minutes("4000000000시간 끓인다"), None);
    }
}
