//! Date, time and countdown display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp in the system time zone.
///
/// ```rust
/// use jiff::Timestamp;
/// use sous_core::display::LocalDateTime;
///
/// let ts = Timestamp::now();
/// assert!(!LocalDateTime(&ts).to_string().is_empty());
/// ```
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M")
        )
    }
}

/// Remaining timer seconds shown as `mm:ss`.
#[derive(Debug, Clone, Copy)]
pub struct Countdown(pub u32);

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}
