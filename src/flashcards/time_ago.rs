//! "Time ago" labels for deck cards
//!
//! Durations are floored at every step: whole minutes, then whole hours,
//! then whole days. Timestamps in the future count as zero minutes.

use std::fmt;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, Local, Utc};

/// Calendar format used once a timestamp is a week old (en-US short date)
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    Minutes(i64),
    Hours(i64),
    Yesterday,
    Days(i64),
    /// Older than a week; rendered as a calendar date
    Date(DateTime<Utc>),
}

impl RelativeTime {
    pub fn between(past: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let elapsed = (now - past).max(Duration::zero());
        let minutes = elapsed.num_minutes();
        let hours = minutes / 60;
        let days = hours / 24;

        if minutes < 60 {
            Self::Minutes(minutes)
        } else if hours < 24 {
            Self::Hours(hours)
        } else if days == 1 {
            Self::Yesterday
        } else if days < 7 {
            Self::Days(days)
        } else {
            Self::Date(past)
        }
    }

    /// Render, using `date_format` (strftime) for the calendar case.
    ///
    /// An unusable pattern falls back to [`DEFAULT_DATE_FORMAT`].
    pub fn format_with(&self, date_format: &str) -> String {
        match self {
            Self::Minutes(n) => format!("{} minute(s) ago", n),
            Self::Hours(n) => format!("{} hour(s) ago", n),
            Self::Yesterday => "Yesterday".to_string(),
            Self::Days(n) => format!("{} day(s) ago", n),
            Self::Date(at) => {
                let date_format = if is_valid_date_format(date_format) {
                    date_format
                } else {
                    log::warn!("Invalid date format '{}'; using default", date_format);
                    DEFAULT_DATE_FORMAT
                };
                at.with_timezone(&Local).format(date_format).to_string()
            }
        }
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(DEFAULT_DATE_FORMAT))
    }
}

/// Relative label for `past` as seen from `now`
pub fn time_ago(past: DateTime<Utc>, now: DateTime<Utc>) -> String {
    RelativeTime::between(past, now).to_string()
}

/// Whether chrono can render `format` without erroring
pub fn is_valid_date_format(format: &str) -> bool {
    !format.is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
