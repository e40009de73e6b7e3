use std::fmt::Display;

use chrono::{DateTime, TimeZone};

const LONG_FORMAT: &str = "%b %-d, %Y, %I:%M %p";
const SHORT_FORMAT: &str = "%b %-d, %Y";

/// Renders e.g. `Jan 5, 2026, 03:04 PM` in the timestamp's own zone.
pub fn format_date<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format(LONG_FORMAT).to_string()
}

/// Renders e.g. `Jan 5, 2026`.
pub fn format_date_short<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format(SHORT_FORMAT).to_string()
}
