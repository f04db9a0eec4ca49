//! Conversions between decimal hours and the `HH:MM` form shown to users.
//!
//! Harvest stores durations as decimal hours (`7.5`), while people type and
//! read them as clock durations (`07:30`). Parsing is strict about the
//! `HH:MM` shape; formatting rounds to the nearest minute.
//!
//! ## Examples
//!
//! ```rust
//! use harvest_cli::libs::formatter::{format_hours, parse_duration};
//!
//! assert_eq!(parse_duration("7:30").unwrap(), 7.5);
//! assert_eq!(format_hours(7.5), "07:30");
//! assert_eq!(format_hours(-1.0), "00:00");
//! ```

use chrono::NaiveDate;
use thiserror::Error;

/// Longest notes text shown in table cells before truncation.
pub const NOTES_DISPLAY_WIDTH: usize = 30;

/// Errors produced when parsing an `HH:MM` duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("invalid format, expected HH:MM")]
    Format,
    #[error("invalid hours value")]
    Hours,
    #[error("invalid minutes value")]
    Minutes,
    #[error("minutes must be between 0 and 59")]
    MinutesRange,
}

/// Parses an `HH:MM` duration into decimal hours.
pub fn parse_duration(input: &str) -> Result<f64, DurationError> {
    let (hours, minutes) = input.trim().split_once(':').ok_or(DurationError::Format)?;
    let hours = hours.parse::<u32>().map_err(|_| DurationError::Hours)?;
    let minutes = minutes.parse::<u32>().map_err(|_| DurationError::Minutes)?;
    if minutes >= 60 {
        return Err(DurationError::MinutesRange);
    }
    Ok(f64::from(hours) + f64::from(minutes) / 60.0)
}

/// Splits decimal hours into whole hours and minutes, rounded to the minute.
///
/// Negative values clamp to zero.
pub fn hours_and_minutes(hours: f64) -> (i64, i64) {
    let total_minutes = (hours * 60.0).round().max(0.0) as i64;
    (total_minutes / 60, total_minutes % 60)
}

/// Formats decimal hours as `HH:MM`.
pub fn format_hours(hours: f64) -> String {
    let (hours, minutes) = hours_and_minutes(hours);
    format!("{:02}:{:02}", hours, minutes)
}

/// Formats hours as both decimal and clock form, e.g. `7.50 (07:30)`.
pub fn format_hours_long(hours: f64) -> String {
    format!("{:.2} ({})", hours, format_hours(hours.abs()))
}

/// Shortens notes for table cells, ending truncated text with `...`.
pub fn truncate_notes(notes: &str) -> String {
    if notes.chars().count() > NOTES_DISPLAY_WIDTH {
        let head: String = notes.chars().take(NOTES_DISPLAY_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        notes.to_string()
    }
}

/// Parses a `YYYY-MM-DD` date, also accepting the keyword `today`.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, chrono::ParseError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("today") {
        Ok(today)
    } else {
        NaiveDate::parse_from_str(input, "%Y-%m-%d")
    }
}
