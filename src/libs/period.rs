//! Reporting period resolution.
//!
//! Turns a reference date and a period kind into a concrete, inclusive date
//! range, and steps from one range to the adjacent one. The listing command
//! uses the resolved range both for the `from`/`to` query parameters sent to
//! Harvest and for the headers printed above each summary.
//!
//! ## Period Shapes
//!
//! - **Day**: the reference date itself
//! - **Week**: Monday through Sunday (ISO weekday numbering, Sunday is day 7)
//! - **Month**: first through last calendar day
//! - **Year**: fiscal year anchored at a configurable month/day, ending the day
//!   before the next anchor and clipped to today
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use harvest_cli::libs::period::{PeriodKind, PeriodResolver, YearStart};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let resolver = PeriodResolver::with_today(YearStart::new(4, 1).unwrap(), today);
//! let year = resolver.resolve(PeriodKind::Year, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
//! assert_eq!(year.label, "2023/2024");
//! ```

use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors raised while validating period settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// The fiscal year start month/day is outside the accepted bounds.
    #[error("invalid period configuration: {0}")]
    InvalidPeriodConfiguration(String),
}

/// Granularity of a reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Day,
    Week,
    Month,
    Year,
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PeriodKind::Day => "day",
            PeriodKind::Week => "week",
            PeriodKind::Month => "month",
            PeriodKind::Year => "year",
        };
        write!(f, "{}", name)
    }
}

/// Navigation direction between adjacent periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Fiscal year anchor expressed as a month and day, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearStart {
    month: u32,
    day: u32,
}

impl Default for YearStart {
    fn default() -> Self {
        Self { month: 1, day: 1 }
    }
}

impl YearStart {
    /// Validates a month (1-12) and day (1-31) pair.
    ///
    /// The day must also exist in the month for at least one year, so
    /// `02-29` is accepted while `02-30` and `04-31` are rejected.
    pub fn new(month: u32, day: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidPeriodConfiguration(format!(
                "year start month {} is outside 1-12",
                month
            )));
        }
        if !(1..=31).contains(&day) {
            return Err(PeriodError::InvalidPeriodConfiguration(format!(
                "year start day {} is outside 1-31",
                day
            )));
        }
        // 2000 is a leap year, so February allows 29 here.
        let longest = days_in_month(2000, month);
        if day > longest {
            return Err(PeriodError::InvalidPeriodConfiguration(format!(
                "year start {:02}-{:02} is not a valid calendar day",
                month, day
            )));
        }
        Ok(Self { month, day })
    }

    /// Parses the `MM-DD` form used by the `year_start_date` setting.
    pub fn parse(value: &str) -> Result<Self, PeriodError> {
        let (month, day) = value.trim().split_once('-').ok_or_else(|| {
            PeriodError::InvalidPeriodConfiguration(format!("invalid year_start_date format: {}, expected MM-DD", value))
        })?;
        let month = month
            .parse::<u32>()
            .map_err(|_| PeriodError::InvalidPeriodConfiguration(format!("invalid month in year_start_date: {}", month)))?;
        let day = day
            .parse::<u32>()
            .map_err(|_| PeriodError::InvalidPeriodConfiguration(format!("invalid day in year_start_date: {}", day)))?;
        Self::new(month, day)
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Whether the anchor is January 1st, i.e. a plain calendar year.
    pub fn is_calendar_year(&self) -> bool {
        self.month == 1 && self.day == 1
    }

    /// The anchor date within `year`.
    ///
    /// A February 29th anchor rolls over to March 1st in common years.
    pub fn anchor(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month, self.day).unwrap_or_else(|| {
            first_of_month(year, self.month) + Duration::days(i64::from(self.day) - 1)
        })
    }
}

/// An inclusive date range with its display label.
///
/// Invariant: `start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodRange {
    pub kind: PeriodKind,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl PeriodRange {
    /// `from`/`to` values for the Harvest time entries query.
    pub fn query_bounds(&self) -> (String, String) {
        (self.start.format("%Y-%m-%d").to_string(), self.end.format("%Y-%m-%d").to_string())
    }
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = first_of_month(year, month);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(if year < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// The single-day range for `reference`.
pub fn resolve_day(reference: NaiveDate) -> PeriodRange {
    PeriodRange {
        kind: PeriodKind::Day,
        start: reference,
        end: reference,
        label: reference.format("%Y-%m-%d").to_string(),
    }
}

/// Monday on or before `reference` through the following Sunday.
pub fn resolve_week(reference: NaiveDate) -> PeriodRange {
    let offset = i64::from(reference.weekday().number_from_monday()) - 1;
    let start = reference - Duration::days(offset);
    let end = start + Duration::days(6);
    PeriodRange {
        kind: PeriodKind::Week,
        start,
        end,
        label: format!("{} to {}", start.format("%b %-d"), end.format("%b %-d, %Y")),
    }
}

/// First through last calendar day of the month containing `reference`.
pub fn resolve_month(reference: NaiveDate) -> PeriodRange {
    let start = first_of_month(reference.year(), reference.month());
    // First day of the next month, minus one day.
    let end = start
        .checked_add_months(Months::new(1))
        .map(|next| next - Duration::days(1))
        .unwrap_or(NaiveDate::MAX);
    PeriodRange {
        kind: PeriodKind::Month,
        start,
        end,
        label: start.format("%B %Y").to_string(),
    }
}

/// The fiscal year containing `reference`, clipped to `today`.
///
/// When `today` precedes the fiscal year start, the range collapses to the
/// start date so that `start <= end` still holds.
pub fn resolve_year(reference: NaiveDate, year_start: YearStart, today: NaiveDate) -> PeriodRange {
    let mut year = reference.year();
    if reference < year_start.anchor(year) {
        year -= 1;
    }
    let start = year_start.anchor(year);
    let mut end = year_start.anchor(year + 1) - Duration::days(1);
    if end > today {
        end = today.max(start);
    }
    let label = if year_start.is_calendar_year() {
        year.to_string()
    } else {
        format!("{}/{}", year, year + 1)
    };
    PeriodRange {
        kind: PeriodKind::Year,
        start,
        end,
        label,
    }
}

/// Resolves and steps periods for a fixed fiscal year anchor and "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodResolver {
    year_start: YearStart,
    today: NaiveDate,
}

impl PeriodResolver {
    /// Creates a resolver that clips yearly ranges to the local wall-clock date.
    pub fn new(year_start: YearStart) -> Self {
        Self::with_today(year_start, Local::now().date_naive())
    }

    pub fn with_today(year_start: YearStart, today: NaiveDate) -> Self {
        Self { year_start, today }
    }

    pub fn year_start(&self) -> YearStart {
        self.year_start
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn resolve(&self, kind: PeriodKind, reference: NaiveDate) -> PeriodRange {
        match kind {
            PeriodKind::Day => resolve_day(reference),
            PeriodKind::Week => resolve_week(reference),
            PeriodKind::Month => resolve_month(reference),
            PeriodKind::Year => resolve_year(reference, self.year_start, self.today),
        }
    }

    /// Resolves the period adjacent to `range` in `direction`.
    ///
    /// Days move by one day, weeks by seven days from their Monday, months by
    /// one month from their first day and years by one year from their anchor.
    pub fn step(&self, range: &PeriodRange, direction: Direction) -> PeriodRange {
        let reference = match (range.kind, direction) {
            (PeriodKind::Day, Direction::Previous) => range.start - Duration::days(1),
            (PeriodKind::Day, Direction::Next) => range.start + Duration::days(1),
            (PeriodKind::Week, Direction::Previous) => range.start - Duration::days(7),
            (PeriodKind::Week, Direction::Next) => range.start + Duration::days(7),
            (PeriodKind::Month, Direction::Previous) => range.start - Months::new(1),
            (PeriodKind::Month, Direction::Next) => range.start + Months::new(1),
            (PeriodKind::Year, Direction::Previous) => self.year_start.anchor(range.start.year() - 1),
            (PeriodKind::Year, Direction::Next) => self.year_start.anchor(range.start.year() + 1),
        };
        self.resolve(range.kind, reference)
    }
}
