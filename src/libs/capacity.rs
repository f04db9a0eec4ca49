//! Capacity and utilization math.
//!
//! A period's capacity is the configured monthly hour budget multiplied by the
//! period's length in months. Billable hours above that budget are overtime;
//! below it, the difference is capacity still remaining.
//!
//! ## Formulas
//!
//! ```text
//! length    = months_between(start, end + 1 day)
//! capacity  = monthly_capacity_hours * length
//! overtime  = billable_hours - capacity        (negative = remaining)
//! days      = overtime / 8
//! ```
//!
//! Ratios whose denominator is zero are reported as [`Ratio::Undefined`]
//! rather than as NaN or infinity.

use crate::libs::entry::TimeEntry;
use crate::libs::period::{days_in_month, YearStart};
use crate::libs::summary::{classify_billable, BillableTaskSet};
use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Monthly capacity used when none (or a non-positive value) is configured.
pub const DEFAULT_MONTHLY_CAPACITY_HOURS: f64 = 160.0;

/// Length of a workday used to express overtime in days.
pub const WORKDAY_HOURS: f64 = 8.0;

/// Capacity settings for utilization reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityConfig {
    monthly_capacity_hours: f64,
    year_start: YearStart,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            monthly_capacity_hours: DEFAULT_MONTHLY_CAPACITY_HOURS,
            year_start: YearStart::default(),
        }
    }
}

impl CapacityConfig {
    /// Builds a capacity config, falling back to 160 hours when the monthly
    /// capacity is missing, zero, negative or not a number.
    pub fn new(monthly_capacity_hours: Option<f64>, year_start: YearStart) -> Self {
        let monthly_capacity_hours = match monthly_capacity_hours {
            Some(hours) if hours > 0.0 => hours,
            _ => DEFAULT_MONTHLY_CAPACITY_HOURS,
        };
        Self {
            monthly_capacity_hours,
            year_start,
        }
    }

    pub fn monthly_capacity_hours(&self) -> f64 {
        self.monthly_capacity_hours
    }

    pub fn year_start(&self) -> YearStart {
        self.year_start
    }
}

/// A quotient that may be undefined because its denominator is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Defined(f64),
    Undefined,
}

impl Ratio {
    pub fn of(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            Ratio::Undefined
        } else {
            Ratio::Defined(numerator / denominator)
        }
    }

    /// The ratio as a percentage, if defined.
    pub fn percent(&self) -> Option<f64> {
        match self {
            Ratio::Defined(value) => Some(value * 100.0),
            Ratio::Undefined => None,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percent() {
            Some(percent) => write!(f, "{:.1}%", percent),
            None => write!(f, "N/A"),
        }
    }
}

impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.percent() {
            Some(percent) => serializer.serialize_some(&percent),
            None => serializer.serialize_none(),
        }
    }
}

/// Where a period stands against its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CapacityStatus {
    /// No hours were logged, or the period has no capacity to compare against.
    NoData,
    Overtime { hours: f64, days: f64 },
    Remaining { hours: f64, days: f64 },
}

/// Capacity and utilization figures for one period.
///
/// Serialized with the derived `billable_share`, `utilization` and `status`
/// alongside the raw figures; undefined ratios become `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CapacityReport {
    pub period_length_months: f64,
    pub period_capacity_hours: f64,
    /// Always `billable_hours + non_billable_hours`.
    pub total_hours: f64,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    /// Positive means overtime, negative means capacity remaining.
    pub overtime_or_remaining_hours: f64,
    pub overtime_or_remaining_days: f64,
}

impl CapacityReport {
    /// True when no hours were logged in the period.
    pub fn is_empty(&self) -> bool {
        self.total_hours == 0.0
    }

    /// Share of logged hours that were billable.
    pub fn billable_share(&self) -> Ratio {
        Ratio::of(self.billable_hours, self.total_hours)
    }

    /// Billable hours relative to the period capacity.
    pub fn utilization(&self) -> Ratio {
        Ratio::of(self.billable_hours, self.period_capacity_hours)
    }

    pub fn status(&self) -> CapacityStatus {
        if self.total_hours == 0.0 || self.period_capacity_hours == 0.0 {
            return CapacityStatus::NoData;
        }
        if self.overtime_or_remaining_hours > 0.0 {
            CapacityStatus::Overtime {
                hours: self.overtime_or_remaining_hours,
                days: self.overtime_or_remaining_days,
            }
        } else {
            CapacityStatus::Remaining {
                hours: -self.overtime_or_remaining_hours,
                days: -self.overtime_or_remaining_days,
            }
        }
    }
}

impl Serialize for CapacityReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CapacityReport", 10)?;
        state.serialize_field("period_length_months", &self.period_length_months)?;
        state.serialize_field("period_capacity_hours", &self.period_capacity_hours)?;
        state.serialize_field("total_hours", &self.total_hours)?;
        state.serialize_field("billable_hours", &self.billable_hours)?;
        state.serialize_field("non_billable_hours", &self.non_billable_hours)?;
        state.serialize_field("overtime_or_remaining_hours", &self.overtime_or_remaining_hours)?;
        state.serialize_field("overtime_or_remaining_days", &self.overtime_or_remaining_days)?;
        state.serialize_field("billable_share", &self.billable_share())?;
        state.serialize_field("utilization", &self.utilization())?;
        state.serialize_field("status", &self.status())?;
        state.end()
    }
}

/// Length of `[start, end)` in months.
///
/// Whole calendar months are counted by stepping forward from `start` while
/// the next step still fits before `end`. Any trailing partial month adds
/// `end.day / days_in(end.month)`, which ignores where inside the month the
/// partial segment begins. Returns 0.0 when `end <= start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> f64 {
    if end <= start {
        return 0.0;
    }

    let mut whole = 0u32;
    let mut cursor = start;
    // Step from `start` each time so a 31st anchor does not drift after February.
    while let Some(next) = start.checked_add_months(Months::new(whole + 1)) {
        if next > end {
            break;
        }
        whole += 1;
        cursor = next;
    }

    let mut months = f64::from(whole);
    if cursor < end {
        months += f64::from(end.day()) / f64::from(days_in_month(end.year(), end.month()));
    }
    months
}

/// Builds the capacity report for the inclusive period `[period_start, period_end]`.
pub fn build_capacity_report(
    entries: &[TimeEntry],
    capacity: &CapacityConfig,
    billable: &BillableTaskSet,
    period_start: NaiveDate,
    period_end: NaiveDate,
) -> CapacityReport {
    let period_length_months = months_between(period_start, period_end + Duration::days(1));
    let period_capacity_hours = capacity.monthly_capacity_hours() * period_length_months;
    let split = classify_billable(entries, billable);
    let overtime_or_remaining_hours = split.billable_hours - period_capacity_hours;

    CapacityReport {
        period_length_months,
        period_capacity_hours,
        total_hours: split.total_hours(),
        billable_hours: split.billable_hours,
        non_billable_hours: split.non_billable_hours,
        overtime_or_remaining_hours,
        overtime_or_remaining_days: overtime_or_remaining_hours / WORKDAY_HOURS,
    }
}
