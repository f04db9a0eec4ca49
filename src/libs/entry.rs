use chrono::NaiveDate;
use serde::Serialize;

/// A logged block of time, as consumed by the summaries and reports.
///
/// Entries come from the Harvest API already resolved to project and task
/// names; the reporting code never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub project_id: i64,
    pub project_name: String,
    pub task_id: i64,
    pub task_name: String,
    /// Decimal hours, e.g. `7.5`.
    pub hours: f64,
    pub notes: String,
}

impl TimeEntry {
    pub fn new(date: NaiveDate, project_name: &str, task_id: i64, task_name: &str, hours: f64) -> Self {
        TimeEntry {
            id: 0,
            date,
            project_id: 0,
            project_name: project_name.to_string(),
            task_id,
            task_name: task_name.to_string(),
            hours,
            notes: String::new(),
        }
    }
}
