//! Period reports: everything shown for one resolved period.
//!
//! A [`PeriodReport`] bundles the entries of a period with the project/task
//! grouping, the cross-project task distribution, the billable split and the
//! capacity figures. The listing command renders it either as tables or as
//! JSON; both views are built from the same values.

use crate::libs::capacity::{build_capacity_report, CapacityConfig, CapacityReport};
use crate::libs::entry::TimeEntry;
use crate::libs::period::PeriodRange;
use crate::libs::summary::{classify_billable, group_by_project_and_task, group_by_task, BillableSplit, BillableTaskSet, ProjectSummary};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodReport {
    pub period: PeriodRange,
    pub entries: Vec<TimeEntry>,
    pub projects: BTreeMap<String, ProjectSummary>,
    pub tasks: BTreeMap<String, f64>,
    pub billable: BillableSplit,
    pub capacity: CapacityReport,
}

impl PeriodReport {
    /// Aggregates `entries` for `period`.
    ///
    /// Entries are taken as fetched for the period's query bounds; they are
    /// not filtered again by date.
    pub fn build(period: PeriodRange, entries: Vec<TimeEntry>, capacity: &CapacityConfig, billable: &BillableTaskSet) -> Self {
        let projects = group_by_project_and_task(&entries);
        let tasks = group_by_task(&entries);
        let split = classify_billable(&entries, billable);
        let capacity = build_capacity_report(&entries, capacity, billable, period.start, period.end);

        Self {
            period,
            entries,
            projects,
            tasks,
            billable: split,
            capacity,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_hours(&self) -> f64 {
        self.capacity.total_hours
    }
}
