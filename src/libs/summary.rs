//! Grouping of time entries by project and task, and billable classification.
//!
//! All maps are `BTreeMap`s so that output is ordered by name and identical
//! from run to run. Hours are accumulated in input order and never rounded;
//! rounding happens only when values are formatted for display.

use crate::libs::entry::TimeEntry;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Hours logged against one project, broken down by task.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub project_name: String,
    pub tasks: BTreeMap<String, f64>,
    pub total_hours: f64,
}

/// Task ids counted as billable.
///
/// An empty set means every task is billable, not that none is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BillableTaskSet(BTreeSet<i64>);

impl BillableTaskSet {
    pub fn new<I: IntoIterator<Item = i64>>(task_ids: I) -> Self {
        Self(task_ids.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_billable(&self, task_id: i64) -> bool {
        self.0.is_empty() || self.0.contains(&task_id)
    }
}

impl FromIterator<i64> for BillableTaskSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Partition of entries into billable and non-billable hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BillableSplit {
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub billable_by_task: BTreeMap<String, f64>,
    pub non_billable_by_task: BTreeMap<String, f64>,
}

impl BillableSplit {
    /// Total logged hours, defined as the sum of the two buckets so that
    /// `billable_hours + non_billable_hours == total_hours()` holds exactly.
    pub fn total_hours(&self) -> f64 {
        self.billable_hours + self.non_billable_hours
    }
}

/// Groups entries by project name, then by task name within each project.
pub fn group_by_project_and_task(entries: &[TimeEntry]) -> BTreeMap<String, ProjectSummary> {
    let mut projects: BTreeMap<String, ProjectSummary> = BTreeMap::new();

    for entry in entries {
        let summary = projects.entry(entry.project_name.clone()).or_insert_with(|| ProjectSummary {
            project_name: entry.project_name.clone(),
            ..ProjectSummary::default()
        });
        *summary.tasks.entry(entry.task_name.clone()).or_insert(0.0) += entry.hours;
        summary.total_hours += entry.hours;
    }

    projects
}

/// Groups entries by task name across all projects.
pub fn group_by_task(entries: &[TimeEntry]) -> BTreeMap<String, f64> {
    let mut tasks = BTreeMap::new();
    for entry in entries {
        *tasks.entry(entry.task_name.clone()).or_insert(0.0) += entry.hours;
    }
    tasks
}

/// Splits entries into billable and non-billable buckets.
///
/// Every entry lands in exactly one bucket.
pub fn classify_billable(entries: &[TimeEntry], billable: &BillableTaskSet) -> BillableSplit {
    let mut split = BillableSplit::default();

    for entry in entries {
        if billable.is_billable(entry.task_id) {
            split.billable_hours += entry.hours;
            *split.billable_by_task.entry(entry.task_name.clone()).or_insert(0.0) += entry.hours;
        } else {
            split.non_billable_hours += entry.hours;
            *split.non_billable_by_task.entry(entry.task_name.clone()).or_insert(0.0) += entry.hours;
        }
    }

    split
}
