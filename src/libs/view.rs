use crate::libs::capacity::{CapacityReport, CapacityStatus, Ratio};
use crate::libs::entry::TimeEntry;
use crate::libs::formatter::{format_hours, format_hours_long, truncate_notes};
use crate::libs::summary::ProjectSummary;
use anyhow::Result;
use prettytable::{row, Table};
use std::collections::BTreeMap;

pub struct View {}

impl View {
    pub fn entries_table(entries: &[TimeEntry]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "PROJECT | TASK", "NOTES", "TIME"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                format!("{} ({}) | {} ({})", entry.project_name, entry.project_id, entry.task_name, entry.task_id),
                truncate_notes(&entry.notes),
                format_hours(entry.hours)
            ]);
        }

        table
    }

    pub fn entries(entries: &[TimeEntry]) -> Result<()> {
        Self::entries_table(entries).printstd();

        Ok(())
    }

    /// Project rows show the project total; task rows below leave the project column empty.
    pub fn projects_table(projects: &BTreeMap<String, ProjectSummary>) -> Table {
        let mut table = Table::new();

        table.add_row(row!["PROJECT", "TASK", "TIME"]);
        for summary in projects.values() {
            table.add_row(row![summary.project_name, "", format_hours(summary.total_hours)]);
            for (task, hours) in &summary.tasks {
                table.add_row(row!["", task, format_hours(*hours)]);
            }
        }

        table
    }

    pub fn projects(projects: &BTreeMap<String, ProjectSummary>) -> Result<()> {
        Self::projects_table(projects).printstd();

        Ok(())
    }

    pub fn tasks_table(tasks: &BTreeMap<String, f64>, total_hours: f64) -> Table {
        let mut table = Table::new();

        table.add_row(row!["TASK", "TIME", "SHARE"]);
        for (task, hours) in tasks {
            table.add_row(row![task, format_hours(*hours), Ratio::of(*hours, total_hours)]);
        }

        table
    }

    pub fn tasks(tasks: &BTreeMap<String, f64>, total_hours: f64) -> Result<()> {
        Self::tasks_table(tasks, total_hours).printstd();

        Ok(())
    }

    pub fn capacity_table(report: &CapacityReport) -> Table {
        let mut table = Table::new();

        table.add_row(row!["Billable hours", format_hours_long(report.billable_hours)]);
        table.add_row(row!["Non-billable hours", format_hours_long(report.non_billable_hours)]);
        table.add_row(row![
            "Capacity",
            format!(
                "{} over {:.2} months",
                format_hours_long(report.period_capacity_hours),
                report.period_length_months
            )
        ]);
        match report.status() {
            CapacityStatus::Overtime { hours, days } => {
                table.add_row(row!["Overtime", format!("{} = {:.2} days", format_hours_long(hours), days)]);
            }
            CapacityStatus::Remaining { hours, days } => {
                table.add_row(row!["Remaining", format!("{} = {:.2} days", format_hours_long(hours), days)]);
            }
            CapacityStatus::NoData => {
                table.add_row(row!["Overtime / Remaining", "N/A"]);
            }
        }
        table.add_row(row!["Billable share", report.billable_share()]);
        table.add_row(row!["Utilization", report.utilization()]);

        table
    }

    pub fn capacity(report: &CapacityReport) -> Result<()> {
        Self::capacity_table(report).printstd();

        Ok(())
    }

    pub fn entry(entry: &TimeEntry) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", entry.id]);
        table.add_row(row!["Date", entry.date.format("%Y-%m-%d")]);
        table.add_row(row!["Project", format!("{} ({})", entry.project_name, entry.project_id)]);
        table.add_row(row!["Task", format!("{} ({})", entry.task_name, entry.task_id)]);
        table.add_row(row!["Time", format_hours(entry.hours)]);
        table.add_row(row!["Notes", entry.notes]);
        table.printstd();

        Ok(())
    }
}
