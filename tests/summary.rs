#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use harvest_cli::libs::entry::TimeEntry;
    use harvest_cli::libs::summary::{classify_billable, group_by_project_and_task, group_by_task, BillableTaskSet};

    fn entry(project: &str, task_id: i64, task: &str, hours: f64) -> TimeEntry {
        TimeEntry::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), project, task_id, task, hours)
    }

    fn sample() -> Vec<TimeEntry> {
        vec![
            entry("Zeta | Mobile", 11, "Development", 2.25),
            entry("Acme | Platform", 11, "Development", 1.5),
            entry("Acme | Platform", 12, "Meetings", 0.75),
            entry("Acme | Platform", 11, "Development", 3.5),
            entry("Zeta | Mobile", 13, "Design", 0.5),
        ]
    }

    fn logged(entries: &[TimeEntry]) -> f64 {
        entries.iter().map(|entry| entry.hours).sum()
    }

    #[test]
    fn test_split_total_hours() {
        assert_eq!(classify_billable(&sample(), &BillableTaskSet::new([11])).total_hours(), 8.5);
        assert_eq!(classify_billable(&[], &BillableTaskSet::default()).total_hours(), 0.0);
    }

    #[test]
    fn test_group_by_project_and_task() {
        let projects = group_by_project_and_task(&sample());

        let names: Vec<_> = projects.keys().cloned().collect();
        assert_eq!(names, vec!["Acme | Platform", "Zeta | Mobile"]);

        let acme = &projects["Acme | Platform"];
        assert_eq!(acme.total_hours, 5.75);
        assert_eq!(acme.tasks["Development"], 5.0);
        assert_eq!(acme.tasks["Meetings"], 0.75);

        let zeta = &projects["Zeta | Mobile"];
        assert_eq!(zeta.total_hours, 2.75);
        let tasks: Vec<_> = zeta.tasks.keys().cloned().collect();
        assert_eq!(tasks, vec!["Design", "Development"]);
    }

    #[test]
    fn test_project_totals_equal_task_sums() {
        for summary in group_by_project_and_task(&sample()).values() {
            let task_sum: f64 = summary.tasks.values().sum();
            assert_eq!(task_sum, summary.total_hours);
        }
    }

    #[test]
    fn test_group_by_task_across_projects() {
        let tasks = group_by_task(&sample());
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks["Development"], 7.25);
        assert_eq!(tasks["Design"], 0.5);
        assert_eq!(tasks["Meetings"], 0.75);
    }

    #[test]
    fn test_empty_billable_set_means_everything_is_billable() {
        let entries = sample();
        let split = classify_billable(&entries, &BillableTaskSet::default());
        assert_eq!(split.billable_hours, logged(&entries));
        assert_eq!(split.total_hours(), logged(&entries));
        assert_eq!(split.non_billable_hours, 0.0);
        assert!(split.non_billable_by_task.is_empty());
    }

    #[test]
    fn test_classify_billable_partition() {
        let entries = sample();
        let billable: BillableTaskSet = [11].into_iter().collect();
        let split = classify_billable(&entries, &billable);

        assert_eq!(split.billable_hours, 7.25);
        assert_eq!(split.non_billable_hours, 1.25);
        assert_eq!(split.billable_hours + split.non_billable_hours, split.total_hours());
        assert_eq!(split.billable_by_task.keys().collect::<Vec<_>>(), vec!["Development"]);
        assert_eq!(split.non_billable_by_task["Meetings"], 0.75);
        assert_eq!(split.non_billable_by_task["Design"], 0.5);
    }

    #[test]
    fn test_partition_is_exact_for_decimal_hours() {
        let entries = vec![
            entry("Acme | Platform", 2, "Meetings", 0.2),
            entry("Acme | Platform", 1, "Development", 0.33),
            entry("Acme | Platform", 2, "Meetings", 0.1),
        ];
        let split = classify_billable(&entries, &BillableTaskSet::new([1]));

        assert_eq!(split.billable_hours, 0.33);
        assert_eq!(split.billable_hours + split.non_billable_hours, split.total_hours());
        assert!((split.total_hours() - 0.63).abs() < 1e-9);
    }

    #[test]
    fn test_billable_ids_not_present_in_entries() {
        let entries = sample();
        let billable = BillableTaskSet::new([999]);
        let split = classify_billable(&entries, &billable);
        assert_eq!(split.billable_hours, 0.0);
        assert_eq!(split.non_billable_hours, logged(&entries));
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let entries = sample();
        assert_eq!(group_by_project_and_task(&entries), group_by_project_and_task(&entries));
        assert_eq!(group_by_task(&entries), group_by_task(&entries));
    }
}
