use super::{day_entries, entry_option};
use crate::{
    api::harvest::{Harvest, TimeEntryUpdate},
    libs::{
        config::Config,
        entry::TimeEntry,
        formatter::{format_hours, parse_date},
        messages::Message,
        prompt,
        view::View,
    },
    msg_debug, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(short, long, help = "Date in YYYY-MM-DD format (default: today)")]
    date: Option<String>,
}

pub async fn cmd(args: UpdateArgs) -> Result<()> {
    let (path, config) = Config::load()?;
    msg_debug!(Message::ConfigFileUsed(path.display().to_string()));
    let client = Harvest::new(&config.harvest_api)?;

    let today = Local::now().date_naive();
    let date = match &args.date {
        Some(value) => parse_date(value, today).map_err(|e| msg_error_anyhow!(Message::InvalidDate(e.to_string())))?,
        None => prompt::pick_date(today)?,
    };

    let entries = day_entries(&client, date).await?;
    if entries.is_empty() {
        return Ok(());
    }

    let options: Vec<String> = entries.iter().map(entry_option).collect();
    let index = prompt::select(Message::PromptSelectEntryToUpdate, &options, 0)?;
    let entry = &entries[index];

    msg_print!(Message::SelectedEntryHeader, true);
    View::entry(entry)?;

    let actions = [Message::OptionUpdateEntry, Message::OptionCancelUpdate];
    if prompt::select(Message::PromptWhatToDo, &actions, 0)? != 0 {
        msg_info!(Message::UpdateCancelled);
        return Ok(());
    }

    let edited = edit(&config, entry)?;
    let update = changes(entry, &edited);
    if update.is_empty() {
        msg_info!(Message::NoChanges);
        return Ok(());
    }

    msg_print!(Message::ChangesHeader, true);
    for change in describe(entry, &edited) {
        msg_print!(change);
    }

    let confirm = [Message::OptionSaveChanges, Message::OptionCancelUpdate];
    if prompt::select(Message::PromptWhatToDo, &confirm, 0)? != 0 {
        msg_info!(Message::UpdateCancelled);
        return Ok(());
    }

    let updated = client.update_time_entry(entry.id, &update).await?;
    msg_success!(Message::EntryUpdated);
    View::entry(&updated)?;

    Ok(())
}

/// Prompts for every editable field, offering the current values as defaults.
fn edit(config: &Config, entry: &TimeEntry) -> Result<TimeEntry> {
    let date = prompt::date(Message::PromptDate, entry.date)?;

    if config.projects.is_empty() {
        return Err(msg_error_anyhow!(Message::NoProjectsConfigured));
    }
    let current_project = config.projects.iter().position(|project| project.id == entry.project_id).unwrap_or(0);
    let project = &config.projects[prompt::select(Message::PromptSelectProject, &config.project_names(), current_project)?];

    if project.tasks.is_empty() {
        return Err(msg_error_anyhow!(Message::ProjectHasNoTasks(project.name.clone())));
    }
    let current_task = project.tasks.iter().position(|task| task.id == entry.task_id).unwrap_or(0);
    let task = &project.tasks[prompt::select(Message::PromptSelectTask, &project.task_names(), current_task)?];

    let hours = prompt::duration(Some(entry.hours))?;
    let notes = prompt::text(Message::PromptNotes, &entry.notes)?;

    Ok(TimeEntry {
        id: entry.id,
        date,
        project_id: project.id,
        project_name: project.name.clone(),
        task_id: task.id,
        task_name: task.name.clone(),
        hours,
        notes,
    })
}

/// The PATCH body holding only the fields that differ.
///
/// Hours are compared at minute precision since that is what the user edits.
fn changes(original: &TimeEntry, edited: &TimeEntry) -> TimeEntryUpdate {
    TimeEntryUpdate {
        project_id: (original.project_id != edited.project_id).then_some(edited.project_id),
        task_id: (original.task_id != edited.task_id).then_some(edited.task_id),
        spent_date: (original.date != edited.date).then_some(edited.date),
        hours: (format_hours(original.hours) != format_hours(edited.hours)).then_some(edited.hours),
        notes: (original.notes != edited.notes).then(|| edited.notes.clone()),
    }
}

fn describe(original: &TimeEntry, edited: &TimeEntry) -> Vec<Message> {
    let mut lines = vec![
        Message::FieldChange(
            "Date".to_string(),
            original.date.format("%Y-%m-%d").to_string(),
            edited.date.format("%Y-%m-%d").to_string(),
        ),
        Message::FieldChange("Project".to_string(), original.project_name.clone(), edited.project_name.clone()),
        Message::FieldChange("Task".to_string(), original.task_name.clone(), edited.task_name.clone()),
        Message::FieldChange("Time".to_string(), format_hours(original.hours), format_hours(edited.hours)),
    ];
    if original.notes != edited.notes {
        lines.push(Message::FieldChange("Notes".to_string(), original.notes.clone(), edited.notes.clone()));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry() -> TimeEntry {
        let mut entry = TimeEntry::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), "Acme", 11, "Development", 7.5);
        entry.id = 42;
        entry.project_id = 101;
        entry
    }

    #[test]
    fn unchanged_entry_produces_empty_update() {
        let original = entry();
        let mut edited = original.clone();
        edited.hours = 7.5 + 1e-9;
        assert!(changes(&original, &edited).is_empty());
    }

    #[test]
    fn only_changed_fields_are_sent() {
        let original = entry();
        let mut edited = original.clone();
        edited.hours = 6.0;
        edited.notes = "Code review".to_string();

        let update = changes(&original, &edited);
        assert_eq!(update.hours, Some(6.0));
        assert_eq!(update.notes.as_deref(), Some("Code review"));
        assert_eq!(update.project_id, None);
        assert_eq!(update.task_id, None);
        assert_eq!(update.spent_date, None);
    }

    #[test]
    fn notes_line_appears_only_when_notes_change() {
        let original = entry();
        assert_eq!(describe(&original, &original).len(), 4);

        let mut edited = original.clone();
        edited.notes = "Pairing".to_string();
        let lines = describe(&original, &edited);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4].to_string(), "Notes:  -> Pairing");
    }
}
