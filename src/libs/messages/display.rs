//! Display implementation for application messages.
//!
//! All user-facing text lives here, so wording stays consistent across
//! commands and can be changed in one place.

use super::types::Message;
use crate::libs::period::PeriodKind;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigFileUsed(path) => format!("Using config file: {}", path),
            Message::ConfigFileHeader(path) => format!("Configuration file: {}", path),
            Message::ConfigContentsHeader => "Configuration contents:\n------------------------".to_string(),
            Message::NoProjectsConfigured => "No projects configured. Add projects to config.json".to_string(),
            Message::ProjectHasNoTasks(project) => format!("Project '{}' has no tasks configured", project),
            Message::UsingDefaultDate(date) => format!("Using default date: {}", date),
            Message::UsingDefaultProject(name, id) => format!("Using default project: {} (ID: {})", name, id),
            Message::UsingDefaultTask(name, id) => format!("Using default task: {} (ID: {})", name, id),

            // === LISTING MESSAGES ===
            Message::FetchingEntries(label) => format!("Fetching time entries for {}...", label),
            Message::FetchingEntriesForWeek(label) => format!("Fetching time entries for week of {}...", label),
            Message::NoEntriesFound(label) => format!("No time entries found for {}", label),
            Message::NoEntriesFoundForWeek(label) => format!("No time entries found for week of {}", label),
            Message::EntriesHeader(date) => format!("Time Entries for {}:", date),
            Message::PeriodSummaryHeader(kind, label) => {
                let title = match kind {
                    PeriodKind::Day => "Daily",
                    PeriodKind::Week => "Weekly",
                    PeriodKind::Month => "Monthly",
                    PeriodKind::Year => "Yearly",
                };
                format!("{} Summary ({}):", title, label)
            }
            Message::TaskDistributionHeader => "Task Distribution:".to_string(),
            Message::CapacityHeader => "Capacity:".to_string(),
            Message::TotalHours(duration) => format!("Total: {} hours", duration),

            // === ENTRY MESSAGES ===
            Message::EntryDetailsHeader => "Time Entry Details:".to_string(),
            Message::SelectedEntryHeader => "Selected Time Entry Details:".to_string(),
            Message::SendingEntry => "Sending time entry to Harvest...".to_string(),
            Message::EntryCreated => "Time entry created successfully in Harvest!".to_string(),
            Message::EntryUpdated => "Time entry updated successfully".to_string(),
            Message::EntryDeleted(id) => format!("Time entry {} deleted successfully", id),
            Message::EntryDeleteFailed(id, error) => format!("Failed to delete time entry {}: {}", id, error),
            Message::ChangesHeader => "Summary of Changes:".to_string(),
            Message::FieldChange(field, old, new) => format!("{}: {} -> {}", field, old, new),
            Message::NoChanges => "No changes to save".to_string(),
            Message::UpdateCancelled => "Update cancelled".to_string(),
            Message::DeletionCancelled => "Deletion cancelled".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::NoEntriesSelected => "No entries selected. Operation cancelled.".to_string(),
            Message::SelectedEntriesHeader => "Selected Time Entries:".to_string(),
            Message::DeletionSummary { total, succeeded, failed } => {
                format!("Deletion Summary:\nTotal: {} entries\nSuccessful: {}\nFailed: {}", total, succeeded, failed)
            }

            // === INPUT ERRORS ===
            Message::InvalidDate(error) => format!("Invalid date format. Please use YYYY-MM-DD format: {}", error),
            Message::InvalidDuration(error) => format!("Invalid duration format: {}", error),

            // === PROMPTS ===
            Message::PromptDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptEnterDate => "Enter date (YYYY-MM-DD)".to_string(),
            Message::PromptTime => "Time (HH:MM)".to_string(),
            Message::PromptNotes => "Notes".to_string(),
            Message::PromptSelectProject => "Select Project".to_string(),
            Message::PromptSelectTask => "Select Task".to_string(),
            Message::PromptSelectOption => "Select an option".to_string(),
            Message::PromptWhatToDo => "What would you like to do?".to_string(),
            Message::PromptSelectEntryToUpdate => "Select a time entry to update".to_string(),
            Message::PromptSelectEntriesToDelete => "Select time entries to delete (space to toggle, enter to confirm)".to_string(),
            Message::PromptConfirmDeleteEntries(count) => format!("Are you sure you want to delete {} entries?", count),
            Message::PromptNavigation => "Navigation".to_string(),

            // === MENU OPTIONS ===
            Message::OptionUseDate => "Use this date".to_string(),
            Message::OptionEnterDate => "Enter a different date".to_string(),
            Message::OptionUpdateEntry => "Update this time entry".to_string(),
            Message::OptionCancelUpdate => "Cancel update".to_string(),
            Message::OptionSaveChanges => "Save changes".to_string(),
            Message::OptionDeleteEntry => "Delete this time entry".to_string(),
            Message::OptionCancelDeletion => "Cancel deletion".to_string(),
            Message::OptionPrevious(kind) => format!("Previous {}", kind),
            Message::OptionNext(kind) => format!("Next {}", kind),
            Message::OptionExit => "Exit".to_string(),
        };

        write!(f, "{}", text)
    }
}
