use crate::libs::period::PeriodKind;

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigFileUsed(String),     // path
    ConfigFileHeader(String),   // path
    ConfigContentsHeader,
    NoProjectsConfigured,
    ProjectHasNoTasks(String),  // project name
    UsingDefaultDate(String),   // date
    UsingDefaultProject(String, i64),
    UsingDefaultTask(String, i64),

    // === LISTING MESSAGES ===
    FetchingEntries(String),           // period label
    FetchingEntriesForWeek(String),    // period label
    NoEntriesFound(String),            // period label
    NoEntriesFoundForWeek(String),     // period label
    EntriesHeader(String),             // date
    PeriodSummaryHeader(PeriodKind, String),
    TaskDistributionHeader,
    CapacityHeader,
    TotalHours(String),                // formatted duration

    // === ENTRY MESSAGES ===
    EntryDetailsHeader,
    SelectedEntryHeader,
    SendingEntry,
    EntryCreated,
    EntryUpdated,
    EntryDeleted(i64),
    EntryDeleteFailed(i64, String),
    ChangesHeader,
    FieldChange(String, String, String), // field, old, new
    NoChanges,
    UpdateCancelled,
    DeletionCancelled,
    OperationCancelled,
    NoEntriesSelected,
    SelectedEntriesHeader,
    DeletionSummary { total: usize, succeeded: usize, failed: usize },

    // === INPUT ERRORS ===
    InvalidDate(String),
    InvalidDuration(String),

    // === PROMPTS ===
    PromptDate,
    PromptEnterDate,
    PromptTime,
    PromptNotes,
    PromptSelectProject,
    PromptSelectTask,
    PromptSelectOption,
    PromptWhatToDo,
    PromptSelectEntryToUpdate,
    PromptSelectEntriesToDelete,
    PromptConfirmDeleteEntries(usize),
    PromptNavigation,

    // === MENU OPTIONS ===
    OptionUseDate,
    OptionEnterDate,
    OptionUpdateEntry,
    OptionCancelUpdate,
    OptionSaveChanges,
    OptionDeleteEntry,
    OptionCancelDeletion,
    OptionPrevious(PeriodKind),
    OptionNext(PeriodKind),
    OptionExit,
}
