pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use crate::api::harvest::Harvest;
use crate::libs::entry::TimeEntry;
use crate::libs::formatter::{format_hours, truncate_notes};
use crate::libs::messages::Message;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create a new time entry in Harvest")]
    Create(create::CreateArgs),
    #[command(about = "List time entries and period summaries")]
    List(list::ListArgs),
    #[command(about = "Update an existing time entry")]
    Update(update::UpdateArgs),
    #[command(about = "Delete one or more time entries")]
    Delete(delete::DeleteArgs),
    #[command(about = "Display the current configuration")]
    Config(config::ConfigArgs),
}

#[derive(Debug, Parser)]
#[command(name = "h", author, version, about = "Command-line client for Harvest time tracking", long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Create(args) => create::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Update(args) => update::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Config(args) => config::cmd(args),
        }
    }
}

/// One-line description of an entry for selection lists.
pub(crate) fn entry_option(entry: &TimeEntry) -> String {
    let mut option = format!("{} | {} - {}", entry.project_name, entry.task_name, format_hours(entry.hours));
    if !entry.notes.is_empty() {
        option.push_str(&format!(" - {}", truncate_notes(&entry.notes)));
    }
    option
}

/// Fetches the entries logged on `date`.
pub(crate) async fn day_entries(client: &Harvest, date: NaiveDate) -> Result<Vec<TimeEntry>> {
    let label = date.format("%Y-%m-%d").to_string();
    msg_print!(Message::FetchingEntries(label.clone()));
    let entries = client.time_entries(&label, &label).await?;
    if entries.is_empty() {
        msg_info!(Message::NoEntriesFound(label));
    }
    Ok(entries)
}
