use super::{day_entries, entry_option};
use crate::{
    api::harvest::Harvest,
    libs::{config::Config, formatter::parse_date, messages::Message, prompt, view::View},
    msg_debug, msg_error, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(help = "Time entry ID to delete directly")]
    id: Option<i64>,
    #[arg(short, long = "non-interactive", requires = "id", help = "Delete the given ID without asking for confirmation")]
    non_interactive: bool,
    #[arg(short, long, help = "Date in YYYY-MM-DD format (default: today)")]
    date: Option<String>,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let (path, config) = Config::load()?;
    msg_debug!(Message::ConfigFileUsed(path.display().to_string()));
    let client = Harvest::new(&config.harvest_api)?;

    match args.id {
        Some(id) => delete_one(&client, id, !args.non_interactive).await,
        None => {
            let today = Local::now().date_naive();
            let date = match &args.date {
                Some(value) => parse_date(value, today).map_err(|e| msg_error_anyhow!(Message::InvalidDate(e.to_string())))?,
                None => prompt::pick_date(today)?,
            };
            delete_many(&client, date).await
        }
    }
}

/// Shows one entry and deletes it, asking first when `confirm` is set.
async fn delete_one(client: &Harvest, id: i64, confirm: bool) -> Result<()> {
    let entry = client.time_entry(id).await?;

    msg_print!(Message::SelectedEntryHeader, true);
    View::entry(&entry)?;

    if confirm {
        let actions = [Message::OptionDeleteEntry, Message::OptionCancelDeletion];
        if prompt::select(Message::PromptWhatToDo, &actions, 1)? != 0 {
            msg_info!(Message::DeletionCancelled);
            return Ok(());
        }
    }

    client.delete_time_entry(id).await?;
    msg_success!(Message::EntryDeleted(id));

    Ok(())
}

/// Lets the user tick entries of `date` and deletes them one by one.
async fn delete_many(client: &Harvest, date: chrono::NaiveDate) -> Result<()> {
    let entries = day_entries(client, date).await?;
    if entries.is_empty() {
        return Ok(());
    }

    let options: Vec<String> = entries.iter().map(entry_option).collect();
    let selected = prompt::multi_select(Message::PromptSelectEntriesToDelete, &options)?;
    if selected.is_empty() {
        msg_info!(Message::NoEntriesSelected);
        return Ok(());
    }

    msg_print!(Message::SelectedEntriesHeader, true);
    let chosen: Vec<_> = selected.iter().map(|&index| entries[index].clone()).collect();
    View::entries(&chosen)?;

    if !prompt::confirm(Message::PromptConfirmDeleteEntries(chosen.len()))? {
        msg_info!(Message::DeletionCancelled);
        return Ok(());
    }

    let mut succeeded = 0;
    for entry in &chosen {
        match client.delete_time_entry(entry.id).await {
            Ok(()) => {
                succeeded += 1;
                msg_success!(Message::EntryDeleted(entry.id));
            }
            Err(e) => msg_error!(Message::EntryDeleteFailed(entry.id, e.to_string())),
        }
    }

    msg_print!(
        Message::DeletionSummary {
            total: chosen.len(),
            succeeded,
            failed: chosen.len() - succeeded,
        },
        true
    );

    Ok(())
}
