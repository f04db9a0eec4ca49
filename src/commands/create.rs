use crate::{
    api::harvest::{Harvest, NewTimeEntry},
    libs::{
        config::{Config, Project, Task},
        entry::TimeEntry,
        formatter::{parse_date, parse_duration},
        messages::Message,
        prompt,
        view::View,
    },
    msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(short = 'D', long = "default-mode", help = "Use today with the default project and task from config")]
    default_mode: bool,
    #[arg(short, long, help = "Date in YYYY-MM-DD format (default: today)")]
    date: Option<String>,
    #[arg(short, long, help = "Project name")]
    project: Option<String>,
    #[arg(short = 'a', long = "action", help = "Task name")]
    task: Option<String>,
    #[arg(short, long, help = "Duration in HH:MM format")]
    time: Option<String>,
    #[arg(short, long, help = "Notes for the time entry")]
    notes: Option<String>,
}

pub async fn cmd(args: CreateArgs) -> Result<()> {
    let (path, config) = Config::load()?;
    msg_debug!(Message::ConfigFileUsed(path.display().to_string()));
    let today = Local::now().date_naive();

    let (date, project, task) = if args.default_mode {
        let project = config.default_project()?;
        let task = config.default_task(project)?;
        msg_info!(Message::UsingDefaultDate(today.format("%Y-%m-%d").to_string()));
        msg_info!(Message::UsingDefaultProject(project.name.clone(), project.id));
        msg_info!(Message::UsingDefaultTask(task.name.clone(), task.id));
        (today, project, task)
    } else {
        let date = match &args.date {
            Some(value) => parse_date(value, today).map_err(|e| msg_error_anyhow!(Message::InvalidDate(e.to_string())))?,
            None => prompt::date(Message::PromptDate, today)?,
        };
        let project = select_project(&config, args.project.as_deref())?;
        let task = select_task(project, args.task.as_deref())?;
        (date, project, task)
    };

    let hours = match &args.time {
        Some(value) => parse_duration(value).map_err(|e| msg_error_anyhow!(Message::InvalidDuration(e.to_string())))?,
        None => prompt::duration(None)?,
    };

    let new_entry = NewTimeEntry {
        project_id: project.id,
        task_id: task.id,
        spent_date: date,
        hours,
        notes: args.notes.unwrap_or_default(),
    };

    msg_print!(Message::EntryDetailsHeader, true);
    View::entry(&preview(&new_entry, project, task))?;

    let client = Harvest::new(&config.harvest_api)?;
    msg_print!(Message::SendingEntry);
    let created = client.create_time_entry(&new_entry).await?;

    msg_success!(Message::EntryCreated);
    View::entry(&created)?;

    Ok(())
}

/// Resolves the project by name, or asks the user to pick one.
pub(crate) fn select_project<'a>(config: &'a Config, name: Option<&str>) -> Result<&'a Project> {
    if let Some(name) = name {
        return Ok(config.require_project(name)?);
    }
    if config.projects.is_empty() {
        msg_bail_anyhow!(Message::NoProjectsConfigured);
    }
    let index = prompt::select(Message::PromptSelectProject, &config.project_names(), 0)?;
    Ok(&config.projects[index])
}

/// Resolves the task by name within `project`, or asks the user to pick one.
pub(crate) fn select_task<'a>(project: &'a Project, name: Option<&str>) -> Result<&'a Task> {
    if let Some(name) = name {
        return Ok(project.require_task(name)?);
    }
    if project.tasks.is_empty() {
        msg_bail_anyhow!(Message::ProjectHasNoTasks(project.name.clone()));
    }
    let index = prompt::select(Message::PromptSelectTask, &project.task_names(), 0)?;
    Ok(&project.tasks[index])
}

fn preview(new_entry: &NewTimeEntry, project: &Project, task: &Task) -> TimeEntry {
    TimeEntry {
        id: 0,
        date: new_entry.spent_date,
        project_id: project.id,
        project_name: project.name.clone(),
        task_id: task.id,
        task_name: task.name.clone(),
        hours: new_entry.hours,
        notes: new_entry.notes.clone(),
    }
}
