//! Configuration loading for harvest-cli.
//!
//! The configuration is a JSON file that maps project and task names to
//! Harvest ids, names the default project/task for quick entries, holds the
//! reporting settings, and carries the Harvest API credentials.
//!
//! ## File Discovery
//!
//! The first readable file among these locations wins:
//!
//! 1. `./config.json`
//! 2. `<executable dir>/config.json`
//! 3. `~/.harvest-config.json`
//! 4. `../config.json`
//!
//! ## Example
//!
//! ```json
//! {
//!   "projects": [
//!     { "id": 101, "name": "Acme | Platform", "tasks": [{ "id": 11, "name": "Development" }] }
//!   ],
//!   "default_project": "Acme | Platform",
//!   "default_task": "Development",
//!   "year_start_date": "04-01",
//!   "monthly_capacity_hours": 150,
//!   "billable_task_ids": [11],
//!   "harvest_api": { "account_id": "123456", "token": "..." }
//! }
//! ```
//!
//! ## Environment Overrides
//!
//! `HARVEST_ACCOUNT_ID`, `HARVEST_TOKEN` and `HARVEST_BASE_URL` replace the
//! corresponding `harvest_api` values. A `.env` file is loaded by the binary
//! before the configuration is read.
//!
//! ## Validation
//!
//! Reporting settings are validated when the file is loaded. An invalid
//! `year_start_date` fails every command before any request is made.

use crate::libs::capacity::CapacityConfig;
use crate::libs::period::{PeriodError, YearStart};
use crate::libs::summary::BillableTaskSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file name looked up in the working, executable and parent directories.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration file name looked up in the user's home directory.
pub const HOME_CONFIG_FILE_NAME: &str = ".harvest-config.json";

/// Harvest API v2 endpoint used when `base_url` is not configured.
pub const DEFAULT_BASE_URL: &str = "https://api.harvestapp.com/v2";

/// Replacement text for the API token when configuration is displayed.
pub const MASKED_TOKEN: &str = "********";

/// Errors raised while locating, reading or querying the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config.json not found in any of the expected locations: {}", display_paths(.0))]
    NotFound(Vec<PathBuf>),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("project '{0}' not found in configuration")]
    ProjectNotFound(String),

    #[error("task '{task}' not found in project '{project}'")]
    TaskNotFound { project: String, task: String },

    #[error("no default project configured. Please set default_project in config.json")]
    NoDefaultProject,

    #[error("no default task configured. Please set default_task in config.json")]
    NoDefaultTask,

    #[error("Harvest API credentials missing. Set harvest_api.account_id and harvest_api.token in config.json or HARVEST_ACCOUNT_ID and HARVEST_TOKEN in the environment")]
    MissingCredentials,

    #[error(transparent)]
    Period(#[from] PeriodError),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|path| path.display().to_string()).collect::<Vec<_>>().join(", ")
}

/// Harvest API connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ApiConfig {
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ApiConfig {
    /// The configured base URL without a trailing slash, or the Harvest default.
    pub fn base_url(&self) -> &str {
        match self.base_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.trim_end_matches('/'),
            _ => DEFAULT_BASE_URL,
        }
    }

    /// Fails unless both the account id and the token are set.
    pub fn ensure_credentials(&self) -> Result<(), ConfigError> {
        if self.account_id.trim().is_empty() || self.token.trim().is_empty() {
            return Err(ConfigError::MissingCredentials);
        }
        Ok(())
    }
}

/// A Harvest task as named in the configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Task {
    pub id: i64,
    pub name: String,
}

/// A Harvest project and the tasks that can be logged against it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn task_by_name(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.name == name)
    }

    pub fn task_by_id(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Looks up a task by name, failing with a descriptive error.
    pub fn require_task(&self, name: &str) -> Result<&Task, ConfigError> {
        self.task_by_name(name).ok_or_else(|| ConfigError::TaskNotFound {
            project: self.name.clone(),
            task: name.to_string(),
        })
    }

    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|task| task.name.as_str()).collect()
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_project: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_task: Option<String>,

    /// Fiscal year start in `MM-DD` form; January 1st when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_start_date: Option<String>,

    /// Billable hour budget per month; 160 when absent or not positive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_capacity_hours: Option<f64>,

    /// Task ids counted as billable; every task is billable when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub billable_task_ids: Vec<i64>,

    #[serde(default)]
    pub harvest_api: ApiConfig,
}

impl Config {
    /// Locations searched for the configuration file, in priority order.
    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(exe_dir) = env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
            paths.push(exe_dir.join(CONFIG_FILE_NAME));
        }
        if let Some(home) = home_dir() {
            paths.push(home.join(HOME_CONFIG_FILE_NAME));
        }
        paths.push(Path::new("..").join(CONFIG_FILE_NAME));
        paths
    }

    /// Returns the first candidate path that exists as a readable file.
    pub fn locate_in(candidates: &[PathBuf]) -> Result<PathBuf, ConfigError> {
        candidates
            .iter()
            .find(|path| path.is_file() && fs::File::open(path).is_ok())
            .cloned()
            .ok_or_else(|| ConfigError::NotFound(candidates.to_vec()))
    }

    /// Finds the configuration file in the standard locations.
    pub fn locate() -> Result<PathBuf, ConfigError> {
        Self::locate_in(&Self::candidate_paths())
    }

    /// Reads, parses and validates a configuration file.
    pub fn read_from(path: &Path) -> Result<Config, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Locates and reads the configuration, applying environment overrides.
    pub fn load() -> Result<(PathBuf, Config), ConfigError> {
        let path = Self::locate()?;
        let config = Self::read_from(&path)?.with_overrides(|key| env::var(key).ok());
        Ok((path, config))
    }

    /// Replaces API settings with values supplied by `lookup`.
    ///
    /// Empty values are ignored so that a blank variable does not wipe a
    /// configured credential.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        if let Some(account_id) = lookup("HARVEST_ACCOUNT_ID") {
            self.harvest_api.account_id = account_id;
        }
        if let Some(token) = lookup("HARVEST_TOKEN") {
            self.harvest_api.token = token;
        }
        if let Some(base_url) = lookup("HARVEST_BASE_URL") {
            self.harvest_api.base_url = Some(base_url);
        }
        self
    }

    /// Checks the reporting settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.year_start()?;
        Ok(())
    }

    pub fn project_by_name(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.name == name)
    }

    pub fn project_by_id(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Looks up a project by name, failing with a descriptive error.
    pub fn require_project(&self, name: &str) -> Result<&Project, ConfigError> {
        self.project_by_name(name).ok_or_else(|| ConfigError::ProjectNotFound(name.to_string()))
    }

    pub fn project_names(&self) -> Vec<&str> {
        self.projects.iter().map(|project| project.name.as_str()).collect()
    }

    /// The project named by `default_project`.
    pub fn default_project(&self) -> Result<&Project, ConfigError> {
        match self.default_project.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => self.require_project(name),
            _ => Err(ConfigError::NoDefaultProject),
        }
    }

    /// The task named by `default_task` within `project`.
    pub fn default_task<'a>(&self, project: &'a Project) -> Result<&'a Task, ConfigError> {
        match self.default_task.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => project.require_task(name),
            _ => Err(ConfigError::NoDefaultTask),
        }
    }

    /// The fiscal year start, January 1st when not configured.
    pub fn year_start(&self) -> Result<YearStart, PeriodError> {
        match self.year_start_date.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => YearStart::parse(value),
            _ => Ok(YearStart::default()),
        }
    }

    pub fn capacity_config(&self) -> Result<CapacityConfig, PeriodError> {
        Ok(CapacityConfig::new(self.monthly_capacity_hours, self.year_start()?))
    }

    pub fn billable_tasks(&self) -> BillableTaskSet {
        self.billable_task_ids.iter().copied().collect()
    }
}

/// Renders a configuration file as pretty JSON, masking the API token unless
/// `show_sensitive` is set.
///
/// Works on the raw JSON so that unknown keys are shown as written.
pub fn render_config(raw: &str, show_sensitive: bool) -> Result<String, serde_json::Error> {
    let mut value: Value = serde_json::from_str(raw)?;
    if !show_sensitive {
        if let Some(token) = value.get_mut("harvest_api").and_then(|api| api.get_mut("token")) {
            *token = Value::String(MASKED_TOKEN.to_string());
        }
    }
    serde_json::to_string_pretty(&value)
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME").or_else(|| env::var_os("USERPROFILE")).map(PathBuf::from)
}
