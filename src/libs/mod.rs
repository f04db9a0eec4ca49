//! Core library modules for harvest-cli.
//!
//! ## Modules
//!
//! - **Reporting core**: `period`, `summary`, `capacity`, `report`
//! - **Data**: `entry`, `config`
//! - **User interface**: `formatter`, `messages`, `prompt`, `view`

pub mod capacity;
pub mod config;
pub mod entry;
pub mod formatter;
pub mod messages;
pub mod period;
pub mod prompt;
pub mod report;
pub mod summary;
pub mod view;
