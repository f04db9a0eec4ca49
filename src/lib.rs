//! # harvest-cli
//!
//! A command-line client for the Harvest time tracking service.
//!
//! ## Features
//!
//! - **Time Entries**: Create, update and delete entries from the terminal
//! - **Period Summaries**: Daily, weekly, monthly and fiscal-year views grouped by project and task
//! - **Capacity Reporting**: Billable hours against a monthly capacity, with overtime in hours and days
//! - **Navigation**: Step to the previous or next period without leaving the listing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use harvest_cli::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
