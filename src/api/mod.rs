//! API client modules for external service integrations.
//!
//! harvest-cli talks to a single service, the Harvest time tracking API.

pub mod harvest;

pub use harvest::{Harvest, HarvestError};
