//! Statistics API: passthroughs, the per-resource fan-out and the
//! locale-scoped composite views

mod api;
mod commands;
mod models;

pub use commands::{run_locale_command, run_stats_command};
pub use models::{LocaleDetails, LocaleStats, ProjectStats, ResourceStats};
