//! Resource API: listing, details and source content

mod api;
mod commands;
mod models;

pub use commands::run_resources_command;
pub use models::Resource;
