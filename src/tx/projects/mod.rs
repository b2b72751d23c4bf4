//! Project API: details passthrough and index assembly

mod api;
mod commands;
mod index;
mod models;

pub use commands::run_project_command;
pub use index::ProjectIndex;
pub use models::{ProjectDetails, ResourceRef};
