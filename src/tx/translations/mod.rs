//! Translation API: translated content fetch

mod api;
mod commands;

pub use commands::run_translation_command;
