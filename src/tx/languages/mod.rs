//! Language API: project rosters, the global catalogue and contributor
//! aggregation

mod api;
mod commands;
mod models;

pub use commands::{run_contributors_command, run_language_info_command, run_languages_command};
pub use models::{
    AllLanguages, ContributorKind, ContributorTally, Language, LanguageInfo, ProjectLanguage,
};
