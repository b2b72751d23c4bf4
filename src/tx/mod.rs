//! Transifex API client module
//!
//! This module provides functionality to interact with the Transifex API v2.

mod client;
mod credentials;
pub mod helpers;
pub mod ids;
pub mod languages;
pub mod projects;
pub mod resources;
pub mod stats;
pub mod translations;
pub mod urls;

pub use client::TxClient;
pub use credentials::CredentialResolver;
pub use ids::{LocaleCode, ProjectSlug, ResourceSlug};
pub use languages::{
    run_contributors_command, run_language_info_command, run_languages_command, AllLanguages,
    ContributorKind, ContributorTally, Language, LanguageInfo, ProjectLanguage,
};
pub use projects::{run_project_command, ProjectDetails, ProjectIndex, ResourceRef};
pub use resources::{run_resources_command, Resource};
pub use stats::{
    run_locale_command, run_stats_command, LocaleDetails, LocaleStats, ProjectStats, ResourceStats,
};
pub use translations::run_translation_command;
