//! txctl - Explore Transifex projects and translation statistics
//!
//! A CLI and client library for the Transifex translation API v2.
//!
//! # Features
//!
//! - List a project's languages, resolved one team at a time
//! - Per-resource translation statistics, collected concurrently
//! - Locale-scoped statistics and completion percentages
//! - Contributor counts per role across the whole project
//! - Passthrough reads for projects, resources, languages and translations
//!
//! # Example
//!
//! ```bash
//! # List the project's languages
//! txctl languages -p webmaker
//!
//! # Per-resource statistics for one locale
//! txctl stats -l fr
//!
//! # Statistics for one resource scoped to one locale
//! txctl stats -r ui-strings -l fr
//!
//! # Contributor counts
//! txctl contributors
//!
//! # Completion percentage for one locale
//! txctl locale pt_BR -o json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod tx;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{Result, TxError};
pub use tx::{
    AllLanguages, ContributorKind, ContributorTally, CredentialResolver, Language, LanguageInfo,
    LocaleCode, LocaleDetails, LocaleStats, ProjectDetails, ProjectIndex, ProjectLanguage,
    ProjectSlug, ProjectStats, Resource, ResourceSlug, ResourceStats, TxClient,
};
