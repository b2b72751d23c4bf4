//! Language data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TxError;
use crate::tx::ids::LocaleCode;

/// Language entry resolved for a project: locale code plus display name
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub locale: LocaleCode,
    pub name: String,
}

/// Language info from the global catalogue (`/language/<code>/`)
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LanguageInfo {
    pub code: LocaleCode,
    pub name: String,
    pub nplurals: Option<u32>,
    pub pluralequation: Option<String>,
}

/// Per-language team roster from `/project/<slug>/languages/`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ProjectLanguage {
    pub language_code: LocaleCode,
    #[serde(default)]
    pub coordinators: Vec<String>,
    #[serde(default)]
    pub translators: Vec<String>,
    #[serde(default)]
    pub reviewers: Vec<String>,
}

/// A project's language roster annotated with its size
#[derive(Serialize, Debug, Clone)]
pub struct AllLanguages {
    pub count: usize,
    pub languages: Vec<Language>,
}

/// Contributor counts per role across a project's language teams
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ContributorTally {
    pub contributors: usize,
    pub translators: usize,
    pub reviewers: usize,
    pub coordinators: usize,
}

impl ContributorTally {
    /// Reduce a language-team list by summing role list lengths
    ///
    /// Always produces a result; an empty list yields all-zero counts.
    pub fn from_languages(languages: &[ProjectLanguage]) -> Self {
        let translators = languages.iter().map(|l| l.translators.len()).sum::<usize>();
        let reviewers = languages.iter().map(|l| l.reviewers.len()).sum::<usize>();
        let coordinators = languages.iter().map(|l| l.coordinators.len()).sum::<usize>();

        Self {
            contributors: translators + reviewers + coordinators,
            translators,
            reviewers,
            coordinators,
        }
    }
}

/// Contributor role kinds accepted by the contributor-list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributorKind {
    Coordinators,
    Reviewers,
    Translators,
}

impl ContributorKind {
    /// The role's path segment in the API URL
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributorKind::Coordinators => "coordinators",
            ContributorKind::Reviewers => "reviewers",
            ContributorKind::Translators => "translators",
        }
    }
}

impl fmt::Display for ContributorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContributorKind {
    type Err = TxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coordinators" => Ok(ContributorKind::Coordinators),
            "reviewers" => Ok(ContributorKind::Reviewers),
            "translators" => Ok(ContributorKind::Translators),
            _ => Err(TxError::Validation(
                "Please specify the type of the contributor : \"coordinators\", \"reviewers\" or \"translators\""
                    .to_string(),
            )),
        }
    }
}
