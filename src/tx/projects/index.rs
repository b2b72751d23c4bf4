//! Project index assembly
//!
//! The index is the membership source for every guarded composite view: the
//! language roster (resolved one team at a time) and the resource slugs
//! (lifted straight from the project details response). It is rebuilt from
//! the API on every aggregate call and never cached or appended to.

use log::debug;

use crate::error::Result;
use crate::tx::helpers::fan_out;
use crate::tx::ids::{LocaleCode, ResourceSlug};
use crate::tx::languages::{Language, LanguageInfo};
use crate::tx::TxClient;

/// Snapshot of a project's language roster and resource slugs
#[derive(Debug, Clone, Default)]
pub struct ProjectIndex {
    pub languages: Vec<Language>,
    pub resource_slugs: Vec<ResourceSlug>,
}

impl ProjectIndex {
    /// Check locale membership in the language roster
    pub fn has_locale(&self, locale: &LocaleCode) -> bool {
        self.languages.iter().any(|l| &l.locale == locale)
    }

    /// Check resource membership by slug
    pub fn has_resource(&self, slug: &ResourceSlug) -> bool {
        self.resource_slugs.iter().any(|s| s == slug)
    }
}

impl TxClient {
    /// Build a fresh project index
    ///
    /// One project-details call yields the team codes and resource slugs;
    /// each team is then resolved to a `{locale, name}` entry with one
    /// language-info call, all M issued concurrently. The index is delivered
    /// only once every team has reported; the first failure short-circuits
    /// the join.
    pub async fn project_index(&self) -> Result<ProjectIndex> {
        let endpoints = self.endpoints();
        let details = self.project_details(true).await?;

        debug!(
            "Resolving {} language teams and {} resources for project '{}'",
            details.teams.len(),
            details.resources.len(),
            self.project()
        );

        let resource_slugs: Vec<ResourceSlug> =
            details.resources.into_iter().map(|r| r.slug).collect();

        let languages = fan_out(details.teams, |team| {
            let url = endpoints.language(&team);
            async move {
                let info: LanguageInfo = self.get_json(&url, &[]).await?;
                Ok(Language {
                    locale: info.code,
                    name: info.name,
                })
            }
        })
        .await?;

        Ok(ProjectIndex {
            languages,
            resource_slugs,
        })
    }
}
