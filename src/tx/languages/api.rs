//! Language API operations

use crate::error::Result;
use crate::tx::ids::LocaleCode;
use crate::tx::TxClient;

use super::models::{
    AllLanguages, ContributorKind, ContributorTally, LanguageInfo, ProjectLanguage,
};

impl TxClient {
    /// Language teams configured for the project, with their rosters
    pub async fn project_languages(&self) -> Result<Vec<ProjectLanguage>> {
        let url = self.endpoints().project_languages(self.project());
        self.get_json(&url, &[]).await
    }

    /// A single project language, optionally with translation detail fields
    pub async fn project_language(
        &self,
        locale: &LocaleCode,
        details: bool,
    ) -> Result<serde_json::Value> {
        let url = self
            .endpoints()
            .project_language(self.project(), locale, details);
        self.get_json(&url, &[]).await
    }

    /// Info for one language code from the global catalogue
    pub async fn language_info(&self, locale: &LocaleCode) -> Result<LanguageInfo> {
        self.get_json(&self.endpoints().language(locale), &[]).await
    }

    /// The full Transifex language catalogue
    pub async fn all_tx_languages(&self) -> Result<Vec<LanguageInfo>> {
        self.get_json(&self.endpoints().languages(), &[]).await
    }

    /// Contributor list for one project language and role
    pub async fn contributors(
        &self,
        locale: &LocaleCode,
        kind: ContributorKind,
    ) -> Result<serde_json::Value> {
        let url = self.endpoints().contributors(self.project(), locale, kind);
        self.get_json(&url, &[]).await
    }

    /// The project's language roster, annotated with a count
    ///
    /// Builds a fresh project index on every call.
    pub async fn all_languages(&self) -> Result<AllLanguages> {
        let index = self.project_index().await?;
        Ok(AllLanguages {
            count: index.languages.len(),
            languages: index.languages,
        })
    }

    /// Contributor counts per role across the whole project
    pub async fn contributor_counts(&self) -> Result<ContributorTally> {
        let languages = self.project_languages().await?;
        Ok(ContributorTally::from_languages(&languages))
    }
}
