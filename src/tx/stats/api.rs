//! Statistics API operations
//!
//! The guarded operations validate locale and resource membership against a
//! fresh project index before any statistics call goes out; an unknown
//! identifier never reaches the API.

use log::debug;

use crate::error::{Result, TxError};
use crate::tx::helpers::fan_out;
use crate::tx::ids::{LocaleCode, ResourceSlug};
use crate::tx::projects::ProjectIndex;
use crate::tx::TxClient;

use super::models::{LocaleDetails, LocaleStats, ProjectStats, ResourceStats};

impl TxClient {
    /// Statistics for a single resource across all its locales
    pub async fn resource_stats(&self, resource: &ResourceSlug) -> Result<ResourceStats> {
        let url = self.endpoints().resource_stats(self.project(), resource);
        self.get_json(&url, &[]).await
    }

    /// Statistics for one resource scoped to one locale
    ///
    /// The resource slug is validated first, then the locale; the checks run
    /// before the statistics request is issued.
    pub async fn resource_locale_stats(
        &self,
        resource: &ResourceSlug,
        locale: &LocaleCode,
    ) -> Result<serde_json::Value> {
        let index = self.project_index().await?;
        if !index.has_resource(resource) {
            return Err(TxError::Validation(format!(
                "Unknown component's name '{}'",
                resource
            )));
        }
        if !index.has_locale(locale) {
            return Err(TxError::Validation(format!(
                "Unknown locale's name '{}'",
                locale
            )));
        }

        let url = self
            .endpoints()
            .resource_locale_stats(self.project(), resource, locale);
        self.get_json(&url, &[]).await
    }

    /// Statistics for every resource in the project, keyed by resource slug
    pub async fn project_stats(&self) -> Result<ProjectStats> {
        let index = self.project_index().await?;
        self.project_stats_for(&index).await
    }

    /// Fan out one statistics call per resource slug in the given index
    ///
    /// The composite map is delivered only once all K sub-requests have
    /// succeeded; the first failure short-circuits the join.
    pub(crate) async fn project_stats_for(&self, index: &ProjectIndex) -> Result<ProjectStats> {
        debug!(
            "Collecting statistics for {} resources",
            index.resource_slugs.len()
        );

        let endpoints = self.endpoints();
        let entries = fan_out(&index.resource_slugs, |slug| {
            let url = endpoints.resource_stats(self.project(), slug);
            async move {
                let stats: ResourceStats = self.get_json(&url, &[]).await?;
                Ok((slug.as_str().to_string(), stats))
            }
        })
        .await?;

        Ok(entries.into_iter().collect())
    }

    /// Statistics for one locale across every resource in the project
    ///
    /// Builds the full per-resource map, then keeps only the given locale's
    /// entry per resource. A resource with no data for the locale maps to
    /// JSON null.
    pub async fn locale_stats(&self, locale: &LocaleCode) -> Result<LocaleStats> {
        let index = self.project_index().await?;
        if !index.has_locale(locale) {
            return Err(TxError::Validation(format!(
                "Unknown locale's name '{}'",
                locale
            )));
        }

        let stats = self.project_stats_for(&index).await?;
        Ok(stats
            .into_iter()
            .map(|(slug, mut per_locale)| {
                let entry = per_locale
                    .remove(locale.as_str())
                    .unwrap_or(serde_json::Value::Null);
                (slug, entry)
            })
            .collect())
    }

    /// Translation detail for one locale, with a derived completion
    /// percentage
    pub async fn locale_details(&self, locale: &LocaleCode) -> Result<LocaleDetails> {
        let index = self.project_index().await?;
        if !index.has_locale(locale) {
            return Err(TxError::Validation(format!(
                "Unknown locale's name '{}'",
                locale
            )));
        }

        let url = self
            .endpoints()
            .project_language(self.project(), locale, true);
        let details: LocaleDetails = self.get_json(&url, &[]).await?;
        Ok(details.with_completed_percentage())
    }
}
