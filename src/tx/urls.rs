//! Typed URL builders for Transifex API endpoints
//!
//! One method per endpoint, composed from the typed identifiers in
//! [`crate::tx::ids`]. Path segments are percent-encoded.

use urlencoding::encode;

use crate::config::api;
use crate::tx::ids::{LocaleCode, ProjectSlug, ResourceSlug};
use crate::tx::languages::ContributorKind;

/// URL builder rooted at an API base (`https://<host>/api/2`, or a mock
/// server URL in tests)
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Create endpoints for the given API host
    pub fn new(host: &str) -> Self {
        Self {
            base: format!("https://{}{}", host, api::BASE_PATH),
        }
    }

    /// Create endpoints rooted at a custom base URL (for testing with mock
    /// servers)
    pub fn with_base(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// All projects visible to the authenticated user
    pub fn projects(&self) -> String {
        format!("{}/projects/", self.base)
    }

    /// A single project, optionally with team and resource details
    pub fn project(&self, project: &ProjectSlug, details: bool) -> String {
        let url = format!("{}/project/{}/", self.base, encode(project.as_str()));
        if details {
            format!("{}?details", url)
        } else {
            url
        }
    }

    /// All resources in a project
    pub fn resources(&self, project: &ProjectSlug) -> String {
        format!("{}/project/{}/resources/", self.base, encode(project.as_str()))
    }

    /// A single resource, optionally with details
    pub fn resource(&self, project: &ProjectSlug, resource: &ResourceSlug, details: bool) -> String {
        let url = format!(
            "{}/project/{}/resource/{}/",
            self.base,
            encode(project.as_str()),
            encode(resource.as_str())
        );
        if details {
            format!("{}?details", url)
        } else {
            url
        }
    }

    /// Source-language content of a resource
    pub fn resource_content(&self, project: &ProjectSlug, resource: &ResourceSlug) -> String {
        format!(
            "{}/project/{}/resource/{}/content/",
            self.base,
            encode(project.as_str()),
            encode(resource.as_str())
        )
    }

    /// Translated content of a resource for one locale
    pub fn translation(
        &self,
        project: &ProjectSlug,
        resource: &ResourceSlug,
        locale: &LocaleCode,
    ) -> String {
        format!(
            "{}/project/{}/resource/{}/translation/{}/",
            self.base,
            encode(project.as_str()),
            encode(resource.as_str()),
            encode(locale.as_str())
        )
    }

    /// Per-locale statistics for a resource
    pub fn resource_stats(&self, project: &ProjectSlug, resource: &ResourceSlug) -> String {
        format!(
            "{}/project/{}/resource/{}/stats/",
            self.base,
            encode(project.as_str()),
            encode(resource.as_str())
        )
    }

    /// Statistics for a resource scoped to one locale
    pub fn resource_locale_stats(
        &self,
        project: &ProjectSlug,
        resource: &ResourceSlug,
        locale: &LocaleCode,
    ) -> String {
        format!(
            "{}/project/{}/resource/{}/stats/{}/",
            self.base,
            encode(project.as_str()),
            encode(resource.as_str()),
            encode(locale.as_str())
        )
    }

    /// Language teams configured for a project
    pub fn project_languages(&self, project: &ProjectSlug) -> String {
        format!("{}/project/{}/languages/", self.base, encode(project.as_str()))
    }

    /// A single project language, optionally with translation detail fields
    pub fn project_language(
        &self,
        project: &ProjectSlug,
        locale: &LocaleCode,
        details: bool,
    ) -> String {
        let url = format!(
            "{}/project/{}/language/{}/",
            self.base,
            encode(project.as_str()),
            encode(locale.as_str())
        );
        if details {
            format!("{}?details", url)
        } else {
            url
        }
    }

    /// Contributor list for one project language and role
    pub fn contributors(
        &self,
        project: &ProjectSlug,
        locale: &LocaleCode,
        kind: ContributorKind,
    ) -> String {
        format!(
            "{}/project/{}/language/{}/{}/",
            self.base,
            encode(project.as_str()),
            encode(locale.as_str()),
            kind.as_str()
        )
    }

    /// The global Transifex language catalogue
    pub fn languages(&self) -> String {
        format!("{}/languages/", self.base)
    }

    /// Info for one language code from the global catalogue
    pub fn language(&self, locale: &LocaleCode) -> String {
        format!("{}/language/{}/", self.base, encode(locale.as_str()))
    }
}
