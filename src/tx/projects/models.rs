//! Project data models

use serde::{Deserialize, Serialize};

use crate::tx::ids::{LocaleCode, ProjectSlug, ResourceSlug};

/// Project details from `/project/<slug>/?details`
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ProjectDetails {
    pub slug: ProjectSlug,
    pub name: Option<String>,
    pub description: Option<String>,
    pub source_language_code: Option<LocaleCode>,
    /// Team locale codes; present only when details are requested
    #[serde(default)]
    pub teams: Vec<LocaleCode>,
    /// Resource references; present only when details are requested
    #[serde(default)]
    pub resources: Vec<ResourceRef>,
}

/// Resource reference embedded in the project details response
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ResourceRef {
    pub slug: ResourceSlug,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_project_details() {
        let json = r#"{
            "slug": "webmaker",
            "name": "Webmaker",
            "description": "Mozilla Webmaker",
            "source_language_code": "en",
            "teams": ["fr", "pt_BR"],
            "resources": [
                { "slug": "ui-strings", "name": "UI Strings" },
                { "slug": "emails", "name": "Emails" }
            ]
        }"#;

        let details: ProjectDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.slug.as_str(), "webmaker");
        assert_eq!(details.teams.len(), 2);
        assert_eq!(details.resources[1].slug.as_str(), "emails");
    }

    #[test]
    fn test_deserialize_without_details_fields() {
        // Without ?details the response has no teams or resources
        let json = r#"{ "slug": "webmaker", "name": "Webmaker" }"#;
        let details: ProjectDetails = serde_json::from_str(json).unwrap();
        assert!(details.teams.is_empty());
        assert!(details.resources.is_empty());
        assert!(details.source_language_code.is_none());
    }
}
