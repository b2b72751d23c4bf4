//! Project API operations

use crate::error::Result;
use crate::tx::TxClient;

use super::models::ProjectDetails;

impl TxClient {
    /// List all projects visible to the authenticated user
    ///
    /// Query parameters are passed through unmodified.
    pub async fn projects(&self, query: &[(&str, &str)]) -> Result<serde_json::Value> {
        self.get_json(&self.endpoints().projects(), query).await
    }

    /// Details for the configured project
    ///
    /// With `details` the response also carries the team codes and resource
    /// references the index build relies on.
    pub async fn project_details(&self, details: bool) -> Result<ProjectDetails> {
        let url = self.endpoints().project(self.project(), details);
        self.get_json(&url, &[]).await
    }

    /// Raw project details payload, with every field the API returns
    pub async fn project_raw(&self, details: bool) -> Result<serde_json::Value> {
        let url = self.endpoints().project(self.project(), details);
        self.get_json(&url, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_projects_passes_query_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/projects/"))
            .and(query_param("start", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "slug": "webmaker", "name": "Webmaker" }
            ])))
            .mount(&mock_server)
            .await;

        let client = TxClient::test_client(&mock_server.uri());
        let projects = client.projects(&[("start", "1")]).await.unwrap();
        assert_eq!(projects[0]["slug"], "webmaker");
    }

    #[tokio::test]
    async fn test_project_details() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/webmaker/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "slug": "webmaker",
                "name": "Webmaker",
                "teams": ["fr"],
                "resources": [{ "slug": "ui-strings" }]
            })))
            .mount(&mock_server)
            .await;

        let client = TxClient::test_client(&mock_server.uri());
        let details = client.project_details(true).await.unwrap();

        assert_eq!(details.slug.as_str(), "webmaker");
        assert_eq!(details.name.as_deref(), Some("Webmaker"));
        assert_eq!(details.teams.len(), 1);
        assert_eq!(details.resources[0].slug.as_str(), "ui-strings");
    }

    #[tokio::test]
    async fn test_project_details_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/webmaker/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = TxClient::test_client(&mock_server.uri());
        let err = client.project_details(false).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }
}
