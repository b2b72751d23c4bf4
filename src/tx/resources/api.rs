//! Resource API operations

use crate::error::Result;
use crate::tx::ids::ResourceSlug;
use crate::tx::TxClient;

use super::models::Resource;

impl TxClient {
    /// All resources in the project
    pub async fn resources(&self) -> Result<Vec<Resource>> {
        let url = self.endpoints().resources(self.project());
        self.get_json(&url, &[]).await
    }

    /// A single resource, optionally with details
    pub async fn resource(&self, slug: &ResourceSlug, details: bool) -> Result<serde_json::Value> {
        let url = self.endpoints().resource(self.project(), slug, details);
        self.get_json(&url, &[]).await
    }

    /// Source-language content of a resource
    pub async fn resource_content(&self, slug: &ResourceSlug) -> Result<serde_json::Value> {
        let url = self.endpoints().resource_content(self.project(), slug);
        self.get_json(&url, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_resources_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/webmaker/resources/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                { "slug": "ui-strings", "name": "UI Strings", "i18n_type": "PO" },
                { "slug": "emails", "name": "Emails" }
            ])))
            .mount(&mock_server)
            .await;

        let client = TxClient::test_client(&mock_server.uri());
        let resources = client.resources().await.unwrap();

        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].slug.as_str(), "ui-strings");
        assert_eq!(resources[1].name.as_deref(), Some("Emails"));
    }

    #[tokio::test]
    async fn test_resource_detail() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/webmaker/resource/ui-strings/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "slug": "ui-strings",
                "last_update": "2014-06-03 12:00:00"
            })))
            .mount(&mock_server)
            .await;

        let client = TxClient::test_client(&mock_server.uri());
        let resource = client
            .resource(&ResourceSlug::from("ui-strings"), false)
            .await
            .unwrap();
        assert_eq!(resource["slug"], "ui-strings");
    }

    #[tokio::test]
    async fn test_resource_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/webmaker/resource/ui-strings/content/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": "{\"greeting\": \"Hello\"}",
                "mimetype": "application/json"
            })))
            .mount(&mock_server)
            .await;

        let client = TxClient::test_client(&mock_server.uri());
        let content = client
            .resource_content(&ResourceSlug::from("ui-strings"))
            .await
            .unwrap();
        assert_eq!(content["mimetype"], "application/json");
    }
}
