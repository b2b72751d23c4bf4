//! Translation API operations

use crate::error::Result;
use crate::tx::ids::{LocaleCode, ResourceSlug};
use crate::tx::TxClient;

impl TxClient {
    /// Translated content of a resource for one locale
    ///
    /// Query parameters (e.g. file mode options) are passed through
    /// unmodified.
    pub async fn translation(
        &self,
        resource: &ResourceSlug,
        locale: &LocaleCode,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value> {
        let url = self
            .endpoints()
            .translation(self.project(), resource, locale);
        self.get_json(&url, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_translation_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/webmaker/resource/ui-strings/translation/fr/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": "{\"greeting\": \"Bonjour\"}",
                "mimetype": "application/json"
            })))
            .mount(&mock_server)
            .await;

        let client = TxClient::test_client(&mock_server.uri());
        let translation = client
            .translation(&ResourceSlug::from("ui-strings"), &LocaleCode::from("fr"), &[])
            .await
            .unwrap();
        assert!(translation["content"].as_str().unwrap().contains("Bonjour"));
    }

    #[tokio::test]
    async fn test_translation_passes_mode_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/webmaker/resource/ui-strings/translation/fr/"))
            .and(query_param("mode", "reviewed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": ""
            })))
            .mount(&mock_server)
            .await;

        let client = TxClient::test_client(&mock_server.uri());
        let result = client
            .translation(
                &ResourceSlug::from("ui-strings"),
                &LocaleCode::from("fr"),
                &[("mode", "reviewed")],
            )
            .await;
        assert!(result.is_ok());
    }
}
