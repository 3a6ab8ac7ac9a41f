use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use crate::error::LLMError;
use crate::error_handling::{format_network_error, format_parse_error, parse_api_error};
use crate::provider::LLMProvider;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const PROVIDER_NAME: &str = "Gemini";

/// Client for Gemini's `models/{model}:generateContent` endpoint.
///
/// A missing API key does not prevent construction; the first request fails
/// with [`LLMError::Authentication`] instead.
pub struct GeminiProvider {
    api_key: Option<Arc<str>>,
    http_client: HttpClient,
    base_url: Arc<str>,
    model: Arc<str>,
}

impl GeminiProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self::from_config(api_key, None, None)
    }

    pub fn from_config(
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Self {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| GEMINI_API_BASE.to_owned());
        let model = model
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_owned());

        Self {
            api_key: api_key
                .filter(|key| !key.trim().is_empty())
                .map(|key| Arc::from(key.as_str())),
            http_client: HttpClient::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
            model: Arc::from(model.as_str()),
        }
    }

    pub fn with_http_client(mut self, http_client: HttpClient) -> Self {
        self.http_client = http_client;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LLMError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(LLMError::Authentication {
                message: "GEMINI_API_KEY is not set".to_owned(),
            });
        };

        let url = self.endpoint();
        debug!(model = %self.model, turns = request.contents.len(), "sending generateContent request");

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| format_network_error(PROVIDER_NAME, &err))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini request failed");
            return Err(parse_api_error(PROVIDER_NAME, status.as_u16(), &error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|err| format_network_error(PROVIDER_NAME, &err))?;
        serde_json::from_str(&body).map_err(|err| format_parse_error(PROVIDER_NAME, &err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Content;

    #[test]
    fn endpoint_uses_model_and_trims_base_url() {
        let provider = GeminiProvider::from_config(
            Some("key".to_string()),
            Some("gemini-test".to_string()),
            Some("http://localhost:9000/v1beta/".to_string()),
        );
        assert_eq!(
            provider.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let provider =
            GeminiProvider::from_config(Some("  ".to_string()), Some(String::new()), None);
        assert!(!provider.has_api_key());
        assert_eq!(provider.model(), DEFAULT_MODEL);
        assert!(provider.endpoint().starts_with(GEMINI_API_BASE));
    }

    #[tokio::test]
    async fn missing_key_fails_at_first_use() {
        let provider = GeminiProvider::new(None);
        let request = GenerateContentRequest {
            contents: vec![Content::user_text("hello")],
            tools: None,
            system_instruction: None,
        };
        let error = provider.generate(request).await.unwrap_err();
        assert!(matches!(error, LLMError::Authentication { .. }));
    }
}
