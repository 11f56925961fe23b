use crate::core::credential::Credential;
use crate::core::error::ChatError;
use crate::providers::{LLMProvider, validate_model_name};
use async_trait::async_trait;
use std::collections::HashMap;

mod client;
mod types;

pub use client::GeminiClient;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone)]
pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    /// A bad model name here is a configuration problem, not operator input.
    pub fn with_endpoint(
        endpoint: &str,
        credential: &Credential,
        model: String,
        extra_headers: Option<HashMap<String, String>>,
    ) -> Result<Self, ChatError> {
        validate_model_name(&model).map_err(ChatError::Config)?;
        Ok(Self {
            client: GeminiClient::new(endpoint, credential, model, extra_headers)?,
        })
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
        self.client.generate_content(prompt).await
    }

    fn model(&self) -> &str {
        &self.client.model
    }

    fn set_model(&mut self, model: &str) -> Result<(), ChatError> {
        validate_model_name(model).map_err(ChatError::Input)?;
        self.client.model = model.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GeminiProvider {
        let credential = Credential::parse("AIzaKey").unwrap();
        GeminiProvider::with_endpoint(DEFAULT_BASE_URL, &credential, DEFAULT_MODEL.to_string(), None)
            .unwrap()
    }

    #[test]
    fn set_model_rejects_path_characters() {
        let mut provider = provider();

        let err = provider.set_model("gemini?alt=sse").unwrap_err();

        assert!(matches!(err, ChatError::Input(_)));
        assert_eq!(provider.model(), DEFAULT_MODEL);
    }

    #[test]
    fn set_model_switches_valid_names() {
        let mut provider = provider();
        provider.set_model("gemini-2.0-flash").unwrap();
        assert_eq!(provider.model(), "gemini-2.0-flash");
    }

    #[test]
    fn configured_model_is_validated() {
        let credential = Credential::parse("AIzaKey").unwrap();
        let err = GeminiProvider::with_endpoint(
            DEFAULT_BASE_URL,
            &credential,
            "models/../x".to_string(),
            None,
        )
        .err()
        .unwrap();
        assert!(err.is_configuration());
    }
}
