use crate::config::Config;
use crate::core::credential::Credential;
use crate::core::error::ChatError;
use crate::providers::{LLMProvider, gemini::GeminiProvider};
use tracing::info;

/// Initializes the completion client from the configuration and the
/// session's credential. Any failure here is a blocking configuration error.
pub fn create_provider(
    config: &Config,
    credential: &Credential,
) -> Result<Box<dyn LLMProvider>, ChatError> {
    let extra_headers = if config.extra_headers.is_empty() {
        None
    } else {
        Some(config.extra_headers.clone())
    };

    let provider = GeminiProvider::with_endpoint(
        &config.base_url,
        credential,
        config.model.clone(),
        extra_headers,
    )
    .map_err(|e| match e {
        ChatError::Config(reason) => {
            ChatError::Config(format!("Invalid API Key or configuration error: {}", reason))
        }
        other => other,
    })?;

    info!(model = %config.model, "completion client ready");
    Ok(Box::new(provider))
}
