use crate::core::error::ChatError;
use async_trait::async_trait;

pub mod base_client;
pub mod factory;
pub mod gemini;

pub use factory::create_provider;

/// A hosted text-generation model reachable with a single prompt.
///
/// Each call is stateless from the model's point of view: only the prompt is
/// sent, never the conversation so far.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// One blocking round trip. No retry, no streaming.
    async fn complete(&self, prompt: &str) -> Result<String, ChatError>;

    fn model(&self) -> &str;

    /// Rejects names that are not valid model identifiers; the current model
    /// is kept in that case.
    fn set_model(&mut self, model: &str) -> Result<(), ChatError>;
}

/// Model names end up inside the request path, so only `[A-Za-z0-9._-]` is allowed.
pub fn validate_model_name(model: &str) -> Result<(), String> {
    let valid = !model.is_empty()
        && model
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));

    if valid {
        Ok(())
    } else {
        Err(format!(
            "Invalid model name '{}': only letters, digits, '.', '_' and '-' are allowed",
            model
        ))
    }
}
