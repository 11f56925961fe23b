use crate::core::credential::Credential;
use crate::core::error::ChatError;
use crate::providers::base_client::HttpClient;
use crate::providers::gemini::types::*;
use reqwest::StatusCode;
use std::collections::HashMap;

#[derive(Clone)]
pub struct GeminiClient {
    pub model: String,
    client: HttpClient,
}

impl GeminiClient {
    pub fn new(
        base_url: &str,
        credential: &Credential,
        model: String,
        extra_headers: Option<HashMap<String, String>>,
    ) -> Result<Self, ChatError> {
        let mut client = HttpClient::new(base_url, extra_headers)?;

        // Add API key to query params
        client.add_query_param("key", credential.expose().to_string());

        Ok(Self { client, model })
    }

    /// Sends `prompt` as the only user turn and returns the answer text.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, ChatError> {
        let payload = build_payload(prompt);
        let response = self
            .client
            .post(
                &format!("v1beta/models/{}:generateContent", self.model),
                &payload,
            )
            .await?;

        let status = response.status();
        let response_body: String = response.text().await?;

        if !status.is_success() {
            return Err(decode_error(status, &response_body));
        }

        let parsed: GeminiResponse = serde_json::from_str(&response_body).map_err(|e| {
            ChatError::Serialization(format!("Failed to parse Gemini response: {}", e))
        })?;

        extract_text(parsed)
    }
}

pub fn build_payload(prompt: &str) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContentPart {
            role: "user".to_string(),
            parts: vec![GeminiPart {
                text: Some(prompt.to_string()),
            }],
        }],
    }
}

/// Joins the text parts of the first candidate.
pub fn extract_text(response: GeminiResponse) -> Result<String, ChatError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(ChatError::Api(format!("Prompt was blocked: {}", reason)));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ChatError::Api("No valid response from Gemini".to_string()))?;

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if text.is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(ChatError::Api(format!(
            "Response contained no text (finish reason: {})",
            reason
        )));
    }

    Ok(text)
}

/// Prefers the provider's own message; falls back to the bare status.
pub fn decode_error(status: StatusCode, body: &str) -> ChatError {
    match serde_json::from_str::<GeminiErrorResponse>(body) {
        Ok(parsed) => {
            let code = parsed.error.code.unwrap_or(status.as_u16());
            match parsed.error.status {
                Some(kind) => ChatError::Api(format!(
                    "{} {}: {}",
                    code, kind, parsed.error.message
                )),
                None => ChatError::Api(format!("{}: {}", code, parsed.error.message)),
            }
        }
        Err(_) => ChatError::Api(format!("API returned error status: {}", status)),
    }
}
