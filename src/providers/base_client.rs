use crate::core::error::ChatError;
use reqwest::{Client, Response, Url};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Thin JSON-over-HTTP client shared by providers.
#[derive(Clone)]
pub struct HttpClient {
    base_url: Url,
    client: Client,
    extra_headers: HashMap<String, String>,
    query_params: Vec<(String, String)>,
}

impl HttpClient {
    /// Fails with a configuration error when `base_url` is not a valid URL or
    /// the underlying client cannot be built.
    pub fn new(
        base_url: &str,
        extra_headers: Option<HashMap<String, String>>,
    ) -> Result<Self, ChatError> {
        // A trailing slash makes `join` append instead of replacing the last segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| ChatError::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

        let client = Client::builder()
            .build()
            .map_err(|e| ChatError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            client,
            extra_headers: extra_headers.unwrap_or_default(),
            query_params: Vec::new(),
        })
    }

    pub fn add_query_param(&mut self, key: &str, value: String) {
        self.query_params.push((key.to_string(), value));
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// POSTs `payload` as JSON to `path` (relative to the base URL).
    ///
    /// Non-2xx responses are returned as-is so the provider can decode its own
    /// error body.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, ChatError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ChatError::Config(format!("Invalid request path '{}': {}", path, e)))?;

        debug!(path, "sending request");

        let mut request = self
            .client
            .post(url)
            .query(&self.query_params)
            .header("Content-Type", "application/json");

        for (key, value) in &self.extra_headers {
            request = request.header(key, value);
        }

        let response = request.json(payload).send().await?;
        debug!(status = %response.status(), "response received");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_base_url() {
        let err = HttpClient::new("not a url", None).err().unwrap();
        assert!(err.is_configuration());
    }

    #[test]
    fn normalizes_trailing_slash() {
        let client = HttpClient::new("https://example.com/api///", None).unwrap();
        assert_eq!(client.base_url().as_str(), "https://example.com/api/");

        let joined = client.base_url().join("v1beta/models/m:generateContent").unwrap();
        assert_eq!(
            joined.as_str(),
            "https://example.com/api/v1beta/models/m:generateContent"
        );
    }
}
