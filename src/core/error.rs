use std::io;
use thiserror::Error;

/// Unified error type for the climate chat client
#[derive(Error, Debug)]
pub enum ChatError {
    /// Missing or rejected credential, unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The provider answered, but with an error or without usable text
    #[error("API error: {0}")]
    Api(String),

    /// Transport-level failures
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// User input errors
    #[error("Input error: {0}")]
    Input(String),

    /// IO-related errors
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Unknown or unexpected errors
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ChatError {
    /// Configuration errors block the session; everything else raised by a
    /// completion call is folded into the transcript as an apology.
    pub fn is_configuration(&self) -> bool {
        matches!(self, ChatError::Config(_))
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        // Strip the URL: it carries the API key as a query parameter.
        let err = err.without_url();
        if err.is_timeout() {
            ChatError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            ChatError::Network(format!("Connection failed: {}", err))
        } else if err.is_status() {
            ChatError::Api(format!("API returned error status: {}", err))
        } else if err.is_decode() {
            ChatError::Serialization(format!("Failed to decode response: {}", err))
        } else {
            ChatError::Network(format!("Request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for ChatError {
    fn from(err: serde_json::Error) -> Self {
        ChatError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<serde_yml::Error> for ChatError {
    fn from(err: serde_yml::Error) -> Self {
        ChatError::Serialization(format!("YAML error: {}", err))
    }
}

impl From<dialoguer::Error> for ChatError {
    fn from(err: dialoguer::Error) -> Self {
        ChatError::Input(format!("Prompt failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_config_errors_are_configuration() {
        assert!(ChatError::Config("no key".into()).is_configuration());
        assert!(!ChatError::Api("denied".into()).is_configuration());
        assert!(!ChatError::Network("down".into()).is_configuration());
    }

    #[test]
    fn messages_carry_the_description() {
        let err = ChatError::Api("API key not valid. Please pass a valid API key.".into());
        assert_eq!(
            err.to_string(),
            "API error: API key not valid. Please pass a valid API key."
        );
    }
}
