use crate::core::error::ChatError;
use std::fmt;

/// Notice shown when no key has been supplied yet.
pub const MISSING_KEY_NOTICE: &str = "Please add your Google AI API key to start chatting.";

/// Where to obtain a key.
pub const KEY_HELP_URL: &str = "https://aistudio.google.com/app/apikey";

/// The secret used to authorize completion calls.
///
/// Lives only in memory for the duration of one session. `Debug` is redacted
/// so the value never ends up in logs or error output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Accepts any non-empty key that can be placed in a request.
    ///
    /// An empty key is a missing credential; a key with whitespace or control
    /// characters is rejected as malformed. Both are configuration errors.
    pub fn parse(raw: &str) -> Result<Self, ChatError> {
        if raw.is_empty() {
            return Err(ChatError::Config(MISSING_KEY_NOTICE.to_string()));
        }

        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ChatError::Config(
                "Invalid API Key or configuration error: key contains whitespace or control characters"
                    .to_string(),
            ));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Holds at most one credential for a session.
#[derive(Debug, Default)]
pub struct CredentialHolder {
    credential: Option<Credential>,
}

impl CredentialHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the operator-supplied key, replacing any previous one on success.
    pub fn set(&mut self, raw: &str) -> Result<&Credential, ChatError> {
        let credential = Credential::parse(raw)?;
        Ok(self.credential.insert(credential))
    }

    pub fn get(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Returns the stored credential or the blocking configuration error.
    pub fn require(&self) -> Result<&Credential, ChatError> {
        self.credential
            .as_ref()
            .ok_or_else(|| ChatError::Config(MISSING_KEY_NOTICE.to_string()))
    }

    pub fn clear(&mut self) {
        self.credential = None;
    }
}
