pub mod transcript;

use crate::core::credential::{Credential, CredentialHolder};
use crate::core::error::ChatError;
use crate::formatter::{apology, build_prompt, friendly_wrap};
use crate::providers::LLMProvider;
use crate::render::{self, DisplayTurn};
use tracing::{debug, info};

pub use transcript::{GREETING, Role, Transcript, Turn};

/// Where the presentation loop currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// A completion call is in flight; the last turn is the pending question.
    AwaitingCompletion,
}

/// Everything one operator session owns: its credential, its transcript and
/// the loop state. Handlers receive it explicitly; nothing is global.
#[derive(Debug)]
pub struct Session {
    credentials: CredentialHolder,
    transcript: Transcript,
    state: SessionState,
}

impl Session {
    /// Creates a session whose transcript already holds the greeting.
    pub fn new() -> Self {
        Self {
            credentials: CredentialHolder::new(),
            transcript: Transcript::new(),
            state: SessionState::Idle,
        }
    }

    pub fn set_credential(&mut self, raw: &str) -> Result<&Credential, ChatError> {
        self.credentials.set(raw)
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credentials.get()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Discards the whole history at once and restores the greeting.
    pub fn reset(&mut self) {
        info!(dropped = self.transcript.len(), "transcript reset");
        self.transcript.reset();
        self.state = SessionState::Idle;
    }

    /// Ends the session, forgetting the credential and every turn.
    pub fn destroy(mut self) {
        self.credentials.clear();
        debug!(turns = self.transcript.len(), "session destroyed");
    }

    /// Records the question and moves to `AwaitingCompletion`.
    ///
    /// Returns the prompt to send. Nothing is appended when the credential is
    /// missing or another question is still pending.
    pub fn begin(&mut self, question: &str) -> Result<String, ChatError> {
        self.credentials.require()?;

        if self.state == SessionState::AwaitingCompletion {
            return Err(ChatError::Input(
                "Please wait for the current answer before asking again".to_string(),
            ));
        }

        if question.trim().is_empty() {
            return Err(ChatError::Input("Question is empty".to_string()));
        }

        self.transcript.append(Turn::user(question));
        self.state = SessionState::AwaitingCompletion;
        debug!(turns = self.transcript.len(), "question appended");

        Ok(build_prompt(question))
    }

    /// Folds the outcome of the completion call into the transcript and
    /// returns to `Idle`. Failures become the apology turn.
    pub fn resolve(&mut self, outcome: Result<String, ChatError>) -> Result<&Turn, ChatError> {
        if self.state != SessionState::AwaitingCompletion {
            return Err(ChatError::Input("No question is awaiting an answer".to_string()));
        }

        let content = match outcome {
            Ok(text) => friendly_wrap(&text),
            Err(e) => {
                debug!(error = %e, "completion failed, substituting apology");
                apology(&e.to_string())
            }
        };

        self.transcript.append(Turn::assistant(content));
        self.state = SessionState::Idle;

        self.transcript
            .last()
            .ok_or_else(|| ChatError::Unknown("Transcript is empty after append".to_string()))
    }

    /// Runs one full question/answer cycle against `provider`.
    ///
    /// Only configuration and input errors are returned; completion failures
    /// end up in the transcript.
    pub async fn ask(
        &mut self,
        provider: &dyn LLMProvider,
        question: &str,
    ) -> Result<&Turn, ChatError> {
        let prompt = self.begin(question)?;
        let outcome = provider.complete(&prompt).await;
        self.resolve(outcome)
    }

    pub fn render(&self) -> Vec<DisplayTurn> {
        render::render(&self.transcript, self.state)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
