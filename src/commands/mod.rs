pub mod dispatcher;
pub mod handler;
pub mod registry;

use crate::providers::LLMProvider;
use crate::session::Session;
pub use dispatcher::{CommandDispatcher, create_command_registry};

/// What slash commands operate on.
pub struct ChatState {
    pub session: Session,
    pub provider: Box<dyn LLMProvider>,
    pub should_continue: bool,
}

impl ChatState {
    pub fn new(session: Session, provider: Box<dyn LLMProvider>) -> Self {
        Self {
            session,
            provider,
            should_continue: true,
        }
    }
}
