use super::ChatState;
use crate::core::error::ChatError;

use console::style;

pub trait CommandHandler {
    fn execute(&self, state: &mut ChatState, args: &[&str]) -> Result<Option<String>, ChatError>;
    fn help(&self) -> &'static str;
}

pub struct QuitCommand;
pub struct HelpCommand;
pub struct ResetCommand;
pub struct ModelCommand;

impl CommandHandler for QuitCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        state.should_continue = false;
        Ok(None)
    }

    fn help(&self) -> &'static str {
        "/quit - Exit the chat session"
    }
}

impl CommandHandler for HelpCommand {
    fn execute(
        &self,
        _state: &mut ChatState,
        _args: &[&str],
    ) -> Result<Option<String>, ChatError> {
        let title = style("Available Commands").bold().underlined();
        let help_text = [
            title.to_string(),
            ResetCommand.help().to_string(),
            ModelCommand.help().to_string(),
            HelpCommand.help().to_string(),
            QuitCommand.help().to_string(),
        ]
        .join("\n");

        Ok(Some(help_text))
    }

    fn help(&self) -> &'static str {
        "/help - Show available commands"
    }
}

impl CommandHandler for ResetCommand {
    fn execute(&self, state: &mut ChatState, _args: &[&str]) -> Result<Option<String>, ChatError> {
        state.session.reset();
        Ok(None)
    }

    fn help(&self) -> &'static str {
        "/reset - Clear the conversation and start over"
    }
}

impl CommandHandler for ModelCommand {
    fn execute(&self, state: &mut ChatState, args: &[&str]) -> Result<Option<String>, ChatError> {
        match args.first() {
            None => Ok(Some(format!("Current model: {}", state.provider.model()))),
            Some(new_model) => {
                state.provider.set_model(new_model)?;
                Ok(Some(format!("Model changed to: {}", state.provider.model())))
            }
        }
    }

    fn help(&self) -> &'static str {
        "/model <name> - Show or change the model used for the next questions"
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::{ChatState, create_command_registry};
    use crate::core::error::ChatError;
    use crate::providers::LLMProvider;
    use crate::session::{GREETING, Session, Turn};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    struct EchoProvider {
        model: String,
    }

    #[async_trait]
    impl LLMProvider for EchoProvider {
        async fn complete(&self, prompt: &str) -> Result<String, ChatError> {
            Ok(prompt.to_string())
        }

        fn model(&self) -> &str {
            &self.model
        }

        fn set_model(&mut self, model: &str) -> Result<(), ChatError> {
            crate::providers::validate_model_name(model).map_err(ChatError::Input)?;
            self.model = model.to_string();
            Ok(())
        }
    }

    fn state() -> ChatState {
        let mut session = Session::new();
        session.set_credential("AIzaKey").unwrap();
        ChatState::new(
            session,
            Box::new(EchoProvider {
                model: "gemini-2.5-flash".to_string(),
            }),
        )
    }

    #[tokio::test]
    async fn reset_discards_history() {
        let dispatcher = create_command_registry();
        let mut state = state();
        state
            .session
            .ask(state.provider.as_ref(), "Is coal renewable?")
            .await
            .unwrap();
        assert_eq!(state.session.transcript().len(), 3);

        let output = dispatcher.dispatch_line("/reset", &mut state).unwrap().unwrap();

        assert_eq!(output, None);
        assert_eq!(state.session.transcript().turns(), &[Turn::assistant(GREETING)]);
        assert!(state.should_continue);
    }

    #[test]
    fn quit_stops_the_loop() {
        let dispatcher = create_command_registry();
        let mut state = state();
        dispatcher.dispatch_line("/quit", &mut state).unwrap().unwrap();
        assert!(!state.should_continue);
    }

    #[test]
    fn model_shows_and_switches() {
        let dispatcher = create_command_registry();
        let mut state = state();

        let shown = dispatcher.dispatch_line("/model", &mut state).unwrap().unwrap();
        assert_eq!(shown.as_deref(), Some("Current model: gemini-2.5-flash"));

        let changed = dispatcher
            .dispatch_line("/model gemini-2.0-flash", &mut state)
            .unwrap()
            .unwrap();
        assert_eq!(changed.as_deref(), Some("Model changed to: gemini-2.0-flash"));
        assert_eq!(state.provider.model(), "gemini-2.0-flash");
    }

    #[test]
    fn model_rejects_names_that_alter_the_request_url() {
        let dispatcher = create_command_registry();
        let mut state = state();

        let err = dispatcher
            .dispatch_line("/model gemini?key=x", &mut state)
            .unwrap()
            .unwrap_err();

        assert!(matches!(err, ChatError::Input(_)));
        assert_eq!(state.provider.model(), "gemini-2.5-flash");
    }

    #[test]
    fn help_lists_every_command() {
        let dispatcher = create_command_registry();
        let mut state = state();
        let help = dispatcher
            .dispatch_line("/help", &mut state)
            .unwrap()
            .unwrap()
            .unwrap();

        for name in dispatcher.get_command_names() {
            assert!(help.contains(&format!("/{name}")), "missing /{name}");
        }
    }

    #[test]
    fn unknown_command_changes_nothing() {
        let dispatcher = create_command_registry();
        let mut state = state();

        let err = dispatcher.dispatch_line("/clear", &mut state).unwrap().unwrap_err();

        assert!(matches!(err, ChatError::Input(_)));
        assert_eq!(state.session.transcript().len(), 1);
        assert!(state.should_continue);
    }

    #[test]
    fn plain_text_is_not_a_command() {
        let dispatcher = create_command_registry();
        let mut state = state();
        assert!(dispatcher.dispatch_line("what is /reset?", &mut state).is_none());
        assert!(dispatcher.dispatch_line("/", &mut state).is_none());
    }
}
