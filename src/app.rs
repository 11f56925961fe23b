use crate::cli::Args;
use crate::commands::{ChatState, CommandDispatcher};
use crate::config::Config;
use crate::core::credential::{KEY_HELP_URL, MISSING_KEY_NOTICE};
use crate::core::error::ChatError;
use crate::display::{self, DisplayOptions};
use crate::input::{self, KeyPrompt, TerminalKeyPrompt};
use crate::providers::{LLMProvider, create_provider};
use crate::session::Session;
use is_terminal::IsTerminal;
use std::io::{self, Read};
use tracing::{debug, info};

pub struct Application {
    pub args: Args,
    pub config: Config,
    pub command_dispatcher: CommandDispatcher,
}

/// What a line typed in the chat loop asks for.
#[derive(Debug, PartialEq, Eq)]
enum InputLine<'a> {
    Blank,
    Command(&'a str),
    /// The line exactly as typed.
    Question(&'a str),
}

/// Surrounding whitespace only decides how the line is handled; questions
/// keep it.
fn parse_line(line: &str) -> InputLine<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        InputLine::Blank
    } else if trimmed.starts_with('/') {
        InputLine::Command(trimmed)
    } else {
        InputLine::Question(line)
    }
}

impl Application {
    pub fn new(args: Args, config: Config, command_dispatcher: CommandDispatcher) -> Self {
        Self {
            args,
            config,
            command_dispatcher,
        }
    }

    pub async fn run(&mut self) -> Result<(), ChatError> {
        let interactive = io::stdin().is_terminal();
        self.run_with(interactive, io::stdin(), &mut TerminalKeyPrompt)
            .await
    }

    /// `source` is only read when stdin is piped and no question was given.
    pub async fn run_with<R: Read>(
        &mut self,
        interactive: bool,
        mut source: R,
        keys: &mut dyn KeyPrompt,
    ) -> Result<(), ChatError> {
        let piped = if !interactive && self.args.question.is_none() {
            let mut buffer = String::new();
            source
                .read_to_string(&mut buffer)
                .map_err(|e| ChatError::Input(format!("Failed to read from stdin: {}", e)))?;
            Some(buffer.trim_end_matches(['\n', '\r']).to_string())
        } else {
            None
        };

        let mut session = Session::new();
        self.collect_credential(&mut session, interactive, keys)?;

        let credential = session
            .credential()
            .ok_or_else(|| ChatError::Config(MISSING_KEY_NOTICE.to_string()))?;
        let provider = create_provider(&self.config, credential)?;

        match self.args.question.clone().or(piped) {
            Some(question) => self.handle_one_shot(session, provider, &question).await,
            None => self.handle_chat_mode(session, provider).await,
        }
    }

    /// Blocks until a usable key is held. Outside a terminal there is nobody
    /// to ask, so a missing key ends the run.
    fn collect_credential(
        &self,
        session: &mut Session,
        interactive: bool,
        keys: &mut dyn KeyPrompt,
    ) -> Result<(), ChatError> {
        if let Some(key) = &self.args.api_key {
            session.set_credential(key)?;
            return Ok(());
        }

        if !interactive {
            return Err(ChatError::Config(MISSING_KEY_NOTICE.to_string()));
        }

        display::display_notice(&format!(
            "{} Get your API key from {}",
            MISSING_KEY_NOTICE, KEY_HELP_URL
        ));

        loop {
            let raw = keys.read_key()?;
            match session.set_credential(&raw) {
                Ok(_) => return Ok(()),
                Err(ChatError::Config(reason)) => display::display_notice(&reason),
                Err(other) => return Err(other),
            }
        }
    }

    fn display_options(&self, clear_screen: bool) -> DisplayOptions {
        DisplayOptions {
            markdown: self.config.markdown,
            clear_screen: clear_screen && self.config.clear_screen,
        }
    }

    async fn handle_one_shot(
        &self,
        mut session: Session,
        provider: Box<dyn LLMProvider>,
        question: &str,
    ) -> Result<(), ChatError> {
        info!("one-shot question");
        session.ask(provider.as_ref(), question).await?;
        display::display_transcript(&session.render(), self.display_options(false));
        session.destroy();
        Ok(())
    }

    async fn handle_chat_mode(
        &self,
        session: Session,
        provider: Box<dyn LLMProvider>,
    ) -> Result<(), ChatError> {
        let mut state = ChatState::new(session, provider);
        let mut editor = input::create_editor(self.command_dispatcher.clone())?;
        let options = self.display_options(true);

        // Printed below the transcript after the next redraw.
        let mut notice: Option<String> = Some(
            "Type '/help' for available commands. Press Ctrl+D or type /quit to exit.".to_string(),
        );

        loop {
            display::display_transcript(&state.session.render(), options);
            if let Some(message) = notice.take() {
                display::display_info(&message);
            }

            let line = match input::read_input(&mut editor)? {
                Some(line) => line,
                None => break,
            };

            let question = match parse_line(&line) {
                InputLine::Blank => continue,
                InputLine::Command(command) => {
                    if let Some(result) = self.command_dispatcher.dispatch_line(command, &mut state) {
                        notice = match result {
                            Ok(output) => output,
                            Err(e) => Some(e.to_string()),
                        };
                    }

                    if !state.should_continue {
                        break;
                    }
                    continue;
                }
                InputLine::Question(question) => question,
            };

            let prompt = match state.session.begin(question) {
                Ok(prompt) => prompt,
                Err(e) => {
                    notice = Some(e.to_string());
                    continue;
                }
            };

            // Placeholder frame while the call is in flight.
            display::display_transcript(&state.session.render(), options);

            let outcome = state.provider.complete(&prompt).await;
            debug!(ok = outcome.is_ok(), "completion returned");
            state.session.resolve(outcome)?;
        }

        state.session.destroy();
        Ok(())
    }
}
