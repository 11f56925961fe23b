use crate::commands::CommandDispatcher;
use crate::core::error::ChatError;

use console::style;
use dialoguer::Password;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, EditMode, Editor, Helper};

const QUESTION_PROMPT: &str = "Tanyakan saya tentang iklim, pemasangan solar panel, dan sustainability...";

/// Completes `/command` names; plain questions get no completion.
pub struct CommandCompleter {
    command_registry: CommandDispatcher,
}

impl CommandCompleter {
    pub fn new(command_registry: CommandDispatcher) -> Self {
        Self { command_registry }
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let names = self.command_registry.get_command_names();
        Ok((1, complete_command(&names, line, pos)))
    }
}

/// Command names matching the text typed after the leading `/`.
pub fn complete_command(names: &[String], line: &str, pos: usize) -> Vec<Pair> {
    let Some(typed) = line.get(..pos).and_then(|head| head.strip_prefix('/')) else {
        return Vec::new();
    };

    if typed.contains(char::is_whitespace) {
        return Vec::new();
    }

    names
        .iter()
        .filter(|cmd| cmd.starts_with(typed))
        .map(|cmd| Pair {
            display: cmd.to_string(),
            replacement: cmd.to_string(),
        })
        .collect()
}

/// Helper struct that combines the rustyline components
pub struct ChatHelper {
    completer: CommandCompleter,
    hinter: HistoryHinter,
}

impl ChatHelper {
    pub fn new(command_registry: CommandDispatcher) -> Self {
        Self {
            completer: CommandCompleter::new(command_registry),
            hinter: HistoryHinter {},
        }
    }
}

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ChatHelper {}

impl Validator for ChatHelper {}

/// Creates a configured rustyline editor. History stays in memory only.
pub fn create_editor(
    command_registry: CommandDispatcher,
) -> Result<Editor<ChatHelper, DefaultHistory>, ChatError> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut editor = Editor::with_config(config)
        .map_err(|e| ChatError::Input(format!("Failed to create line editor: {}", e)))?;

    editor.set_helper(Some(ChatHelper::new(command_registry)));

    Ok(editor)
}

/// Reads one question or command. `None` means the operator left (Ctrl-C / Ctrl-D).
pub fn read_input(
    editor: &mut Editor<ChatHelper, DefaultHistory>,
) -> Result<Option<String>, ChatError> {
    println!("\n{}", style(QUESTION_PROMPT).dim());
    let prompt = if cfg!(windows) && std::env::var("PSModulePath").is_ok() {
        "> ".to_string()
    } else {
        style("> ").bold().cyan().to_string()
    };
    match editor.readline(&prompt) {
        Ok(line) => {
            if !line.trim().is_empty() {
                if let Err(e) = editor.add_history_entry(&line) {
                    return Err(ChatError::Input(format!(
                        "Failed to add history entry: {}",
                        e
                    )));
                }
            }
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            println!("Exiting...");
            Ok(None)
        }
        Err(err) => Err(ChatError::Input(format!("Input error: {}", err))),
    }
}

/// Secret field for the API key. Input is not echoed; an empty answer is
/// returned as-is so the caller can report the missing key.
pub fn read_api_key() -> Result<String, ChatError> {
    let key = Password::new()
        .with_prompt("Google AI API Key")
        .allow_empty_password(true)
        .interact()?;
    Ok(key)
}

/// Source of API key answers while a session has no credential.
pub trait KeyPrompt {
    fn read_key(&mut self) -> Result<String, ChatError>;
}

/// Asks on the terminal through [`read_api_key`].
pub struct TerminalKeyPrompt;

impl KeyPrompt for TerminalKeyPrompt {
    fn read_key(&mut self) -> Result<String, ChatError> {
        read_api_key()
    }
}
