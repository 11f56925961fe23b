use crate::render::DisplayTurn;
use crate::session::Role;
use console::{Term, style};
use termimad::MadSkin;

const TITLE: &str = "🌱 Climate Helper Chatbot";
const SUBTITLE: &str =
    "Your AI assistant for climate, solar, and sustainability questions via Gemini Flash model";

#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    pub markdown: bool,
    pub clear_screen: bool,
}

/// Redraws the whole chat, top to bottom.
pub fn display_transcript(turns: &[DisplayTurn], options: DisplayOptions) {
    let term = Term::stdout();
    if options.clear_screen && term.is_term() {
        term.clear_screen().ok();
    }

    display_header(&term);

    let skin = MadSkin::default();
    for turn in turns {
        display_turn(turn, &skin, options.markdown);
    }
}

fn display_header(term: &Term) {
    let width = std::cmp::min(term.size().1 as usize, 100).max(40);
    println!("{}", style(TITLE).bold().green());
    println!("{}", style(SUBTITLE).dim());
    println!("{}", style("─".repeat(width)).dim());
}

fn display_turn(turn: &DisplayTurn, skin: &MadSkin, markdown: bool) {
    println!("\n{}", role_label(turn.role));

    if turn.pending {
        println!("{}", style(&turn.content).italic().dim());
    } else if markdown && turn.role == Role::Assistant {
        print!("{}", skin.term_text(&turn.content));
    } else {
        println!("{}", turn.content);
    }
}

fn role_label(role: Role) -> String {
    match role {
        Role::User => style("🧑 You").bold().cyan().to_string(),
        Role::Assistant => style("🤖 Assistant").bold().green().to_string(),
    }
}

/// Blocking notice, e.g. when the API key is missing.
pub fn display_notice(message: &str) {
    println!("{} {}", style("🗝️").bold().yellow(), style(message).yellow());
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("❌").bold().red(), style(message).bold().red());
}

/// Output of a slash command.
pub fn display_info(message: &str) {
    println!("{}", message);
}
