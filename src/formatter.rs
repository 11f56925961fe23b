//! Fixed texts around the remote model: the instruction prepended to every
//! question and the wrappers applied to every answer.

pub const INSTRUCTION: &str = "Anda adalah ahli iklim dan keberlanjutan yang sangat membantu. \
Tolong berikan informasi yang akurat dan membangkitkan semangat tentang:";

pub const PREAMBLE: &str = "Pertanyaan bagus banget! 🌱";

pub const POSTAMBLE: &str = "Apakah Anda ingin saya menjelaskan lebih lanjut tentang bagian ini, \
atau apakah Anda memiliki pertanyaan lain tentang iklim?";

/// Builds the prompt sent to the model. The question is embedded verbatim.
pub fn build_prompt(question: &str) -> String {
    format!("{} {}", INSTRUCTION, question)
}

/// Wraps a successful completion in the fixed opening and closing sentences.
pub fn friendly_wrap(raw_text: &str) -> String {
    format!("{}\n\n{}\n\n{}", PREAMBLE, raw_text.trim(), POSTAMBLE)
}

/// Replaces the wrapped answer when the completion call failed.
pub fn apology(description: &str) -> String {
    format!(
        "Maafkan, Saya menemukan sebuah error: {}. Tolong tanyakan pertanyaannya sekali lagi.",
        description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_the_solar_efficiency_answer() {
        assert_eq!(
            friendly_wrap("Efficiency ranges from 15% to 22%."),
            "Pertanyaan bagus banget! 🌱\n\nEfficiency ranges from 15% to 22%.\n\nApakah Anda ingin saya menjelaskan lebih lanjut tentang bagian ini, atau apakah Anda memiliki pertanyaan lain tentang iklim?"
        );
    }

    #[test]
    fn trims_surrounding_whitespace_only() {
        let wrapped = friendly_wrap("\n\n  Line one\n\nLine two  \n");
        assert_eq!(
            wrapped,
            format!("{}\n\nLine one\n\nLine two\n\n{}", PREAMBLE, POSTAMBLE)
        );
    }

    #[test]
    fn empty_completion_still_wraps() {
        assert_eq!(
            friendly_wrap("   "),
            format!("{}\n\n\n\n{}", PREAMBLE, POSTAMBLE)
        );
    }

    #[test]
    fn apology_embeds_the_error() {
        assert_eq!(
            apology("API error: API key not valid"),
            "Maafkan, Saya menemukan sebuah error: API error: API key not valid. Tolong tanyakan pertanyaannya sekali lagi."
        );
    }

    #[test]
    fn prompt_keeps_question_verbatim() {
        let prompt = build_prompt("  What is solar panel efficiency?");
        assert!(prompt.starts_with(INSTRUCTION));
        assert!(prompt.ends_with(":   What is solar panel efficiency?"));
    }

    #[test]
    fn fixed_texts_carry_no_invisible_characters() {
        let prompt = build_prompt("Is wind power reliable?");
        assert_eq!(
            prompt,
            format!("{} Is wind power reliable?", INSTRUCTION)
        );
        for text in [prompt.as_str(), PREAMBLE, POSTAMBLE] {
            assert!(!text.contains('\u{feff}'), "stray U+FEFF in {text:?}");
        }
    }
}
