use std::fmt;

/// Opening turn of every transcript. Never produced by the model.
pub const GREETING: &str = "Halo! Aku asisten iklimmu. Tanyakan apa saja tentang energi surya, \
keberlanjutan, atau ilmu iklim. Mau dibantu apa hari ini?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Assistant => f.write_str("assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Append-only conversation history. The only way to remove turns is a full
/// [`Transcript::reset`].
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// A transcript already holding the greeting.
    pub fn new() -> Self {
        let mut transcript = Self::default();
        transcript.initialize();
        transcript
    }

    /// Inserts the greeting if there are no turns yet.
    pub fn initialize(&mut self) {
        if self.turns.is_empty() {
            self.turns.push(Turn::assistant(GREETING));
        }
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Drops every turn and starts over from the greeting.
    pub fn reset(&mut self) {
        self.turns.clear();
        self.initialize();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_with_a_single_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.turns(), &[Turn::assistant(GREETING)]);
    }

    #[test]
    fn initialize_is_a_no_op_when_turns_exist() {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("hi"));
        transcript.initialize();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.turns()[0], Turn::assistant(GREETING));
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("first"));
        transcript.append(Turn::assistant("second"));
        transcript.append(Turn::user("third"));

        let contents: Vec<&str> = transcript
            .turns()
            .iter()
            .map(|t| t.content.as_str())
            .collect();
        assert_eq!(contents, vec![GREETING, "first", "second", "third"]);
    }

    #[test]
    fn reset_leaves_only_the_greeting() {
        let mut transcript = Transcript::new();
        for i in 0..10 {
            transcript.append(Turn::user(format!("q{i}")));
            transcript.append(Turn::assistant(format!("a{i}")));
        }
        transcript.reset();
        assert_eq!(transcript.turns(), &[Turn::assistant(GREETING)]);
    }

    #[test]
    fn role_labels() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Assistant.to_string(), "assistant");
    }
}
