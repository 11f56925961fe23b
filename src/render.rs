use crate::session::{Role, SessionState, Transcript};

/// Shown in the assistant slot while a completion is in flight.
pub const THINKING_PLACEHOLDER: &str = "🤔 Berpikir...";

/// One block of the rendered chat, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTurn {
    pub role: Role,
    pub content: String,
    /// True only for the transient placeholder, which is never stored.
    pub pending: bool,
}

/// Maps the transcript (plus the placeholder while awaiting) to what should be
/// on screen. Pure: the same inputs always give the same list.
pub fn render(transcript: &Transcript, state: SessionState) -> Vec<DisplayTurn> {
    let mut view: Vec<DisplayTurn> = transcript
        .turns()
        .iter()
        .map(|turn| DisplayTurn {
            role: turn.role,
            content: turn.content.clone(),
            pending: false,
        })
        .collect();

    if state == SessionState::AwaitingCompletion {
        view.push(DisplayTurn {
            role: Role::Assistant,
            content: THINKING_PLACEHOLDER.to_string(),
            pending: true,
        });
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{GREETING, Turn};
    use pretty_assertions::assert_eq;

    fn sample() -> Transcript {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("Why is the sea rising?"));
        transcript.append(Turn::assistant("Thermal expansion and melting ice."));
        transcript
    }

    #[test]
    fn idle_view_mirrors_the_transcript() {
        let view = render(&sample(), SessionState::Idle);
        let pairs: Vec<(Role, &str)> = view
            .iter()
            .map(|t| (t.role, t.content.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (Role::Assistant, GREETING),
                (Role::User, "Why is the sea rising?"),
                (Role::Assistant, "Thermal expansion and melting ice."),
            ]
        );
        assert!(view.iter().all(|t| !t.pending));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let transcript = sample();
        assert_eq!(
            render(&transcript, SessionState::Idle),
            render(&transcript, SessionState::Idle)
        );
    }

    #[test]
    fn placeholder_follows_pending_question() {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("How much CO2 does a tree absorb?"));

        let view = render(&transcript, SessionState::AwaitingCompletion);

        assert_eq!(view.len(), 3);
        let last = view.last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, THINKING_PLACEHOLDER);
        assert!(last.pending);
        // The placeholder is a view artefact only.
        assert_eq!(transcript.len(), 2);
    }
}
