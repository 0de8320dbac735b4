//! Snippet assembly and formatting.

use crate::types::{ChatMessage, Role, Snippet};

/// Display order of the snippet sections. Also the order answers are
/// collected in during a conversation.
const SECTIONS: [&str; 5] = ["What", "Why", "Highlight", "Lowlight", "Tomorrow"];

/// Assemble a snippet from the user messages of a transcript, in order.
///
/// Missing answers (fewer than five user messages) come out as empty fields
/// rather than an error.
pub fn build_snippet(transcript: &[ChatMessage]) -> Snippet {
    from_answers(
        transcript
            .iter()
            .filter(|msg| msg.role == Role::User)
            .map(|msg| msg.content.clone()),
    )
}

/// Map an ordered answer sequence onto the five fields. Extra answers beyond
/// the fifth are ignored.
pub fn from_answers(answers: impl IntoIterator<Item = String>) -> Snippet {
    let mut answers = answers.into_iter();
    let mut next = || answers.next().unwrap_or_default();
    Snippet {
        what: next(),
        why: next(),
        highlight: next(),
        lowlight: next(),
        tomorrow: next(),
    }
}

/// Render the fixed five-section text block: one `##` header per section,
/// value underneath, blank line between sections. The output is plain
/// markdown so the shell reuses its message renderer for previews.
pub fn format_snippet(snippet: &Snippet) -> String {
    let values = [
        &snippet.what,
        &snippet.why,
        &snippet.highlight,
        &snippet.lowlight,
        &snippet.tomorrow,
    ];
    SECTIONS
        .iter()
        .zip(values)
        .map(|(label, value)| format!("## {label}\n{value}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
