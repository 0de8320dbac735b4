use crate::snippet;
use crate::types::{ChatMessage, Role};

use super::ConversationStage;

/// Fixed opening message every session starts with. It already carries the
/// first question, so the engine only ever answers user turns.
pub const GREETING: &str = "Hi there! 👋 I'll help you put together your daily snippet.\n\nWhat did you work on today? Tell me in your own words.";

const ASK_HIGHLIGHT: &str =
    "Understood! Was there anything today you think went particularly well? (Highlight)";
const ASK_LOWLIGHT: &str =
    "Nice! And what fell short, or what would you like to improve? (Lowlight)";
const ASK_TOMORROW: &str = "Last one: what are you planning to work on tomorrow? (Tomorrow)";
const COMPLETION: &str = "Perfect, your snippet is ready! 👍\n\nSave it with the button below, or keep talking if something needs another pass.";
const FILLER: &str = "Please go on!";

/// Scripted reply selection.
///
/// `transcript` is the conversation as it stood *before* this user turn, so
/// the greeting-only transcript has length 1 and every completed turn adds
/// two messages. Which branch runs depends on that length alone; `user_input`
/// only feeds the echoed text and the assembled snippet. The caller
/// guarantees `user_input` is non-empty after trimming.
pub fn next_reply(transcript: &[ChatMessage], user_input: &str) -> ChatMessage {
    match ConversationStage::from_transcript_len(transcript.len()) {
        Some(ConversationStage::What) => ChatMessage::assistant(format!(
            "Got it — \"{user_input}\".\n\nWhy did you work on that? What was the goal behind it?"
        )),
        Some(ConversationStage::Why) => ChatMessage::assistant(ASK_HIGHLIGHT),
        Some(ConversationStage::Highlight) => ChatMessage::assistant(ASK_LOWLIGHT),
        Some(ConversationStage::Lowlight) => ChatMessage::assistant(ASK_TOMORROW),
        Some(ConversationStage::Tomorrow) | Some(ConversationStage::Done) => {
            // The transcript predates the current input, so the answer being
            // given right now has to be appended before assembly.
            let answers = transcript
                .iter()
                .filter(|msg| msg.role == Role::User)
                .map(|msg| msg.content.clone())
                .chain(std::iter::once(user_input.to_string()));
            ChatMessage::assistant_with_snippet(COMPLETION, snippet::from_answers(answers))
        }
        // Not reachable through `ChatSession`, which always holds the
        // greeting plus complete turn pairs.
        None => ChatMessage::assistant(FILLER),
    }
}
