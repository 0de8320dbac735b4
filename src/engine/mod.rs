/// Conversation engine for Dailysnip.
///
/// The assistant is fully scripted: replies are chosen by the position in the
/// conversation, never by understanding the text. The engine is synchronous
/// and pure; the simulated "thinking" pause lives in the shell, which delays
/// committing the reply it already holds.
///
/// # Architecture
///
/// - `stage` - explicit conversation state and its transition function
/// - `reply` - the positional reply table and snippet hand-off
///
/// # Usage
///
/// ```
/// use dailysnip::engine;
/// use dailysnip::types::ChatMessage;
///
/// let transcript = vec![ChatMessage::assistant(engine::GREETING)];
/// let reply = engine::next_reply(&transcript, "Shipped the report pipeline");
/// assert!(reply.content.contains("Why"));
/// ```
mod reply;
mod stage;

// Re-export main types
pub use reply::{GREETING, next_reply};
pub use stage::ConversationStage;
