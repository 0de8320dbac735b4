//! Conversation session: transcript ownership and inbound guards.

use tracing::debug;

use crate::engine::{self, ConversationStage};
use crate::types::ChatMessage;

/// What happened to a submission. Rejections are silent: the shell disables
/// the send action, nothing is surfaced to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The user message was appended and a reply is now pending.
    Accepted,
    /// Empty after trimming; transcript untouched.
    IgnoredEmpty,
    /// A reply is already pending; transcript untouched.
    IgnoredBusy,
}

/// A single assistant conversation.
///
/// The transcript is append-only and owned exclusively by the session. Each
/// accepted submission appends the user message and parks the computed reply
/// as pending; the shell commits it after its typing-delay timer fires, so at
/// most one reply is ever in flight.
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    pending: Option<ChatMessage>,
    stage: ConversationStage,
}

impl ChatSession {
    /// Start a fresh session seeded with the scripted greeting.
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage::assistant(engine::GREETING)],
            pending: None,
            stage: ConversationStage::What,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn stage(&self) -> ConversationStage {
        self.stage
    }

    /// True between an accepted submission and `commit_reply`.
    pub fn is_replying(&self) -> bool {
        self.pending.is_some()
    }

    /// True once the completion reply has been committed.
    pub fn is_complete(&self) -> bool {
        self.stage.is_done()
    }

    /// Handle one user submission. Trims the input, applies the two inbound
    /// guards, and on acceptance computes the scripted reply eagerly; only
    /// the commit is delayed.
    pub fn submit(&mut self, input: &str) -> SubmitOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            debug!("ignoring empty submission");
            return SubmitOutcome::IgnoredEmpty;
        }
        if self.pending.is_some() {
            debug!("ignoring submission while a reply is pending");
            return SubmitOutcome::IgnoredBusy;
        }

        let reply = engine::next_reply(&self.transcript, trimmed);
        self.transcript.push(ChatMessage::user(trimmed));
        self.pending = Some(reply);
        SubmitOutcome::Accepted
    }

    /// Append the pending reply to the transcript and advance the stage.
    /// Returns the committed message, or `None` when nothing was pending.
    pub fn commit_reply(&mut self) -> Option<&ChatMessage> {
        let reply = self.pending.take()?;
        self.transcript.push(reply);
        self.stage = self.stage.advance();
        self.transcript.last()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
