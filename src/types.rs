use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// The five-field daily work summary assembled from a completed conversation.
///
/// Created once per conversation and never mutated afterwards; saving hands
/// ownership to the snippet store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub what: String,
    pub why: String,
    pub highlight: String,
    pub lowlight: String,
    pub tomorrow: String,
}

/// One entry in the conversation transcript.
///
/// The completion reply carries the assembled [`Snippet`] so the shell can
/// offer a save action on that bubble.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub created_at: Option<OffsetDateTime>,
    pub snippet: Option<Snippet>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            created_at: Some(current_time()),
            snippet: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            created_at: Some(current_time()),
            snippet: None,
        }
    }

    pub fn assistant_with_snippet(content: impl Into<String>, snippet: Snippet) -> Self {
        Self {
            snippet: Some(snippet),
            ..Self::assistant(content)
        }
    }
}

pub fn current_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}
