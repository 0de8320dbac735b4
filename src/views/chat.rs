use crate::session::{ChatSession, SubmitOutcome};
use crate::snippet::format_snippet;
use crate::store::SavedSnippet;
use crate::types::{ChatMessage, Role, Snippet};
use crate::views::shared::{self, markdown_to_html};
use dioxus::events::Key;
use dioxus::prelude::*;
use std::time::Duration;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing::warn;

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

/// Composer suggestions offered before the first answer.
const QUICK_ACTIONS: [&str; 4] = [
    "Worked on the main project",
    "Attended team meetings",
    "Built a new feature",
    "Fixed bugs",
];

fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

/// The assistant dialog, shown as a modal overlay over the app shell.
///
/// Owns one [`ChatSession`] for its lifetime. The typing pause is a spawned
/// timer: the reply is already computed when the user message lands, the
/// task only delays committing it.
#[component]
pub fn AssistantView(
    saved_snippets: Signal<Vec<SavedSnippet>>,
    show_assistant: Signal<bool>,
    base_font_px: Signal<i32>,
    typing_delay: Duration,
) -> Element {
    let session = use_signal(ChatSession::new);
    let mut input = use_signal(String::new);

    let mut send_message = {
        let mut input_signal = input;
        let mut session = session;
        move |text: String| {
            let outcome = session.with_mut(|s| s.submit(&text));
            if outcome != SubmitOutcome::Accepted {
                return;
            }
            input_signal.set(String::new());

            let mut session = session;
            spawn(async move {
                tokio::time::sleep(typing_delay).await;
                session.with_mut(|s| {
                    s.commit_reply();
                });
            });
        }
    };

    let messages_snapshot: Vec<ChatMessage> = session.with(|s| s.messages().to_vec());
    let replying = session.with(|s| s.is_replying());
    let show_quick_actions = messages_snapshot.len() == 1 && !replying;

    rsx! {
        div { class: "assistant-overlay",
            onclick: move |_| show_assistant.set(false),
            div { class: "assistant-panel",
                onclick: move |evt| evt.stop_propagation(),
                header { class: "assistant-header",
                    div { class: "assistant-title",
                        div { class: "avatar assistant", "D" }
                        div {
                            h3 { "Snippet Assistant" }
                            p { class: "text-muted", "Write your daily snippet by chatting" }
                        }
                    }
                    button {
                        class: "assistant-close btn-ghost",
                        r#type: "button",
                        onclick: move |_| show_assistant.set(false),
                        aria_label: "Close assistant",
                        dangerous_inner_html: "&times;"
                    }
                }

                div { id: "assistant-messages", class: "assistant-messages",
                    for (i, msg) in messages_snapshot.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: format_args!("message-row {}", match msg.role { Role::User => "user", Role::Assistant => "assistant" }),
                            div { class: "message-stack",
                                div { class: format_args!(
                                        "bubble {}",
                                        match msg.role { Role::User => "user", Role::Assistant => "assistant" },
                                    ),
                                    if matches!(msg.role, Role::Assistant) {
                                        AssistantBubble {
                                            content: msg.content.clone(),
                                            snippet: msg.snippet.clone(),
                                            saved_snippets,
                                            show_assistant,
                                        }
                                    } else { "{msg.content}" }
                                }
                                if let Some(ts) = format_message_timestamp(msg.created_at) {
                                    div { class: format_args!(
                                            "message-meta {}",
                                            match msg.role { Role::User => "align-end", Role::Assistant => "align-start" }
                                        ),
                                        span { class: "message-timestamp", "{ts}" }
                                    }
                                }
                            }
                        }
                    }
                    if replying {
                        div { class: "message-row assistant",
                            div { class: "bubble assistant typing",
                                span { class: "typing-dot" }
                                span { class: "typing-dot" }
                                span { class: "typing-dot" }
                            }
                        }
                    }
                }

                if show_quick_actions {
                    div { class: "quick-actions",
                        for action in QUICK_ACTIONS {
                            button {
                                class: "quick-action-btn",
                                r#type: "button",
                                onclick: move |_| input.set(action.to_string()),
                                "{action}"
                            }
                        }
                    }
                }

                form { class: "composer",
                    div { class: "composer-inner",
                        textarea {
                            rows: "2",
                            placeholder: "Type a message… (Enter to send)",
                            value: "{input}",
                            oninput: move |evt| input.set(evt.value()),
                            onkeydown: move |evt| {
                                if evt.modifiers().meta() || evt.modifiers().ctrl() {
                                    if evt.key() == Key::Character("+".into()) || evt.key() == Key::Character("=".into()) {
                                        evt.prevent_default();
                                        base_font_px.set((base_font_px() + 1).clamp(12, 22));
                                        return;
                                    }
                                    if evt.key() == Key::Character("-".into()) {
                                        evt.prevent_default();
                                        base_font_px.set((base_font_px() - 1).clamp(12, 22));
                                        return;
                                    }
                                }
                                if evt.key() == Key::Enter && !evt.modifiers().shift() {
                                    evt.prevent_default();
                                    let text = input();
                                    send_message(text);
                                }
                            },
                            disabled: replying,
                            autofocus: true,
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: replying || input().trim().is_empty(),
                            onclick: move |_| {
                                let text = input();
                                send_message(text);
                            },
                            "Send"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AssistantBubble(
    content: String,
    snippet: Option<Snippet>,
    saved_snippets: Signal<Vec<SavedSnippet>>,
    show_assistant: Signal<bool>,
) -> Element {
    let content_html = markdown_to_html(&content);

    rsx! {
        div { class: "md", dangerous_inner_html: "{content_html}" }
        if let Some(snippet) = snippet {
            SnippetCard { snippet, saved_snippets, show_assistant }
        }
    }
}

#[component]
fn SnippetCard(
    snippet: Snippet,
    saved_snippets: Signal<Vec<SavedSnippet>>,
    show_assistant: Signal<bool>,
) -> Element {
    let formatted = format_snippet(&snippet);
    let preview_html = markdown_to_html(&formatted);

    let copy_payload = formatted.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
        });
    };

    let save_payload = snippet.clone();
    let on_save = move |_| {
        match shared::persist_snippet(&save_payload) {
            Ok(saved) => {
                saved_snippets.with_mut(|list| list.insert(0, saved));
                // Saving is the end of the conversation: hand off and close.
                show_assistant.set(false);
            }
            Err(err) => warn!("failed to save snippet: {err:#}"),
        }
    };

    rsx! {
        div { class: "snippet-card",
            div { class: "snippet-preview md", dangerous_inner_html: "{preview_html}" }
            div { class: "snippet-actions",
                button { class: "action-btn", r#type: "button", title: "Copy as markdown", onclick: on_copy, "Copy" }
                button { class: "action-btn primary", r#type: "button", onclick: on_save, "💾 Save snippet" }
            }
        }
    }
}
