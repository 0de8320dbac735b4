use crate::snippet::format_snippet;
use crate::store::SavedSnippet;
use crate::views::shared::{self, markdown_to_html, snippet_title};
use dioxus::{
    events::{FormEvent, Key, KeyboardEvent},
    prelude::*,
};
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing::warn;

const SNIPPET_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:zero], [year]");

#[derive(Clone, Copy, PartialEq, Eq)]
enum SnippetSort {
    Newest,
    Oldest,
    Title,
}

#[component]
pub fn SnippetsView(saved_snippets: Signal<Vec<SavedSnippet>>) -> Element {
    let mut selected_id = use_signal(|| Option::<String>::None);
    let mut sort_mode = use_signal(|| SnippetSort::Newest);

    {
        let saved_snippets = saved_snippets;
        let mut selected_id = selected_id;
        use_effect(move || {
            let records = saved_snippets();
            let should_clear = selected_id.with(|selection| {
                selection
                    .as_ref()
                    .map(|id| !records.iter().any(|record| &record.id == id))
                    .unwrap_or(false)
            });
            if should_clear {
                selected_id.set(None);
            }
        });
    }

    let records = saved_snippets();

    let mut display_records = records.clone();
    match sort_mode() {
        SnippetSort::Newest => display_records.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SnippetSort::Oldest => display_records.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SnippetSort::Title => display_records.sort_by(|a, b| {
            snippet_title(a)
                .to_lowercase()
                .cmp(&snippet_title(b).to_lowercase())
        }),
    }

    let current_selection = selected_id();
    let selected_record = current_selection
        .as_ref()
        .and_then(|id| display_records.iter().find(|record| &record.id == id))
        .cloned();

    rsx! {
        div { class: "main-container",
            if records.is_empty() {
                p { class: "text-muted", "No snippets yet. Open the assistant to write today's snippet." }
            } else {
                div { class: "snippet-controls",
                    label { for: "snippet-sort", class: "control-label", "Sort" }
                    select {
                        id: "snippet-sort",
                        value: match sort_mode() { SnippetSort::Newest => "newest", SnippetSort::Oldest => "oldest", SnippetSort::Title => "title" },
                        onchange: move |evt: FormEvent| {
                            let mode = match evt.value().as_str() {
                                "oldest" => SnippetSort::Oldest,
                                "title" => SnippetSort::Title,
                                _ => SnippetSort::Newest,
                            };
                            sort_mode.set(mode);
                        },
                        option { value: "newest", "Newest" }
                        option { value: "oldest", "Oldest" }
                        option { value: "title", "Title" }
                    }
                }
                div { class: "snippet-table",
                    div { class: "snippet-table-header",
                        span { class: "snippet-col-title", "Snippet" }
                        span { class: "snippet-col-date", "Saved" }
                    }
                    div { class: "snippet-table-body",
                        for record in display_records.iter().cloned() {
                            div {
                                key: "{record.id}",
                                class: format_args!(
                                    "snippet-row {}",
                                    if selected_record
                                        .as_ref()
                                        .is_some_and(|selected| selected.id == record.id) { "active" } else { "" }
                                ),
                                role: "button",
                                tabindex: "0",
                                onclick: {
                                    let record_id = record.id.clone();
                                    move |_| selected_id.set(Some(record_id.clone()))
                                },
                                onkeydown: {
                                    let record_id = record.id.clone();
                                    move |evt: KeyboardEvent| {
                                        let key = evt.key();
                                        let activate = match key {
                                            Key::Enter => true,
                                            Key::Character(ref value) if value == " " => true,
                                            _ => false,
                                        };
                                        if activate {
                                            evt.stop_propagation();
                                            evt.prevent_default();
                                            selected_id.set(Some(record_id.clone()));
                                        }
                                    }
                                },
                                span { class: "snippet-row-title", "{snippet_title(&record)}" }
                                span { class: "snippet-row-date", "{saved_date(record.created_at)}" }
                            }
                        }
                    }
                }
                if let Some(record) = selected_record {
                    div { class: "snippet-overlay", role: "dialog", aria_modal: "true",
                        onclick: move |_| selected_id.set(None),
                        div {
                            class: "snippet-overlay-panel",
                            onclick: move |evt| evt.stop_propagation(),
                            header { class: "snippet-overlay-header",
                                h2 { class: "snippet-viewer-title", "{snippet_title(&record)}" }
                                div { class: "snippet-overlay-actions",
                                    button {
                                        class: "btn-ghost snippet-delete",
                                        r#type: "button",
                                        onclick: {
                                            let record = record.clone();
                                            move |_| {
                                                if let Err(err) = shared::remove_snippet(&record) {
                                                    warn!("failed to delete snippet: {err:#}");
                                                    return;
                                                }
                                                let record_id = record.id.clone();
                                                saved_snippets.with_mut(|list| list.retain(|r| r.id != record_id));
                                                selected_id.set(None);
                                            }
                                        },
                                        "Delete"
                                    }
                                    button {
                                        class: "snippet-overlay-close btn-ghost",
                                        r#type: "button",
                                        onclick: move |_| selected_id.set(None),
                                        aria_label: "Close snippet",
                                        dangerous_inner_html: "&times;"
                                    }
                                }
                            }
                            p { class: "snippet-viewer-date", "Saved {saved_date(record.created_at)}" }
                            div { class: "snippet-viewer-content md",
                                dangerous_inner_html: "{markdown_to_html(&format_snippet(&record.snippet))}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn saved_date(timestamp: u64) -> String {
    if timestamp == 0 {
        return "Unknown date".to_string();
    }

    let Ok(mut datetime) = OffsetDateTime::from_unix_timestamp(timestamp as i64) else {
        return "Unknown date".to_string();
    };

    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }

    datetime
        .format(SNIPPET_DATE_FORMAT)
        .unwrap_or_else(|_| "Unknown date".to_string())
}
