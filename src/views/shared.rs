use anyhow::Context;
use comrak::plugins::syntect::SyntectAdapter;
use comrak::{ComrakOptions, ComrakPlugins, markdown_to_html_with_plugins};
use once_cell::sync::Lazy;

use crate::config::AssistantConfig;
use crate::store::{SavedSnippet, SnippetStore};
use crate::types::Snippet;

static MARKDOWN_OPTIONS: Lazy<ComrakOptions> = Lazy::new(|| {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.tasklist = true;
    options
});

pub fn markdown_to_html(md: &str) -> String {
    let adapter = SyntectAdapter::new(Some("base16-ocean.dark"));
    let mut plugins = ComrakPlugins::default();
    plugins.render.codefence_syntax_highlighter = Some(&adapter);
    markdown_to_html_with_plugins(md, &MARKDOWN_OPTIONS, &plugins)
}

/// Snippets already on disk, newest first. Used to seed the app state.
pub fn initial_saved_snippets() -> Vec<SavedSnippet> {
    SnippetStore::new(AssistantConfig::from_env().snippets_dir).load_all()
}

/// Hand a completed snippet to the store. The UI boundary for save errors.
pub fn persist_snippet(snippet: &Snippet) -> anyhow::Result<SavedSnippet> {
    let store = SnippetStore::new(AssistantConfig::from_env().snippets_dir);
    store
        .save(snippet)
        .with_context(|| format!("saving snippet to {:?}", store.root()))
}

/// Remove a saved snippet record.
pub fn remove_snippet(record: &SavedSnippet) -> anyhow::Result<()> {
    let store = SnippetStore::new(AssistantConfig::from_env().snippets_dir);
    store
        .delete(&record.id)
        .with_context(|| format!("deleting snippet record {}", record.id))
}

/// Title line for a saved snippet, taken from the first answer.
pub fn snippet_title(record: &SavedSnippet) -> String {
    let candidate = record.snippet.what.trim();
    if candidate.is_empty() {
        return "Untitled snippet".to_string();
    }
    truncate_title(candidate.to_string())
}

fn truncate_title(title: String) -> String {
    match title.char_indices().nth(80) {
        Some((at, _)) => title[..at].to_string(),
        None => title,
    }
}
