pub mod chat;
pub mod settings;
pub mod shared;
pub mod snippets;

pub use chat::AssistantView;
pub use settings::SettingsView;
pub use snippets::SnippetsView;
