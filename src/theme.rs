use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition { css: DARK_THEME },
        ThemeMode::Light => ThemeDefinition { css: LIGHT_THEME },
    }
}

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #101014;
    --color-bg-secondary: #16161c;
    --color-bg-overlay: rgba(0, 0, 0, 0.72);
    --color-text-primary: #f2f2f5;
    --color-text-muted: #9b9ba4;
    --color-border: #2c2c34;
    --color-surface-muted: #1e1e26;
    --color-input-border: #2c2c34;
    --color-input-bg: #101014;
    --color-chat-user-bg: #4463e8;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #1e1e26;
    --color-chat-assistant-text: #f2f2f5;
    --color-accent: #4463e8;
    --color-accent-text: #ffffff;
    --color-timestamp: #70707a;
    --color-typing-dot: #9b9ba4;
    --color-snippet-card-bg: #16161c;
    --color-snippet-card-border: #2c2c34;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-primary); border-bottom-color: var(--color-border); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-accent); }
"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f5f5f7;
    --color-bg-overlay: rgba(20, 20, 28, 0.45);
    --color-text-primary: #17171c;
    --color-text-muted: #5c5c66;
    --color-border: #d8d8de;
    --color-surface-muted: #ececf1;
    --color-input-border: #c6c6ce;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #3b5bdb;
    --color-chat-user-text: #ffffff;
    --color-chat-assistant-bg: #f1f1f5;
    --color-chat-assistant-text: #17171c;
    --color-accent: #3b5bdb;
    --color-accent-text: #ffffff;
    --color-timestamp: #8a8a92;
    --color-typing-dot: #5c5c66;
    --color-snippet-card-bg: #f5f5f7;
    --color-snippet-card-border: #d8d8de;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-primary); border-bottom-color: var(--color-border); }
.btn { color: var(--color-text-primary); }
.btn:hover,
.btn-ghost:hover { background: var(--color-surface-muted); }
.composer textarea { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
.composer textarea:focus { border-color: var(--color-accent); }
"#;
