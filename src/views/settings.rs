use crate::config::AssistantConfig;
use crate::types::ThemeMode;
use dioxus::prelude::*;

#[component]
pub fn SettingsView(theme: Signal<ThemeMode>) -> Element {
    let config = use_signal(AssistantConfig::from_env);
    let delay_ms = config.with(|c| c.typing_delay.as_millis());
    let data_dir = config.with(|c| c.snippets_dir.display().to_string());

    rsx! {
        div { class: "main-container",
            div { class: "settings-section",
                h3 { class: "section-title", "Display" }
                div { class: "theme-toggle",
                    button {
                        class: format_args!(
                            "theme-option {}",
                            if matches!(theme(), ThemeMode::Dark) { "active" } else { "" }
                        ),
                        r#type: "button",
                        onclick: move |_| theme.set(ThemeMode::Dark),
                        "Dark"
                    }
                    button {
                        class: format_args!(
                            "theme-option {}",
                            if matches!(theme(), ThemeMode::Light) { "active" } else { "" }
                        ),
                        r#type: "button",
                        onclick: move |_| theme.set(ThemeMode::Light),
                        "Light"
                    }
                }
            }
            div { class: "settings-section",
                h3 { class: "section-title", "Assistant" }
                p { class: "text-muted", "Reply delay: {delay_ms} ms (DAILYSNIP_TYPING_DELAY_MS)" }
            }
            div { class: "settings-section",
                h3 { class: "section-title", "Storage" }
                p { class: "text-muted", "Snippets are saved to {data_dir} (DAILYSNIP_DATA_DIR)" }
            }
        }
    }
}
