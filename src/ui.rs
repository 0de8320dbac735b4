use crate::config::AssistantConfig;
use crate::store::SavedSnippet;
use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::shared::initial_saved_snippets;
use crate::views::{AssistantView, SettingsView, SnippetsView};
use dioxus::prelude::*;

const DAILYSNIP_CSS: Asset = asset!("/assets/dailysnip.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppTab {
    Snippets,
    Settings,
}

#[component]
pub fn App() -> Element {
    let saved_snippets = use_signal(initial_saved_snippets);
    let active_tab = use_signal(|| AppTab::Snippets);
    let base_font_px = use_signal(|| 14i32);
    let theme = use_signal(|| ThemeMode::Dark);
    let mut show_assistant = use_signal(|| false);
    let config = use_signal(AssistantConfig::from_env);
    let typing_delay = config.with(|c| c.typing_delay);

    rsx! {
        ThemeStyles { base_font_px, theme }
        AppHeader { active_tab }
        TabPanels { active_tab, saved_snippets, theme }
        button {
            class: "assistant-launcher btn btn-primary",
            r#type: "button",
            onclick: move |_| show_assistant.set(true),
            "✏️ New snippet"
        }
        if show_assistant() {
            AssistantView { saved_snippets, show_assistant, base_font_px, typing_delay }
        }
    }
}

#[component]
fn ThemeStyles(base_font_px: Signal<i32>, theme: Signal<ThemeMode>) -> Element {
    let root_style = format!(":root {{ font-size: {}px; }}", base_font_px());
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: DAILYSNIP_CSS }
        style { dangerous_inner_html: "{root_style}" }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                span { class: "header-wordmark", "Dailysnip" }
                TabNavigation { active_tab }
            }
        }
    }
}

#[component]
fn TabPanels(
    active_tab: Signal<AppTab>,
    saved_snippets: Signal<Vec<SavedSnippet>>,
    theme: Signal<ThemeMode>,
) -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Snippets,
                children: rsx!( SnippetsView { saved_snippets } ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Settings,
                children: rsx!( SettingsView { theme } ),
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tabs",
            TabButton { active_tab, tab: AppTab::Snippets, label: "Snippets" }
            TabButton { active_tab, tab: AppTab::Settings, label: "Settings" }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        h1 {
            class: class,
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}
