//! Dailysnip - a scripted assistant that turns a short chat into a saved
//! daily snippet.
//!
//! The core (engine, snippet assembly, session, store) has no UI dependency;
//! the Dioxus shell lives behind the `ui` feature, enabled by each platform
//! feature.

pub mod config;
pub mod engine;
pub mod session;
pub mod snippet;
pub mod store;
pub mod theme;
pub mod types;

#[cfg(feature = "ui")]
pub mod ui;
#[cfg(feature = "ui")]
pub mod views;
