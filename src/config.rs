//! Runtime configuration, read from the environment after dotenv loading.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::store;

/// Pause between a user submission and the visible assistant reply.
pub const DEFAULT_TYPING_DELAY_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantConfig {
    pub typing_delay: Duration,
    pub snippets_dir: PathBuf,
}

impl AssistantConfig {
    /// Read configuration from `DAILYSNIP_*` variables, falling back to
    /// defaults. Malformed values are logged and replaced, never fatal.
    pub fn from_env() -> Self {
        let typing_delay_ms = match env::var("DAILYSNIP_TYPING_DELAY_MS") {
            Ok(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                warn!("invalid DAILYSNIP_TYPING_DELAY_MS value {raw:?}, using default");
                DEFAULT_TYPING_DELAY_MS
            }),
            Err(_) => DEFAULT_TYPING_DELAY_MS,
        };

        let snippets_dir = env::var("DAILYSNIP_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| store::default_snippets_dir());

        Self {
            typing_delay: Duration::from_millis(typing_delay_ms),
            snippets_dir,
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            typing_delay: Duration::from_millis(DEFAULT_TYPING_DELAY_MS),
            snippets_dir: store::default_snippets_dir(),
        }
    }
}
