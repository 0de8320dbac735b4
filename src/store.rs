//! Snippet persistence.
//!
//! Saved snippets live as one JSON record per file under a per-user data
//! directory. Wasm builds have no filesystem and keep records in a
//! process-local map instead.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::types::Snippet;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::Path};
use std::path::PathBuf;

#[cfg(target_arch = "wasm32")]
use once_cell::sync::Lazy;
#[cfg(target_arch = "wasm32")]
use std::sync::Mutex;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snippet storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snippet record encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A persisted snippet record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedSnippet {
    pub id: String,
    pub snippet: Snippet,
    /// Unix seconds at save time.
    pub created_at: u64,
    /// Backing file, absent for in-memory records.
    #[serde(skip)]
    pub file_path: Option<String>,
}

/// Default location for snippet records.
pub fn default_snippets_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("dailysnip").join("snippets");
    }

    PathBuf::from("cache").join("snippets")
}

pub struct SnippetStore {
    root: PathBuf,
}

impl SnippetStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SnippetStore {
    /// Write one snippet as a JSON record. The filename combines a slug of
    /// the "what" field with the save timestamp.
    pub fn save(&self, snippet: &Snippet) -> Result<SavedSnippet, StoreError> {
        fs::create_dir_all(&self.root)?;

        let created_at = current_timestamp();
        let slug = slugify_for_filename(&snippet.what);
        let filename = if slug.is_empty() {
            format!("snippet-{created_at}.json")
        } else {
            format!("{slug}-{created_at}.json")
        };
        let path = self.root.join(filename);
        let path_str = path.to_string_lossy().into_owned();

        let record = SavedSnippet {
            id: path_str.clone(),
            snippet: snippet.clone(),
            created_at,
            file_path: Some(path_str),
        };
        fs::write(&path, serde_json::to_string_pretty(&record)?)?;
        Ok(record)
    }

    /// Load every readable record, newest first. Unreadable or malformed
    /// files are skipped with a warning.
    pub fn load_all(&self) -> Vec<SavedSnippet> {
        if !self.root.exists() {
            return Vec::new();
        }

        let mut records: Vec<SavedSnippet> = Vec::new();
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("failed to read snippet directory: {err}");
                return Vec::new();
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match read_record(&path) {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!("skipping unreadable snippet record {path:?}: {err}");
                }
            }
        }

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        records
    }

    /// Remove a record by id. Missing files are fine.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let path = Path::new(id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_record(path: &Path) -> Result<SavedSnippet, StoreError> {
    let raw = fs::read_to_string(path)?;
    let mut record: SavedSnippet = serde_json::from_str(&raw)?;
    let path_str = path.to_string_lossy().into_owned();
    record.id = path_str.clone();
    record.file_path = Some(path_str);
    Ok(record)
}

#[cfg(target_arch = "wasm32")]
static MEM_STORE: Lazy<Mutex<Vec<SavedSnippet>>> = Lazy::new(|| Mutex::new(Vec::new()));

#[cfg(target_arch = "wasm32")]
impl SnippetStore {
    pub fn save(&self, snippet: &Snippet) -> Result<SavedSnippet, StoreError> {
        let created_at = current_timestamp();
        let mut records = MEM_STORE.lock().expect("snippet store poisoned");
        let record = SavedSnippet {
            id: format!("mem-{created_at}-{}", records.len()),
            snippet: snippet.clone(),
            created_at,
            file_path: None,
        };
        records.push(record.clone());
        Ok(record)
    }

    pub fn load_all(&self) -> Vec<SavedSnippet> {
        let mut records = MEM_STORE.lock().expect("snippet store poisoned").clone();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        records
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = MEM_STORE.lock().expect("snippet store poisoned");
        records.retain(|record| record.id != id);
        Ok(())
    }
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn slugify_for_filename(input: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = false;
    for ch in input.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() {
            slug.push(lower);
            last_dash = false;
        } else if (lower.is_ascii_whitespace() || lower == '-') && !last_dash && !slug.is_empty() {
            slug.push('-');
            last_dash = true;
        }
        if slug.len() >= 40 {
            break;
        }
    }
    slug.trim_matches('-').to_string()
}
