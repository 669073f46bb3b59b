//! Persisted last-used session preferences.
//!
//! The client remembers which agent flavor and permission mode the user
//! last started a session with, as the final fallback when resolving the
//! mode for a new session. Stored as JSON under the XDG cache home; a
//! missing or corrupt file simply means "nothing remembered".

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;
use xdg::BaseDirectories;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastUsed {
    pub agent: Option<String>,
    pub permission_mode: Option<String>,
    pub updated_at: String,
}

impl LastUsed {
    pub fn new(agent: Option<&str>, permission_mode: Option<&str>) -> Self {
        Self {
            agent: agent.map(|s| s.to_string()),
            permission_mode: permission_mode.map(|s| s.to_string()),
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

fn state_dir() -> PathBuf {
    BaseDirectories::with_prefix("handrail")
        .map(|dirs| dirs.get_cache_home())
        .unwrap_or_else(|_| PathBuf::from(".cache/handrail"))
}

pub fn last_used_path() -> PathBuf {
    state_dir().join("last_used.json")
}

/// Read the remembered preferences. Total: a missing, unreadable, or
/// corrupt state file reads as `None` with a warning, never an error —
/// stale state must not break session creation.
pub fn read_last_used() -> Option<LastUsed> {
    let path = last_used_path();
    if !path.exists() {
        return None;
    }
    match fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!("ignoring corrupt last-used state: {err}");
                None
            }
        },
        Err(err) => {
            warn!("failed to read last-used state: {err}");
            None
        }
    }
}

pub fn write_last_used(state: &LastUsed) -> Result<()> {
    let dir = state_dir();
    fs::create_dir_all(&dir).context("Failed to create state directory")?;

    let content =
        serde_json::to_string_pretty(state).context("Failed to serialize last-used state")?;

    // Atomic write: temp file in the target directory, then rename.
    let mut tmp =
        tempfile::NamedTempFile::new_in(&dir).context("Failed to create temporary state file")?;
    tmp.write_all(content.as_bytes())
        .context("Failed to write temporary state file")?;
    tmp.persist(last_used_path())
        .context("Failed to rename state file")?;

    Ok(())
}
