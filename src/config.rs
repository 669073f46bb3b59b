use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;
use xdg::BaseDirectories;

use crate::permissions::{FlavorClass, PermissionMode};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub permissions: PermissionsConfig,
}

/// Per-flavor default permission modes.
///
/// Stored as raw strings so that stale or hand-edited values can never make
/// the config unloadable; validation happens in the accessors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionsConfig {
    /// Default mode for Claude sessions
    /// ("default", "acceptEdits", "plan", "bypassPermissions").
    pub default_mode_claude: Option<String>,
    /// Default mode for Codex and Gemini sessions
    /// ("default", "read-only", "safe-yolo", "yolo").
    pub default_mode_codex: Option<String>,
}

impl PermissionsConfig {
    /// Configured Claude default, or `None` when unset or invalid.
    pub fn claude_default(&self) -> Option<PermissionMode> {
        validated_mode(
            self.default_mode_claude.as_deref(),
            FlavorClass::ClaudeLike,
            "permissions.default_mode_claude",
        )
    }

    /// Configured Codex/Gemini default, or `None` when unset or invalid.
    pub fn codex_default(&self) -> Option<PermissionMode> {
        validated_mode(
            self.default_mode_codex.as_deref(),
            FlavorClass::CodexLike,
            "permissions.default_mode_codex",
        )
    }
}

/// Parse a stored mode and check it against the key's flavor subset.
/// Invalid values are ignored with a warning; a bad config entry must never
/// break mode resolution.
fn validated_mode(raw: Option<&str>, class: FlavorClass, key: &str) -> Option<PermissionMode> {
    let raw = raw?;
    match raw.parse::<PermissionMode>() {
        Ok(mode) if mode.valid_for(class) => Some(mode),
        Ok(mode) => {
            warn!("ignoring {key} = {mode}: not valid for {class:?} sessions");
            None
        }
        Err(err) => {
            warn!("ignoring {key}: {err}");
            None
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> PathBuf {
        BaseDirectories::with_prefix("handrail")
            .map(|dirs| dirs.get_config_home().join("config.toml"))
            .unwrap_or_else(|_| PathBuf::from(".config/handrail/config.toml"))
    }
}
