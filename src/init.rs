//! First-run scaffolding for the user configuration file.

use anyhow::{Context, Result};
use std::fs;

use crate::config::Config;

/// Default config.toml content
const DEFAULT_CONFIG: &str = r#"# handrail configuration.
#
# Per-flavor default permission modes, applied when a new session carries no
# draft mode. Invalid values are ignored at load time.

[permissions]
# Default mode for Claude sessions.
# One of: "default", "acceptEdits", "plan", "bypassPermissions"
# default_mode_claude = "plan"

# Default mode for Codex and Gemini sessions.
# One of: "default", "read-only", "safe-yolo", "yolo"
# default_mode_codex = "read-only"
"#;

/// Write a commented default config file, refusing to clobber an existing
/// one.
pub fn write_default_config() -> Result<()> {
    let path = Config::config_path();
    if path.exists() {
        anyhow::bail!("config file already exists: {}", path.display());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    fs::write(&path, DEFAULT_CONFIG).context("Failed to write default config")?;

    eprintln!("Wrote {}", path.display());
    Ok(())
}
