//! Headless entry points for the `hr` binary.
//!
//! Machine-readable JSON goes to stdout; progress and diagnostics go to
//! stderr so output can be piped.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::changes::parse_change_set;
use crate::config::Config;
use crate::diff::split_unified_diff;
use crate::permissions::{
    classify_flavor, initial_mode_for_session, FlavorClass, ModeSources, PermissionMode,
};
use crate::state::{read_last_used, write_last_used, LastUsed};

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Split a unified diff (or, with `changes`, a structured change-set
/// payload) into per-file records and print them as JSON.
pub fn run_split(file: Option<&Path>, changes: bool, pretty: bool) -> Result<()> {
    let input = read_input(file)?;

    let records = if changes {
        let value: serde_json::Value =
            serde_json::from_str(&input).context("Failed to parse change set JSON")?;
        parse_change_set(&value)
    } else {
        split_unified_diff(&input)
    };

    print_json(&records, pretty)
}

#[derive(Debug, Serialize)]
struct ResolvedMode {
    mode: PermissionMode,
    flavor: Option<String>,
    flavor_class: FlavorClass,
}

/// Resolve the effective permission mode for a session flavor from the
/// draft value, configured defaults, and last-used state, and print it as
/// JSON. With `save`, the result is recorded as the new last-used state.
pub fn run_resolve_mode(
    flavor: Option<&str>,
    draft: Option<&str>,
    save: bool,
    pretty: bool,
) -> Result<()> {
    let config = Config::load()?;
    let last_used = read_last_used();

    let sources = ModeSources {
        draft,
        claude_default: config.permissions.claude_default(),
        codex_default: config.permissions.codex_default(),
        last_used: last_used
            .as_ref()
            .and_then(|s| s.permission_mode.as_deref()),
    };
    let mode = initial_mode_for_session(flavor, &sources);

    if save {
        write_last_used(&LastUsed::new(flavor, Some(mode.as_str())))?;
        eprintln!("[handrail] recorded last-used mode {mode}");
    }

    let summary = ResolvedMode {
        mode,
        flavor: flavor.map(|s| s.to_string()),
        flavor_class: classify_flavor(flavor),
    };
    print_json(&summary, pretty)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
