//! Permission-mode vocabulary and flavor-aware coercion.
//!
//! Claude and Codex/Gemini CLIs expose different permission-mode sets that
//! share only `default`. Session drafts, stored settings, and last-used
//! values all arrive as untrusted strings; everything here resolves them to
//! a mode that is valid for the target flavor without ever failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named policy controlling how much autonomy an agent session has to act
/// without confirmation. Serialized with the exact wire spelling each CLI
/// expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionMode {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "acceptEdits")]
    AcceptEdits,
    #[serde(rename = "bypassPermissions")]
    BypassPermissions,
    #[serde(rename = "plan")]
    Plan,
    #[serde(rename = "read-only")]
    ReadOnly,
    #[serde(rename = "safe-yolo")]
    SafeYolo,
    #[serde(rename = "yolo")]
    Yolo,
}

impl PermissionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::AcceptEdits => "acceptEdits",
            Self::BypassPermissions => "bypassPermissions",
            Self::Plan => "plan",
            Self::ReadOnly => "read-only",
            Self::SafeYolo => "safe-yolo",
            Self::Yolo => "yolo",
        }
    }

    /// Modes the Claude CLI accepts.
    pub fn is_claude_mode(self) -> bool {
        matches!(
            self,
            Self::Default | Self::AcceptEdits | Self::Plan | Self::BypassPermissions
        )
    }

    /// Modes the Codex and Gemini CLIs accept.
    pub fn is_codex_mode(self) -> bool {
        matches!(
            self,
            Self::Default | Self::ReadOnly | Self::SafeYolo | Self::Yolo
        )
    }

    /// Whether this mode belongs to the vocabulary of the given flavor
    /// class.
    pub fn valid_for(self, class: FlavorClass) -> bool {
        match class {
            FlavorClass::ClaudeLike => self.is_claude_mode(),
            FlavorClass::CodexLike => self.is_codex_mode(),
        }
    }
}

impl fmt::Display for PermissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`PermissionMode::from_str`] for tags outside the closed
/// set. The resolution entry points absorb it; it never crosses the public
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown permission mode: {0:?}")]
pub struct UnknownModeError(pub String);

impl FromStr for PermissionMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "acceptEdits" => Ok(Self::AcceptEdits),
            "bypassPermissions" => Ok(Self::BypassPermissions),
            "plan" => Ok(Self::Plan),
            "read-only" => Ok(Self::ReadOnly),
            "safe-yolo" => Ok(Self::SafeYolo),
            "yolo" => Ok(Self::Yolo),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

/// Which permission-mode vocabulary a session flavor uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlavorClass {
    ClaudeLike,
    CodexLike,
}

/// Classify a session flavor.
///
/// Single source of truth for which mode set applies: `codex` and `gemini`
/// are codex-like, everything else (including an absent or unknown flavor)
/// is claude-like.
pub fn classify_flavor(flavor: Option<&str>) -> FlavorClass {
    match flavor {
        Some("codex") | Some("gemini") => FlavorClass::CodexLike,
        _ => FlavorClass::ClaudeLike,
    }
}

/// Coerce an untrusted candidate onto the mode set of `flavor`.
///
/// Total: a missing, unknown, or wrong-subset candidate resolves to
/// [`PermissionMode::Default`]. Idempotent for any fixed flavor.
pub fn coerce_mode_for_flavor(candidate: Option<&str>, flavor: Option<&str>) -> PermissionMode {
    valid_member(candidate, classify_flavor(flavor)).unwrap_or(PermissionMode::Default)
}

/// Per-flavor configured default.
///
/// Overrides are assumed already validated against the matching subset (the
/// config layer does this at load); no cross-subset coercion happens here.
/// Run untrusted values through [`coerce_mode_for_flavor`] first.
pub fn default_mode_for_flavor(
    flavor: Option<&str>,
    claude_override: Option<PermissionMode>,
    codex_override: Option<PermissionMode>,
) -> PermissionMode {
    match classify_flavor(flavor) {
        FlavorClass::CodexLike => codex_override.unwrap_or(PermissionMode::Default),
        FlavorClass::ClaudeLike => claude_override.unwrap_or(PermissionMode::Default),
    }
}

/// Inputs consulted when opening a new session, in precedence order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeSources<'a> {
    /// Per-session draft the user edited before starting.
    pub draft: Option<&'a str>,
    /// Configured default for Claude sessions (validated at load).
    pub claude_default: Option<PermissionMode>,
    /// Configured default for Codex/Gemini sessions (validated at load).
    pub codex_default: Option<PermissionMode>,
    /// Mode of the last session the user actually started.
    pub last_used: Option<&'a str>,
}

/// Effective mode for a new session.
///
/// The one composition every caller must share: draft when valid for the
/// flavor, else the configured per-flavor default, else last-used when
/// valid for the flavor, else `default`. Invalid draft and last-used values
/// fall through to the next source rather than forcing `default` early.
pub fn initial_mode_for_session(flavor: Option<&str>, sources: &ModeSources<'_>) -> PermissionMode {
    let class = classify_flavor(flavor);

    if let Some(mode) = valid_member(sources.draft, class) {
        return mode;
    }

    let configured = match class {
        FlavorClass::CodexLike => sources.codex_default,
        FlavorClass::ClaudeLike => sources.claude_default,
    };
    if let Some(mode) = configured {
        return mode;
    }

    valid_member(sources.last_used, class).unwrap_or(PermissionMode::Default)
}

/// Parse and subset-check an untrusted candidate; `None` when it is
/// absent, unknown, or belongs to the other flavor's vocabulary.
fn valid_member(candidate: Option<&str>, class: FlavorClass) -> Option<PermissionMode> {
    candidate
        .and_then(|raw| raw.parse::<PermissionMode>().ok())
        .filter(|mode| mode.valid_for(class))
}
