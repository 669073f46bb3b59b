//! Headless core for mobile agent-session clients.
//!
//! Client UIs for coding agents need two pieces of law-governed logic that
//! are independent of any rendering framework: splitting multi-file unified
//! diff blobs into per-file old/new bodies, and resolving permission modes
//! against the vocabulary of a session's agent flavor (Claude vs
//! Codex/Gemini). This crate owns both, plus the configuration and
//! last-used-state plumbing around them. The `hr` binary exposes the same
//! engine headlessly: JSON on stdout, logs on stderr.

pub mod changes;
pub mod config;
pub mod diff;
pub mod headless;
pub mod init;
pub mod permissions;
pub mod state;

pub use diff::{split_unified_diff, FileDiff};
pub use permissions::{
    classify_flavor, coerce_mode_for_flavor, default_mode_for_flavor, initial_mode_for_session,
    FlavorClass, ModeSources, PermissionMode,
};
