//! Unified diff parsing for agent tool output.
//!
//! Agent CLIs report edits as unified diff blobs that may concatenate
//! several files back to back, with or without `diff --git` separator
//! lines. This module splits such a blob into per-file records carrying
//! full reconstructed old/new bodies, ready for side-by-side rendering.

use serde::{Deserialize, Serialize};

/// One file's worth of a unified diff, with the old/new bodies
/// reconstructed from its hunks.
///
/// Context lines appear in both bodies, added lines only in `new_text`,
/// removed lines only in `old_text`. `file_name` is absent for deletions
/// (`+++ /dev/null`) and for diffs whose headers never name a file;
/// consumers fall back to a placeholder label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub old_text: String,
    pub new_text: String,
}

/// Per-file accumulator for the splitter loop, reset at each
/// `diff --git` boundary.
#[derive(Default)]
struct FileState<'a> {
    file_name: Option<String>,
    old_lines: Vec<&'a str>,
    new_lines: Vec<&'a str>,
    in_hunk: bool,
}

impl FileState<'_> {
    /// Commit the accumulator as a record. Empty scaffolding (no hunk
    /// content and no file name) is dropped so that headers preceding the
    /// first real diff do not produce a phantom entry.
    fn flush_into(self, results: &mut Vec<FileDiff>) {
        if self.file_name.is_some() || !self.old_lines.is_empty() || !self.new_lines.is_empty() {
            results.push(FileDiff {
                file_name: self.file_name,
                old_text: self.old_lines.join("\n"),
                new_text: self.new_lines.join("\n"),
            });
        }
    }
}

/// Header lines between `diff --git` and the first hunk that carry no
/// body content.
const HEADER_PREFIXES: [&str; 7] = [
    "index ",
    "--- ",
    "new file mode",
    "deleted file mode",
    "similarity index",
    "rename from",
    "rename to",
];

/// Split a unified diff blob into per-file records.
///
/// Records are emitted in input order: one per `diff --git` boundary that
/// carries content, plus at most one leading record when hunks precede any
/// boundary (some tools omit the separator entirely). Malformed input
/// degrades to fewer or empty records; this function never fails. That is
/// deliberate: the input is external tool output and must not be able to
/// crash the caller.
pub fn split_unified_diff(unified_diff: &str) -> Vec<FileDiff> {
    let mut results = Vec::new();
    let mut current: Option<FileState> = None;

    for line in unified_diff.lines() {
        if line.starts_with("diff --git") {
            if let Some(state) = current.take() {
                state.flush_into(&mut results);
            }
            current = Some(FileState::default());
            continue;
        }

        // Some tools omit the `diff --git` line; lazily initialize.
        let state = current.get_or_insert_with(FileState::default);

        // `+++ ` names the new side, so renames pick up the new path.
        // `/dev/null` marks a deletion target and leaves the name unset.
        if let Some(raw) = line.strip_prefix("+++ ") {
            let name = raw.trim_start();
            let name = name.strip_prefix("b/").unwrap_or(name);
            if name != "/dev/null" {
                state.file_name = Some(name.to_string());
            }
            continue;
        }

        if HEADER_PREFIXES.iter().any(|p| line.starts_with(p)) {
            continue;
        }

        if line.starts_with("@@") {
            state.in_hunk = true;
            continue;
        }

        // Everything before the first hunk header is metadata, not body.
        if !state.in_hunk {
            continue;
        }

        if line == "\\ No newline at end of file" {
            continue;
        }

        if let Some(content) = line.strip_prefix('+') {
            state.new_lines.push(content);
        } else if let Some(content) = line.strip_prefix('-') {
            state.old_lines.push(content);
        } else if let Some(content) = line.strip_prefix(' ') {
            state.old_lines.push(content);
            state.new_lines.push(content);
        } else if line.is_empty() {
            // Context lines with empty content sometimes lose their leading
            // space in transit; they still belong to both sides.
            state.old_lines.push("");
            state.new_lines.push("");
        }
    }

    if let Some(state) = current.take() {
        state.flush_into(&mut results);
    }

    results
}
