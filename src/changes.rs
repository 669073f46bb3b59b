//! Structured change sets from agent patch tool calls.
//!
//! Codex-style patch tools report edits as a `changes` object keyed by file
//! path instead of a unified diff. Each entry already carries full file
//! bodies, so no hunk reconstruction is involved; this module projects the
//! entries onto the same [`FileDiff`] records the diff splitter produces.

use serde::Deserialize;
use tracing::warn;

use crate::diff::FileDiff;

/// One file's change in a patch tool call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchChange {
    Add {
        content: String,
    },
    Modify {
        old_content: String,
        new_content: String,
    },
    Delete {
        content: String,
    },
}

impl PatchChange {
    /// Old file body: the pre-image for modifications and deletions, empty
    /// for additions.
    pub fn old_text(&self) -> &str {
        match self {
            PatchChange::Add { .. } => "",
            PatchChange::Modify { old_content, .. } => old_content,
            PatchChange::Delete { content } => content,
        }
    }

    /// New file body: the post-image for additions and modifications,
    /// empty for deletions.
    pub fn new_text(&self) -> &str {
        match self {
            PatchChange::Add { content } => content,
            PatchChange::Modify { new_content, .. } => new_content,
            PatchChange::Delete { .. } => "",
        }
    }
}

/// Extract per-file records from the `changes` object of a patch tool
/// call payload.
///
/// Entries that do not decode as a known change shape are skipped, and a
/// payload without a `changes` object yields no records; like the diff
/// splitter, this never fails. Object keys iterate sorted by path.
pub fn parse_change_set(input: &serde_json::Value) -> Vec<FileDiff> {
    let Some(changes) = input.get("changes").and_then(|v| v.as_object()) else {
        return Vec::new();
    };

    changes
        .iter()
        .filter_map(|(path, raw)| match PatchChange::deserialize(raw) {
            Ok(change) => Some(FileDiff {
                file_name: Some(path.clone()),
                old_text: change.old_text().to_string(),
                new_text: change.new_text().to_string(),
            }),
            Err(err) => {
                warn!("skipping unrecognized change for {path}: {err}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_projects_each_change_kind() {
        let input = json!({
            "changes": {
                "src/new.rs": { "add": { "content": "fn new() {}" } },
                "src/old.rs": { "delete": { "content": "fn old() {}" } },
                "src/main.rs": {
                    "modify": { "old_content": "a\nb", "new_content": "a\nc" }
                }
            }
        });

        let diffs = parse_change_set(&input);
        assert_eq!(diffs.len(), 3);

        let by_name = |name: &str| {
            diffs
                .iter()
                .find(|d| d.file_name.as_deref() == Some(name))
                .unwrap()
        };

        let added = by_name("src/new.rs");
        assert_eq!(added.old_text, "");
        assert_eq!(added.new_text, "fn new() {}");

        let deleted = by_name("src/old.rs");
        assert_eq!(deleted.old_text, "fn old() {}");
        assert_eq!(deleted.new_text, "");

        let modified = by_name("src/main.rs");
        assert_eq!(modified.old_text, "a\nb");
        assert_eq!(modified.new_text, "a\nc");
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let input = json!({
            "changes": {
                "ok.rs": { "add": { "content": "x" } },
                "bad.rs": { "replace": { "content": "x" } },
                "worse.rs": 42
            }
        });

        let diffs = parse_change_set(&input);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].file_name.as_deref(), Some("ok.rs"));
    }

    #[test]
    fn test_missing_changes_object_yields_nothing() {
        assert!(parse_change_set(&json!({})).is_empty());
        assert!(parse_change_set(&json!({ "changes": [1, 2] })).is_empty());
        assert!(parse_change_set(&json!(null)).is_empty());
    }
}
