//! JSON output formatting.

use anyhow::Result;
use moodletree_core::FileTree;
use serde::Serialize;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for a full run.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeOutput<'a> {
    pub course_count: usize,
    pub file_count: usize,
    pub courses: &'a FileTree,
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats the file tree with a summary header.
    pub fn format_tree(&self, tree: &FileTree) -> Result<String> {
        let output = TreeOutput {
            course_count: tree.len(),
            file_count: tree.iter().map(|c| c.file_count()).sum(),
            courses: tree,
        };
        self.format(&output)
    }

    /// Formats an error for scripting.
    pub fn format_error(&self, kind: &str, message: &str) -> Result<String> {
        self.format(&serde_json::json!({"error": {"kind": kind, "message": message}}))
    }
}
