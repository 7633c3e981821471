//! The normalized file tree.
//!
//! Three levels: [`CourseNode`] → [`SectionNode`] → [`FileNode`]. A tree
//! produced by [`crate::fold`] never contains a course or section without at
//! least one file below it.

use serde::{Deserialize, Serialize};

/// The list of retained courses, in enrolment order.
pub type FileTree = Vec<CourseNode>;

// ============================================================================
// Course Node
// ============================================================================

/// A course with at least one non-empty section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseNode {
    /// Course id.
    pub id: u64,
    /// Course full name.
    pub name: String,
    /// Retained sections, in service order.
    pub children: Vec<SectionNode>,
}

impl CourseNode {
    /// Returns the number of files in this course.
    pub fn file_count(&self) -> usize {
        self.children.iter().map(|s| s.children.len()).sum()
    }

    /// Iterates over every file in this course, section by section.
    pub fn files(&self) -> impl Iterator<Item = &FileNode> {
        self.children.iter().flat_map(|s| s.children.iter())
    }
}

// ============================================================================
// Section Node
// ============================================================================

/// A section with at least one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionNode {
    /// Section id.
    pub id: u64,
    /// Zero-based position in the raw section list, before pruning.
    pub order: usize,
    /// Section name.
    pub name: String,
    /// Files, in module order.
    pub children: Vec<FileNode>,
}

// ============================================================================
// File Node
// ============================================================================

/// A downloadable file. `id` is the module id, not the content id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// Module id.
    pub id: u64,
    /// Module display name.
    pub name: String,
    /// File name from the first content entry, as sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Download URL from the first content entry, as sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fileurl: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: u64) -> FileNode {
        FileNode {
            id,
            name: format!("File {id}"),
            filename: Some(format!("{id}.pdf")),
            fileurl: Some(format!("http://x/{id}.pdf")),
        }
    }

    #[test]
    fn test_file_count_spans_sections() {
        let course = CourseNode {
            id: 1,
            name: "Math".to_string(),
            children: vec![
                SectionNode {
                    id: 10,
                    order: 0,
                    name: "Week1".to_string(),
                    children: vec![file(100), file(101)],
                },
                SectionNode {
                    id: 11,
                    order: 2,
                    name: "Week3".to_string(),
                    children: vec![file(102)],
                },
            ],
        };

        assert_eq!(course.file_count(), 3);
        let ids: Vec<u64> = course.files().map(|f| f.id).collect();
        assert_eq!(ids, vec![100, 101, 102]);
    }
}
