//! Typed payloads returned by the Moodle web service.
//!
//! These shapes are deliberately tolerant: optional fields default instead of
//! failing, so a course with an unusual module does not reject the whole
//! response. Normalization happens in [`crate::fold`].

use serde::{Deserialize, Serialize};

/// Module kind that can map to a file node.
pub const RESOURCE_MODNAME: &str = "resource";

/// Content kind that can map to a file node.
pub const FILE_CONTENT_TYPE: &str = "file";

// ============================================================================
// Course
// ============================================================================

/// A course the user is enrolled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course id.
    pub id: u64,

    /// Full course name.
    pub fullname: String,

    /// Short course name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortname: Option<String>,
}

impl Course {
    /// Creates a course with the given id and full name.
    pub fn new(id: u64, fullname: impl Into<String>) -> Self {
        Self {
            id,
            fullname: fullname.into(),
            shortname: None,
        }
    }
}

// ============================================================================
// Course Contents
// ============================================================================

/// Ordered sections of one course, as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseContents(pub Vec<RawSection>);

impl CourseContents {
    /// Returns the raw sections in service order.
    pub fn sections(&self) -> &[RawSection] {
        &self.0
    }
}

/// A course section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSection {
    /// Section id.
    pub id: u64,

    /// Section name.
    #[serde(default)]
    pub name: String,

    /// Modules in this section. Absent for some section kinds.
    #[serde(default)]
    pub modules: Option<Vec<RawModule>>,
}

/// A course module (resource, forum, page, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawModule {
    /// Module id.
    pub id: u64,

    /// Module display name.
    #[serde(default)]
    pub name: String,

    /// Module kind.
    #[serde(default)]
    pub modname: String,

    /// Content entries. Only some module kinds carry them.
    #[serde(default)]
    pub contents: Option<Vec<RawContent>>,
}

impl RawModule {
    /// Returns true if this module is a resource.
    pub fn is_resource(&self) -> bool {
        self.modname == RESOURCE_MODNAME
    }

    /// Returns the first content entry, if any.
    pub fn first_content(&self) -> Option<&RawContent> {
        self.contents.as_deref().and_then(|c| c.first())
    }
}

/// A content entry of a module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContent {
    /// Content kind (`file`, `url`, `content`, ...). Empty when absent.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// File name.
    #[serde(default)]
    pub filename: Option<String>,

    /// Download URL.
    #[serde(default)]
    pub fileurl: Option<String>,

    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesize: Option<u64>,

    /// Last modification time (unix seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timemodified: Option<i64>,
}

impl RawContent {
    /// Returns true if this entry is a file.
    pub fn is_file(&self) -> bool {
        self.kind == FILE_CONTENT_TYPE
    }
}
