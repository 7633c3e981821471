//! Domain models for `moodletree`.
//!
//! ## Submodules
//!
//! - [`session`] - Credentials, token, and user identity
//! - [`course`] - Typed payloads returned by the Moodle web service
//! - [`tree`] - The normalized course → section → file tree

mod course;
mod session;
mod tree;

// Re-export everything at the models level
pub use course::{Course, CourseContents, RawContent, RawModule, RawSection};
pub use session::{Credentials, SiteInfo, Token, UserId};
pub use tree::{CourseNode, FileNode, FileTree, SectionNode};
