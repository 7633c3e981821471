// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `moodletree` Core
//!
//! Core types, models, and the tree folding logic for `moodletree`.
//!
//! This crate has no I/O. It provides:
//!
//! - Session types (credentials, token, user identity)
//! - Typed payloads returned by the Moodle web service
//! - The normalized course → section → file tree
//! - Pure folding of raw course contents into that tree
//!
//! ## Key Types
//!
//! ### Session
//! - [`Credentials`] - Username and password, supplied once per run
//! - [`Token`] - Opaque access token issued by the service
//! - [`UserId`] / [`SiteInfo`] - Identity of the authenticated user
//!
//! ### Service Payloads
//! - [`Course`] - An enrolled course
//! - [`CourseContents`] - Raw, ordered sections of a course
//! - [`RawSection`] / [`RawModule`] / [`RawContent`] - Un-normalized shapes
//!
//! ### File Tree
//! - [`CourseNode`] / [`SectionNode`] / [`FileNode`] - The pruned tree
//! - [`FileTree`] - The list of retained courses
//!
//! ### Folding
//! - [`fold::fold_course`] - Builds one course node from raw contents

pub mod fold;
pub mod models;

// Re-export all model types
pub use models::{
    // Session types
    Credentials,
    SiteInfo,
    Token,
    UserId,
    // Service payloads
    Course,
    CourseContents,
    RawContent,
    RawModule,
    RawSection,
    // File tree
    CourseNode,
    FileNode,
    FileTree,
    SectionNode,
};

// Re-export folding entry points
pub use fold::{fold_course, fold_section, fold_tree, project_module};
