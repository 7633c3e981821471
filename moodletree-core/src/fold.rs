//! Folding of raw course contents into the normalized file tree.
//!
//! Rules:
//! - A module becomes a [`FileNode`] only if it is a `resource` whose first
//!   content entry is a `file`. Name and URL are copied as sent, even when
//!   absent.
//! - A section is kept only if it produced at least one file.
//! - A course is kept only if it kept at least one section.
//! - Section `order` is the index in the raw list, assigned before pruning.

use crate::models::{
    Course, CourseContents, CourseNode, FileNode, FileTree, RawModule, RawSection, SectionNode,
};

/// Projects a module into a file node, or `None` if it is not a file resource.
pub fn project_module(module: &RawModule) -> Option<FileNode> {
    if !module.is_resource() {
        return None;
    }

    let content = module.first_content().filter(|c| c.is_file())?;

    Some(FileNode {
        id: module.id,
        name: module.name.clone(),
        filename: content.filename.clone(),
        fileurl: content.fileurl.clone(),
    })
}

/// Folds one raw section at position `order`, or `None` if it has no files.
pub fn fold_section(order: usize, section: &RawSection) -> Option<SectionNode> {
    let children: Vec<FileNode> = section
        .modules
        .iter()
        .flatten()
        .filter_map(project_module)
        .collect();

    if children.is_empty() {
        return None;
    }

    Some(SectionNode {
        id: section.id,
        order,
        name: section.name.clone(),
        children,
    })
}

/// Folds a course and its contents, or `None` if no section survives.
pub fn fold_course(course: &Course, contents: &CourseContents) -> Option<CourseNode> {
    let children: Vec<SectionNode> = contents
        .sections()
        .iter()
        .enumerate()
        .filter_map(|(order, section)| fold_section(order, section))
        .collect();

    if children.is_empty() {
        return None;
    }

    Some(CourseNode {
        id: course.id,
        name: course.fullname.clone(),
        children,
    })
}

/// Folds courses paired with their contents, keeping input order.
pub fn fold_tree<'a, I>(courses: I) -> FileTree
where
    I: IntoIterator<Item = (&'a Course, &'a CourseContents)>,
{
    courses
        .into_iter()
        .filter_map(|(course, contents)| fold_course(course, contents))
        .collect()
}
