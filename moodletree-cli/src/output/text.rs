//! Text output formatting with tree guides and colors.

use moodletree_core::{CourseNode, FileNode, FileTree, SectionNode};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

// Tree guides
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
    show_urls: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self {
            use_colors,
            show_urls: false,
        }
    }

    /// Also print download URLs under each file.
    pub fn with_urls(mut self, show_urls: bool) -> Self {
        self.show_urls = show_urls;
        self
    }

    /// Formats the whole tree.
    pub fn format_tree(&self, tree: &FileTree) -> String {
        if tree.is_empty() {
            return self.dim("No downloadable files found.");
        }

        let mut lines = Vec::new();
        for course in tree {
            self.push_course(&mut lines, course);
        }

        let files: usize = tree.iter().map(CourseNode::file_count).sum();
        lines.push(String::new());
        lines.push(self.dim(&format!(
            "{} {}, {} {}",
            tree.len(),
            plural(tree.len(), "course", "courses"),
            files,
            plural(files, "file", "files")
        )));

        lines.join("\n")
    }

    /// Formats an error message.
    pub fn format_error(&self, message: &str) -> String {
        format!("{}: {}", self.red("Error"), message)
    }

    fn push_course(&self, lines: &mut Vec<String>, course: &CourseNode) {
        lines.push(format!(
            "{} {}",
            self.bold(&course.name),
            self.dim(&format!("[{}]", course.id))
        ));

        let count = course.children.len();
        for (i, section) in course.children.iter().enumerate() {
            self.push_section(lines, section, i + 1 == count);
        }
    }

    fn push_section(&self, lines: &mut Vec<String>, section: &SectionNode, last: bool) {
        let (guide, indent) = if last { (LAST_BRANCH, SPACE) } else { (BRANCH, PIPE) };
        lines.push(format!(
            "{guide}{} {}",
            self.cyan(&section_label(section)),
            self.dim(&format!("#{}", section.order))
        ));

        let count = section.children.len();
        for (i, file) in section.children.iter().enumerate() {
            self.push_file(lines, file, indent, i + 1 == count);
        }
    }

    fn push_file(&self, lines: &mut Vec<String>, file: &FileNode, indent: &str, last: bool) {
        let (guide, child_indent) = if last { (LAST_BRANCH, SPACE) } else { (BRANCH, PIPE) };
        let label = match file.filename.as_deref() {
            Some(filename) if filename != file.name => {
                format!("{} {}", file.name, self.dim(&format!("({filename})")))
            }
            _ => file.name.clone(),
        };
        lines.push(format!("{indent}{guide}{label}"));

        if let Some(url) = file.fileurl.as_deref().filter(|_| self.show_urls) {
            lines.push(format!("{indent}{child_indent}{}", self.dim(url)));
        }
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            format!("{BOLD}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn red(&self, text: &str) -> String {
        if self.use_colors {
            format!("{RED}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn cyan(&self, text: &str) -> String {
        if self.use_colors {
            format!("{CYAN}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Section names can be blank for the unnamed first section.
fn section_label(section: &SectionNode) -> String {
    if section.name.trim().is_empty() {
        format!("Section {}", section.order)
    } else {
        section.name.clone()
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
