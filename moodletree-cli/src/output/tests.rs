//! CLI output formatting tests.
//!
//! These tests verify that the file tree is correctly formatted for both
//! text and JSON output modes.

use moodletree_core::{CourseNode, FileNode, FileTree, SectionNode};

fn sample_tree() -> FileTree {
    vec![CourseNode {
        id: 1,
        name: "Math".to_string(),
        children: vec![
            SectionNode {
                id: 10,
                order: 0,
                name: "Week1".to_string(),
                children: vec![
                    FileNode {
                        id: 100,
                        name: "Slides".to_string(),
                        filename: Some("a.pdf".to_string()),
                        fileurl: Some("http://x/a.pdf".to_string()),
                    },
                    FileNode {
                        id: 101,
                        name: "b.pdf".to_string(),
                        filename: Some("b.pdf".to_string()),
                        fileurl: Some("http://x/b.pdf".to_string()),
                    },
                ],
            },
            SectionNode {
                id: 12,
                order: 2,
                name: String::new(),
                children: vec![FileNode {
                    id: 102,
                    name: "Notes".to_string(),
                    filename: Some("notes.txt".to_string()),
                    fileurl: Some("http://x/notes.txt".to_string()),
                }],
            },
        ],
    }]
}

mod text_formatter_tests {
    use super::super::text::TextFormatter;
    use super::sample_tree;

    #[test]
    fn test_plain_tree_layout() {
        let formatter = TextFormatter::new(false);
        let output = formatter.format_tree(&sample_tree());

        let expected = "\
Math [1]
├── Week1 #0
│   ├── Slides (a.pdf)
│   └── b.pdf
└── Section 2 #2
    └── Notes (notes.txt)

1 course, 3 files";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_urls_shown_when_requested() {
        let formatter = TextFormatter::new(false).with_urls(true);
        let output = formatter.format_tree(&sample_tree());

        assert!(output.contains("│   │   http://x/a.pdf"));
        assert!(output.contains("        http://x/notes.txt"));
    }

    #[test]
    fn test_file_without_name_or_url() {
        let mut tree = sample_tree();
        let file = &mut tree[0].children[1].children[0];
        file.filename = None;
        file.fileurl = None;

        let output = TextFormatter::new(false).with_urls(true).format_tree(&tree);
        assert!(output.contains("    └── Notes\n"));
        assert!(!output.contains("notes.txt"));
    }

    #[test]
    fn test_empty_tree() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.format_tree(&Vec::new()), "No downloadable files found.");
    }

    #[test]
    fn test_colors_only_when_enabled() {
        let plain = TextFormatter::new(false).format_tree(&sample_tree());
        assert!(!plain.contains("\x1b["));

        let colored = TextFormatter::new(true).format_tree(&sample_tree());
        assert!(colored.contains("\x1b[1mMath\x1b[0m"));
    }

    #[test]
    fn test_error_format() {
        let formatter = TextFormatter::new(false);
        assert_eq!(
            formatter.format_error("Service error: invalid login"),
            "Error: Service error: invalid login"
        );
    }
}

mod json_formatter_tests {
    use super::super::json::JsonFormatter;
    use super::sample_tree;
    use serde_json::{json, Value};

    #[test]
    fn test_tree_summary_fields() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_tree(&sample_tree()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["courseCount"], json!(1));
        assert_eq!(value["fileCount"], json!(3));
        assert_eq!(value["courses"][0]["children"][1]["order"], json!(2));
        assert_eq!(
            value["courses"][0]["children"][0]["children"][0],
            json!({"id": 100, "name": "Slides", "filename": "a.pdf", "fileurl": "http://x/a.pdf"})
        );
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let compact = JsonFormatter::new(false).format_tree(&sample_tree()).unwrap();
        let pretty = JsonFormatter::new(true).format_tree(&sample_tree()).unwrap();

        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_error_output() {
        let output = JsonFormatter::new(false)
            .format_error("service", "invalid login")
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["error"]["kind"], json!("service"));
        assert_eq!(value["error"]["message"], json!("invalid login"));
    }
}
