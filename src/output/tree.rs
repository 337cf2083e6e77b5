//! File tree rendering for the export header

use std::collections::BTreeMap;

/// Nested directory structure built from relative file paths.
/// `None` marks a file; `Some` holds a subdirectory's children.
#[derive(Debug, Default)]
struct TreeLevel(BTreeMap<String, Option<TreeLevel>>);

impl TreeLevel {
    fn insert(&mut self, path: &str) {
        let mut level = self;
        let mut parts = path.split('/').peekable();
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                level.0.entry(part.to_string()).or_insert(None);
            } else {
                let child = level
                    .0
                    .entry(part.to_string())
                    .or_insert_with(|| Some(TreeLevel::default()));
                // A file/directory name collision cannot come out of one
                // walk, but don't lose the subtree if it does.
                if child.is_none() {
                    *child = Some(TreeLevel::default());
                }
                level = child.as_mut().expect("just ensured a directory level");
            }
        }
    }
}

/// Render a tree view of the included relative paths, in the format the
/// export file embeds between the FILE TREE markers.
pub fn render_file_tree(files: &[String]) -> String {
    if files.is_empty() {
        return "(No files found to include in tree)\n".to_string();
    }

    let mut root = TreeLevel::default();
    for path in files {
        root.insert(path);
    }

    let mut lines = vec!["Exported File Structure:".to_string(), ".".to_string()];
    format_level(&root, "", &mut lines);
    lines.join("\n") + "\n"
}

fn format_level(level: &TreeLevel, indent: &str, lines: &mut Vec<String>) {
    let count = level.0.len();
    for (i, (name, child)) in level.0.iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{}{}{}", indent, connector, name));

        if let Some(subtree) = child {
            let next_indent = format!("{}{}", indent, if is_last { "    " } else { "│   " });
            format_level(subtree, &next_indent, lines);
        }
    }
}
