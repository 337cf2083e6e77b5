//! Export document writer
//!
//! Concatenates the included files into one output document, each between
//! START/END markers, optionally prefixed with the file tree block.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::tree::render_file_tree;

/// Totals reported after a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub file_count: usize,
    pub content_bytes: u64,
}

/// Write the export document to `output_path`.
///
/// Files that cannot be read get an error line in place of their content
/// plus a stderr warning; the write continues. Non-UTF-8 content is
/// decoded lossily. Only failures on the output file itself are fatal.
pub fn write_export_file(
    output_path: &Path,
    project_root: &Path,
    files: &[String],
    include_tree: bool,
) -> io::Result<WriteSummary> {
    let mut out = BufWriter::new(File::create(output_path)?);
    let mut summary = WriteSummary {
        file_count: 0,
        content_bytes: 0,
    };

    if include_tree {
        out.write_all(b"--- START FILE TREE ---\n")?;
        out.write_all(render_file_tree(files).as_bytes())?;
        out.write_all(b"--- END FILE TREE ---\n\n")?;
    }

    for relative in files {
        // Relative paths are portable `/` form; rebuild a native path
        let full_path = relative
            .split('/')
            .fold(project_root.to_path_buf(), |p, seg| p.join(seg));

        eprintln!("  Scribing: {}", relative);
        writeln!(out, "--- START FILE: {} ---", relative)?;

        match fs::read(&full_path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                out.write_all(content.as_bytes())?;
                summary.file_count += 1;
                summary.content_bytes += content.len() as u64;
            }
            Err(err) => {
                writeln!(out, "Error reading file: {}", err)?;
                eprintln!("Warning: could not read file {}: {}", relative, err);
            }
        }

        write!(out, "\n--- END FILE: {} ---\n\n", relative)?;
    }

    out.flush()?;
    Ok(summary)
}
