//! Export output
//!
//! - `tree` - the file tree block embedded at the top of the export
//! - `writer` - concatenation of file contents between START/END markers
//! - `json` - machine-readable listing for `--list --json`

mod json;
mod tree;
mod writer;

pub use json::{ScanReport, print_report_json};
pub use tree::render_file_tree;
pub use writer::{WriteSummary, write_export_file};
