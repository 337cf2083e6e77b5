//! Reposcribe - scribes a repository's non-ignored files into one context file

pub mod error;
pub mod ignore;
pub mod output;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ConfigError, Warning};
pub use ignore::{DEFAULT_IGNORE_PATTERNS, Pattern, PatternLoader, PatternSet, SourceTier};
pub use output::{ScanReport, WriteSummary, print_report_json, render_file_tree, write_export_file};
pub use walk::{TraversalResult, TreeWalker};
