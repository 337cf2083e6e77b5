//! Ignore-pattern parsing, loading, and evaluation
//!
//! Implements the gitignore-style pattern grammar (wildcards, negation,
//! anchoring, directory-only rules) over three precedence tiers: built-in
//! defaults, the project's root ignore file, and implicit always-exclude
//! rules. Later tiers override earlier ones; within a tier, later lines
//! win.

mod defaults;
mod loader;
mod pattern;
mod set;

pub use defaults::DEFAULT_IGNORE_PATTERNS;
pub use loader::{IGNORE_FILE_NAME, PatternLoader};
pub use pattern::{Pattern, SourceTier};
pub use set::PatternSet;
