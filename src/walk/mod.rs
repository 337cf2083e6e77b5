//! Directory traversal
//!
//! The walker descends the project tree depth-first, asking the pattern
//! set about every entry before touching it. An excluded directory is
//! pruned: its whole subtree is skipped without being listed, which is
//! what keeps large dependency directories cheap.

pub mod classify;
mod walker;

pub use walker::{TraversalResult, TreeWalker};
