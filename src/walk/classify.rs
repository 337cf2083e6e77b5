//! Path normalization helpers
//!
//! Patterns are matched against forward-slash relative paths, so every
//! filesystem path is converted to that portable form before it reaches
//! the pattern engine.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Compute `path` relative to `root` as a forward-slash string with no
/// leading separator. Returns `None` when `path` is not under `root`.
/// Both paths are compared lexically; callers pass absolute paths.
pub fn relativize(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut out = String::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => {
                if !out.is_empty() {
                    out.push('/');
                }
                out.push_str(&part.to_string_lossy());
            }
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(out)
}

/// Extend a relative path with one more segment. The root itself is the
/// empty string.
pub fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Make a path absolute against the current directory and resolve `.` and
/// `..` components lexically. Unlike canonicalization this works for paths
/// that do not exist yet (e.g. the output file).
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::ParentDir => {
                out.pop();
            }
            Component::CurDir => {}
            other => out.push(other),
        }
    }
    out
}

/// Whether `path` names a directory, via a filesystem stat.
pub fn is_directory(path: &Path) -> io::Result<bool> {
    Ok(std::fs::metadata(path)?.is_dir())
}
