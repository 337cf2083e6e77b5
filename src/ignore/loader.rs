//! Assembly of the pattern set from its sources

use std::fs;
use std::path::Path;

use crate::error::Warning;
use crate::walk::classify;

use super::defaults::DEFAULT_IGNORE_PATTERNS;
use super::pattern::SourceTier;
use super::set::PatternSet;

/// Name of the project-root ignore file.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Builds a [`PatternSet`] from the three pattern sources, in ascending
/// priority: built-in defaults, the project's root ignore file (plus any
/// extra user patterns), and the implicit always-exclude rules.
///
/// The defaults are a plain slice so tests can substitute alternates.
#[derive(Debug)]
pub struct PatternLoader<'a> {
    defaults: &'a [&'a str],
    extra_user_patterns: Vec<String>,
}

impl Default for PatternLoader<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternLoader<'static> {
    pub fn new() -> Self {
        Self::with_defaults(DEFAULT_IGNORE_PATTERNS)
    }
}

impl<'a> PatternLoader<'a> {
    pub fn with_defaults(defaults: &'a [&'a str]) -> Self {
        Self {
            defaults,
            extra_user_patterns: Vec::new(),
        }
    }

    /// Append user-supplied patterns evaluated after the ignore file's
    /// lines, at the same tier.
    pub fn user_patterns(mut self, patterns: impl IntoIterator<Item = String>) -> Self {
        self.extra_user_patterns.extend(patterns);
        self
    }

    /// Assemble the pattern set for `project_root`. A missing ignore file
    /// is an empty source; an unreadable one degrades to a warning. When
    /// `output_file` resolves inside the project root, its relative path
    /// is appended as an implicit exclude so a run never scribes its own
    /// output.
    pub fn load(
        &self,
        project_root: &Path,
        output_file: Option<&Path>,
    ) -> (PatternSet, Vec<Warning>) {
        let mut set = PatternSet::new();
        let mut warnings = Vec::new();

        for line in self.defaults {
            add_checked(&mut set, line, SourceTier::Defaults, &mut warnings);
        }

        let ignore_path = project_root.join(IGNORE_FILE_NAME);
        if ignore_path.exists() {
            match fs::read_to_string(&ignore_path) {
                Ok(contents) => {
                    for line in contents.lines() {
                        add_checked(&mut set, line, SourceTier::User, &mut warnings);
                    }
                }
                Err(err) => warnings.push(Warning::access(&ignore_path, &err)),
            }
        }
        for line in &self.extra_user_patterns {
            add_checked(&mut set, line, SourceTier::User, &mut warnings);
        }

        set.add_line(".git/", SourceTier::Implicit);
        if let Some(output) = output_file {
            if let Some(rel) = classify::relativize(output, project_root) {
                if !rel.is_empty() {
                    set.add_line(&rel, SourceTier::Implicit);
                }
            }
        }

        (set, warnings)
    }
}

fn add_checked(set: &mut PatternSet, line: &str, tier: SourceTier, warnings: &mut Vec<Warning>) {
    if let Some(pattern) = set.add_line(line, tier) {
        if pattern.is_degraded() {
            warnings.push(Warning::parse(
                pattern.raw(),
                "malformed glob syntax",
            ));
        }
    }
}
