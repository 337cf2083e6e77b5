//! Ordered pattern evaluation with last-match-wins semantics

use super::pattern::{Pattern, SourceTier};

/// An ordered collection of ignore patterns.
///
/// Patterns are kept in ascending tier order, insertion order within a
/// tier. Evaluation walks the whole list and lets the last structural
/// match decide, so higher tiers (and later lines within a tier) override
/// earlier ones. Evaluating the same path twice always yields the same
/// verdict: the set is read-only once built.
#[derive(Debug, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and add one pattern line. Returns the parsed pattern, or
    /// `None` when the line is blank or a comment.
    pub fn add_line(&mut self, line: &str, tier: SourceTier) -> Option<&Pattern> {
        let pattern = Pattern::parse(line, tier)?;
        // Keep evaluation order correct even when tiers arrive interleaved.
        let at = self
            .patterns
            .iter()
            .position(|existing| existing.tier() > tier)
            .unwrap_or(self.patterns.len());
        self.patterns.insert(at, pattern);
        self.patterns.get(at)
    }

    /// Add several lines at one tier, in order.
    pub fn add_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>, tier: SourceTier) {
        for line in lines {
            self.add_line(line, tier);
        }
    }

    /// Whether `relative_path` should be excluded. The path is relative to
    /// the traversal root, forward-slash separated, with no leading slash.
    ///
    /// The default verdict with no matching pattern is "included".
    pub fn matches(&self, relative_path: &str, is_dir: bool) -> bool {
        let mut excluded = false;
        for pattern in &self.patterns {
            if pattern.matches_path(relative_path, is_dir) {
                excluded = !pattern.is_negated();
            }
        }
        excluded
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The patterns in evaluation order.
    pub fn patterns(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }
}
