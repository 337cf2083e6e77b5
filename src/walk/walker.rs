//! Directory traversal with pattern-driven pruning

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Warning};
use crate::ignore::PatternSet;

use super::classify;

/// Inclusion decision for one visited entry.
///
/// A directory entering `Pruned` is never descended into: exclusion of a
/// directory short-circuits its entire subtree, so later re-include rules
/// cannot resurrect anything beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Included,
    Excluded,
    Pruned,
}

/// One filesystem node under consideration during the walk.
#[derive(Debug)]
struct DirectoryEntry {
    path: PathBuf,
    relative: String,
    is_dir: bool,
}

/// Outcome of a completed walk: the ordered list of included files, the
/// included directories (for tree rendering), and any non-fatal warnings.
///
/// File order is deterministic: depth-first, entries at each level in
/// lexicographic name order, directories and files interleaved.
#[derive(Debug, Default)]
pub struct TraversalResult {
    pub files: Vec<String>,
    pub directories: Vec<String>,
    pub warnings: Vec<Warning>,
}

/// Walks a project directory, consulting a [`PatternSet`] at every entry
/// to decide inclusion and pruning.
pub struct TreeWalker<'a> {
    patterns: &'a PatternSet,
}

impl<'a> TreeWalker<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Traverse `project_root` and collect the included paths.
    ///
    /// Fails only when the root itself is missing or not a directory;
    /// unreadable entries below the root become [`Warning::Access`]
    /// entries and the walk continues.
    pub fn walk(&self, project_root: &Path) -> Result<TraversalResult, ConfigError> {
        match classify::is_directory(project_root) {
            Err(_) => return Err(ConfigError::RootMissing(project_root.to_path_buf())),
            Ok(false) => return Err(ConfigError::RootNotDirectory(project_root.to_path_buf())),
            Ok(true) => {}
        }

        let mut result = TraversalResult::default();
        self.walk_dir(project_root, "", &mut result);
        Ok(result)
    }

    fn decide(&self, entry: &DirectoryEntry) -> Decision {
        if self.patterns.matches(&entry.relative, entry.is_dir) {
            if entry.is_dir {
                Decision::Pruned
            } else {
                Decision::Excluded
            }
        } else {
            Decision::Included
        }
    }

    fn walk_dir(&self, dir: &Path, relative: &str, result: &mut TraversalResult) {
        let reader = match fs::read_dir(dir) {
            Ok(reader) => reader,
            Err(err) => {
                result.warnings.push(Warning::access(dir, &err));
                return;
            }
        };

        let mut children = Vec::new();
        for entry in reader {
            match entry {
                Ok(entry) => children.push(entry),
                Err(err) => result.warnings.push(Warning::access(dir, &err)),
            }
        }
        children.sort_by_key(|entry| entry.file_name());

        for child in children {
            let path = child.path();

            let file_type = match child.file_type() {
                Ok(file_type) => file_type,
                Err(err) => {
                    result.warnings.push(Warning::access(&path, &err));
                    continue;
                }
            };

            let is_dir = if file_type.is_symlink() {
                match fs::metadata(&path) {
                    // Never descend through symlinks: a link to a
                    // directory could loop back into the tree.
                    Ok(meta) if meta.is_dir() => continue,
                    Ok(_) => false,
                    Err(err) => {
                        result.warnings.push(Warning::access(&path, &err));
                        continue;
                    }
                }
            } else {
                file_type.is_dir()
            };

            let name = child.file_name().to_string_lossy().into_owned();
            let entry = DirectoryEntry {
                path,
                relative: classify::join_relative(relative, &name),
                is_dir,
            };

            match self.decide(&entry) {
                Decision::Pruned | Decision::Excluded => {}
                Decision::Included => {
                    if entry.is_dir {
                        result.directories.push(entry.relative.clone());
                        self.walk_dir(&entry.path, &entry.relative, result);
                    } else {
                        result.files.push(entry.relative);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ignore::{PatternLoader, PatternSet, SourceTier};
    use crate::test_utils::TestProject;

    fn walk_with_patterns(project: &TestProject, lines: &[&str]) -> TraversalResult {
        let mut set = PatternSet::new();
        set.add_lines(lines.iter().copied(), SourceTier::User);
        TreeWalker::new(&set)
            .walk(project.path())
            .expect("walk should succeed")
    }

    #[test]
    fn test_missing_root_is_a_config_error() {
        let set = PatternSet::new();
        let err = TreeWalker::new(&set)
            .walk(Path::new("/no/such/directory"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::RootMissing(_)));
    }

    #[test]
    fn test_file_root_is_a_config_error() {
        let project = TestProject::new();
        let file = project.add_file("plain.txt", "x");

        let set = PatternSet::new();
        let err = TreeWalker::new(&set).walk(&file).unwrap_err();
        assert!(matches!(err, ConfigError::RootNotDirectory(_)));
    }

    #[test]
    fn test_order_is_lexicographic_depth_first() {
        let project = TestProject::new();
        project.add_file("b.txt", "b");
        project.add_file("a.txt", "a");
        project.add_file("sub/c.txt", "c");

        let result = walk_with_patterns(&project, &[]);
        assert_eq!(result.files, ["a.txt", "b.txt", "sub/c.txt"]);
        assert_eq!(result.directories, ["sub"]);
    }

    #[test]
    fn test_directories_interleave_with_files() {
        let project = TestProject::new();
        project.add_file("z.txt", "z");
        project.add_file("mid/inner.txt", "i");
        project.add_file("a.txt", "a");

        let result = walk_with_patterns(&project, &[]);
        // `mid` sorts between `a.txt` and `z.txt`; its contents come
        // before `z.txt` because the walk is depth-first.
        assert_eq!(result.files, ["a.txt", "mid/inner.txt", "z.txt"]);
    }

    #[test]
    fn test_excluded_file_is_omitted() {
        let project = TestProject::new();
        project.add_file("keep.txt", "k");
        project.add_file("drop.log", "d");

        let result = walk_with_patterns(&project, &["*.log"]);
        assert_eq!(result.files, ["keep.txt"]);
    }

    #[test]
    fn test_excluded_directory_is_pruned() {
        let project = TestProject::new();
        project.add_file("src/main.rs", "fn main() {}");
        project.add_file("node_modules/pkg/index.js", "module.exports = {}");

        let result = walk_with_patterns(&project, &["node_modules/"]);
        assert_eq!(result.files, ["src/main.rs"]);
        // The pruned directory never shows up as visited
        assert_eq!(result.directories, ["src"]);
    }

    #[test]
    fn test_negation_cannot_resurrect_under_pruned_directory() {
        let project = TestProject::new();
        project.add_file("a/b.txt", "b");
        project.add_file("top.txt", "t");

        let result = walk_with_patterns(&project, &["a/", "!a/b.txt"]);
        assert_eq!(result.files, ["top.txt"]);
    }

    #[test]
    fn test_negation_re_includes_a_file() {
        let project = TestProject::new();
        project.add_file("a.log", "a");
        project.add_file("keep.log", "k");
        project.add_file("notes.txt", "n");

        let result = walk_with_patterns(&project, &["*.log", "!keep.log"]);
        assert_eq!(result.files, ["keep.log", "notes.txt"]);
    }

    #[test]
    fn test_double_star_prunes_at_any_depth() {
        let project = TestProject::new();
        project.add_file("node_modules/x.js", "x");
        project.add_file("src/lib/node_modules/y.js", "y");
        project.add_file("src/lib/real.js", "r");

        let result = walk_with_patterns(&project, &["**/node_modules"]);
        assert_eq!(result.files, ["src/lib/real.js"]);
    }

    #[test]
    fn test_trailing_slash_spares_same_named_file() {
        let project = TestProject::new();
        project.add_file("build", "a script, not a directory");
        project.add_file("sub/build/out.o", "o");

        let result = walk_with_patterns(&project, &["build/"]);
        assert_eq!(result.files, ["build"]);
    }

    #[test]
    fn test_dir_contents_excluded_but_dir_visited() {
        let project = TestProject::new();
        project.add_file("cache/blob.bin", "b");
        project.add_file("readme.txt", "r");

        let result = walk_with_patterns(&project, &["cache/**"]);
        assert_eq!(result.files, ["readme.txt"]);
        // `cache` itself is not matched by `cache/**`, so it is visited
        assert_eq!(result.directories, ["cache"]);
    }

    #[test]
    fn test_default_rules_via_loader() {
        let project = TestProject::new();
        project.add_file("src/main.py", "print('hi')");
        project.add_file("node_modules/pkg/index.js", "x");
        project.add_file("debug.log", "log");
        project.add_dir(".git");
        project.add_file(".git/HEAD", "ref: refs/heads/main");

        let (set, _) = PatternLoader::new().load(project.path(), None);
        let result = TreeWalker::new(&set).walk(project.path()).unwrap();
        assert_eq!(result.files, ["src/main.py"]);
    }

    #[test]
    fn test_walk_is_deterministic() {
        let project = TestProject::new();
        project.add_file("b/x.txt", "x");
        project.add_file("a.txt", "a");
        project.add_file("c.txt", "c");

        let first = walk_with_patterns(&project, &[]);
        let second = walk_with_patterns(&project, &[]);
        assert_eq!(first.files, second.files);
        assert_eq!(first.directories, second.directories);
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_symlink_is_not_descended() {
        use std::os::unix::fs::symlink;

        let project = TestProject::new();
        project.add_file("real/file.txt", "f");
        symlink(project.path().join("real"), project.path().join("link")).unwrap();

        let result = walk_with_patterns(&project, &[]);
        assert_eq!(result.files, ["real/file.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_warns_and_continues() {
        use std::os::unix::fs::symlink;

        let project = TestProject::new();
        project.add_file("ok.txt", "ok");
        symlink("missing-target", project.path().join("broken")).unwrap();

        let result = walk_with_patterns(&project, &[]);
        assert_eq!(result.files, ["ok.txt"]);
        assert_eq!(result.warnings.len(), 1);
        assert!(matches!(result.warnings[0], Warning::Access { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_warns_and_continues() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let project = TestProject::new();
        project.add_file("readable/ok.txt", "ok");
        project.add_file("locked/secret.txt", "s");

        let locked = project.path().join("locked");
        let mut perms = fs::metadata(&locked).unwrap().permissions();
        perms.set_mode(0o000);
        fs::set_permissions(&locked, perms).unwrap();

        if fs::read_dir(&locked).is_ok() {
            // Running as root; permission bits are not enforced
            let mut perms = fs::metadata(&locked).unwrap().permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&locked, perms).unwrap();
            return;
        }

        let result = walk_with_patterns(&project, &[]);

        let mut perms = fs::metadata(&locked).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&locked, perms).unwrap();

        assert_eq!(result.files, ["readable/ok.txt"]);
        assert!(
            result
                .warnings
                .iter()
                .any(|w| matches!(w, Warning::Access { .. })),
            "expected an access warning, got {:?}",
            result.warnings
        );
    }
}
