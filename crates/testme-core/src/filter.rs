use std::path::{Component, Path, PathBuf};

/// Directory names that mark a path as a test
const TEST_COMPONENTS: [&str; 2] = ["test", "tests"];

/// A changed file that looks like a test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCandidate {
    /// Path as reported by git; used for display
    pub relative: String,
    /// `relative` resolved against the working directory; handed to the runner
    pub absolute: PathBuf,
}

/// Resolve a changed path against the working directory.
///
/// Purely lexical: symlinks are not followed and `..` is left in place.
pub fn resolve(relative: &str, working_dir: &Path) -> PathBuf {
    working_dir.join(relative)
}

/// Whether `relative` has a path component that is exactly `test` or `tests`.
///
/// The repository root is removed from the front of the resolved path first,
/// so the directories above the repository never count.
pub fn is_test_path(relative: &str, working_dir: &Path, repo_root: &Path) -> bool {
    if relative.trim().is_empty() {
        return false;
    }

    let resolved = resolve(relative, working_dir);
    let resolved = resolved.to_string_lossy();
    let root = repo_root.to_string_lossy();
    let inside = resolved.strip_prefix(&*root).unwrap_or(&*resolved);

    Path::new(inside).components().any(|component| match component {
        Component::Normal(name) => TEST_COMPONENTS.iter().any(|t| name == *t),
        _ => false,
    })
}

/// Keep the test paths from a changed-file listing, preserving order
pub fn select_candidates(
    paths: &[String],
    working_dir: &Path,
    repo_root: &Path,
) -> Vec<TestCandidate> {
    paths
        .iter()
        .filter(|path| is_test_path(path, working_dir, repo_root))
        .map(|path| TestCandidate {
            relative: path.clone(),
            absolute: resolve(path, working_dir),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_root(relative: &str) -> bool {
        is_test_path(relative, Path::new("/home/me/repo"), Path::new("/home/me/repo"))
    }

    #[test]
    fn test_matches_test_and_tests_directories() {
        assert!(at_root("tests/app_test.py"));
        assert!(at_root("test/app.py"));
        assert!(at_root("pkg/tests/unit/parser.rs"));
        assert!(at_root("testme/tests/sample.sh"));
    }

    #[test]
    fn test_requires_whole_component() {
        assert!(!at_root("src/app.py"));
        assert!(!at_root("testing/app.py"));
        assert!(!at_root("attest/app.py"));
        assert!(!at_root("src/test_app.py"));
        assert!(!at_root("src/app_test.py"));
        assert!(!at_root("tests.py"));
    }

    #[test]
    fn test_file_named_test_matches() {
        // A bare file called `test` is still a whole component
        assert!(at_root("scripts/test"));
    }

    #[test]
    fn test_blank_paths_never_match() {
        assert!(!at_root(""));
        assert!(!at_root("   "));
        // Even when the working directory itself is a test directory
        assert!(!is_test_path(
            "",
            Path::new("/home/me/repo/tests"),
            Path::new("/home/me/repo")
        ));
    }

    #[test]
    fn test_repository_root_is_ignored() {
        let root = Path::new("/home/me/tests/repo");

        assert!(!is_test_path("src/app.py", root, root));
        assert!(is_test_path("tests/app.py", root, root));
    }

    #[test]
    fn test_root_prefix_removal_is_textual() {
        // `/srv/tests-suite` is not under `/srv/tests` as a path, but the
        // prefix is removed textually, leaving `-suite/src/app.py`
        assert!(!is_test_path(
            "src/app.py",
            Path::new("/srv/tests-suite"),
            Path::new("/srv/tests")
        ));
    }

    #[test]
    fn test_root_not_stripped_without_prefix_match() {
        assert!(is_test_path(
            "src/app.py",
            Path::new("/elsewhere/test"),
            Path::new("/home/me/repo")
        ));
    }

    #[test]
    fn test_resolves_against_working_directory() {
        let root = Path::new("/home/me/repo");

        assert!(is_test_path("app.py", Path::new("/home/me/repo/tests"), root));
        assert_eq!(
            resolve("tests/a.py", root),
            PathBuf::from("/home/me/repo/tests/a.py")
        );
    }

    #[test]
    fn test_select_candidates_preserves_order() {
        let root = Path::new("/repo");
        let paths: Vec<String> = [
            "tests/z_test.py",
            "src/app.py",
            "",
            "test/a_test.py",
            "tests/z_test.py",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let candidates = select_candidates(&paths, root, root);
        let relative: Vec<&str> = candidates.iter().map(|c| c.relative.as_str()).collect();

        assert_eq!(
            relative,
            vec!["tests/z_test.py", "test/a_test.py", "tests/z_test.py"]
        );
        assert_eq!(candidates[1].absolute, PathBuf::from("/repo/test/a_test.py"));
    }
}
