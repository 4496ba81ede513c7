//! File eligibility for a processing run.
//!
//! The gate is built once per run from a root directory and an exclusion
//! list, and is read-only afterwards: top-level directory names survive the
//! exclusion filter, and a file is eligible when its root-relative path
//! starts with a surviving name and its extension is one of the supported
//! source kinds.

use crate::error::{Error, IoError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Default directory names excluded from processing.
pub const DEFAULT_EXCLUDES: [&str; 4] = ["dist", "vendor", "node_modules", ".git"];

/// Anchored matcher for eligible source extensions.
const EXTENSION_PATTERN: &str = r"\.(js|ts|tsx)$";

/// Decides which files are candidates for transformation.
///
/// # Examples
///
/// ```no_run
/// use strip_ifdef::select::SelectionGate;
/// use std::path::Path;
///
/// let gate = SelectionGate::with_default_excludes(".").unwrap();
/// if gate.is_eligible(Path::new("./src/app.ts")) {
///     // transform it
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SelectionGate {
    /// Root directory the gate was built for.
    root: PathBuf,
    /// Surviving top-level directory names, sorted for determinism.
    filters: Vec<String>,
    /// Compiled extension matcher.
    matcher: Regex,
}

impl SelectionGate {
    /// Builds a gate for `root` with the given exclusion list.
    ///
    /// Top-level entry names containing a `.` are dropped, as is any name
    /// matched by an exclusion entry. An exclusion entry matches when it
    /// contains the candidate name as a substring.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory can't be enumerated.
    pub fn new<P: AsRef<Path>>(root: P, excludes: &[String]) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let entries = std::fs::read_dir(&root).map_err(|e| IoError::ReadDirFailed {
            path: root.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;

        let mut filters = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| IoError::ReadDirFailed {
                path: root.to_string_lossy().to_string(),
                reason: e.to_string(),
            })?;
            let name = entry.file_name().to_string_lossy().to_string();
            if name.contains('.') {
                continue;
            }
            if excludes.iter().any(|exclude| exclude.contains(&name)) {
                continue;
            }
            filters.push(name);
        }
        filters.sort_unstable();

        let matcher = Regex::new(EXTENSION_PATTERN)
            .map_err(|e| Error::config(format!("invalid extension pattern: {e}")))?;

        Ok(Self {
            root,
            filters,
            matcher,
        })
    }

    /// Builds a gate for `root` with [`DEFAULT_EXCLUDES`].
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory can't be enumerated.
    pub fn with_default_excludes<P: AsRef<Path>>(root: P) -> Result<Self> {
        let excludes: Vec<String> = DEFAULT_EXCLUDES.iter().map(ToString::to_string).collect();
        Self::new(root, &excludes)
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the surviving top-level directory names.
    #[must_use]
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    /// Returns whether `path` is a candidate for transformation.
    ///
    /// The path is compared relative to the gate's root by bare string
    /// prefix.
    #[must_use]
    pub fn is_eligible(&self, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return false;
        };
        let relative = relative.to_string_lossy();
        self.filters
            .iter()
            .any(|filter| relative.starts_with(filter.as_str()))
            && self.matcher.is_match(&relative)
    }

    /// Walks the root and collects every eligible file, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if directory traversal fails.
    pub fn eligible_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|e| IoError::ReadDirFailed {
                path: self.root.to_string_lossy().to_string(),
                reason: e.to_string(),
            })?;
            if entry.file_type().is_file() && self.is_eligible(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files.sort_unstable();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scaffold() -> TempDir {
        let temp = TempDir::new().unwrap();
        for dir in ["src", "lib", "dist", "node_modules", "my.pkg"] {
            std::fs::create_dir(temp.path().join(dir)).unwrap();
        }
        std::fs::write(temp.path().join("src/app.ts"), "").unwrap();
        std::fs::write(temp.path().join("src/view.tsx"), "").unwrap();
        std::fs::write(temp.path().join("src/main.rs"), "").unwrap();
        std::fs::write(temp.path().join("lib/util.js"), "").unwrap();
        std::fs::write(temp.path().join("dist/app.js"), "").unwrap();
        std::fs::write(temp.path().join("top.ts"), "").unwrap();
        temp
    }

    #[test]
    fn test_filters_survive_exclusions() {
        let temp = scaffold();
        let gate = SelectionGate::with_default_excludes(temp.path()).unwrap();
        assert_eq!(gate.filters(), ["lib", "src"]);
    }

    #[test]
    fn test_dotted_names_dropped() {
        let temp = scaffold();
        let gate = SelectionGate::new(temp.path(), &[]).unwrap();
        assert!(!gate.filters().contains(&"my.pkg".to_string()));
        assert!(!gate.filters().contains(&"top.ts".to_string()));
    }

    #[test]
    fn test_exclusion_matches_by_substring() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("od")).unwrap();
        std::fs::create_dir(temp.path().join("src")).unwrap();
        let gate = SelectionGate::with_default_excludes(temp.path()).unwrap();
        // "node_modules" contains "od", so "od" is excluded.
        assert_eq!(gate.filters(), ["src"]);
    }

    #[test]
    fn test_eligibility() {
        let temp = scaffold();
        let gate = SelectionGate::with_default_excludes(temp.path()).unwrap();
        assert!(gate.is_eligible(&temp.path().join("src/app.ts")));
        assert!(gate.is_eligible(&temp.path().join("src/view.tsx")));
        assert!(gate.is_eligible(&temp.path().join("lib/util.js")));
        // Wrong extension.
        assert!(!gate.is_eligible(&temp.path().join("src/main.rs")));
        // Excluded directory.
        assert!(!gate.is_eligible(&temp.path().join("dist/app.js")));
        // Top-level file outside every filter directory.
        assert!(!gate.is_eligible(&temp.path().join("top.ts")));
        // Path outside the root entirely.
        assert!(!gate.is_eligible(Path::new("/elsewhere/src/app.ts")));
    }

    #[test]
    fn test_prefix_is_a_string_comparison() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("src")).unwrap();
        std::fs::create_dir(temp.path().join("srcgen")).unwrap();
        std::fs::write(temp.path().join("srcgen/a.ts"), "").unwrap();
        let gate = SelectionGate::with_default_excludes(temp.path()).unwrap();
        // "srcgen/a.ts" starts with "src": eligible under either filter.
        assert!(gate.is_eligible(&temp.path().join("srcgen/a.ts")));
    }

    #[test]
    fn test_eligible_files_walk() {
        let temp = scaffold();
        std::fs::create_dir(temp.path().join("src/deep")).unwrap();
        std::fs::write(temp.path().join("src/deep/nested.ts"), "").unwrap();
        let gate = SelectionGate::with_default_excludes(temp.path()).unwrap();
        let files = gate.eligible_files().unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| {
                p.strip_prefix(temp.path())
                    .unwrap()
                    .to_string_lossy()
                    .to_string()
            })
            .collect();
        assert_eq!(names, ["lib/util.js", "src/app.ts", "src/deep/nested.ts", "src/view.tsx"]);
    }

    #[test]
    fn test_missing_root_errors() {
        assert!(SelectionGate::with_default_excludes("definitely/not/here").is_err());
    }
}
