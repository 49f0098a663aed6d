//! Symbol graph file discovery.
//!
//! Walks the graphs root and collects `.json` graph files, honoring the
//! configured include and ignore patterns. Ignore patterns split into
//! literal directory paths (prefix match) and glob patterns.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of discovering graph files.
pub struct GraphFileScan {
    /// Discovered files in sorted order, so scans are deterministic.
    pub files: Vec<String>,
    pub skipped_count: usize,
}

pub fn scan_graph_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> GraphFileScan {
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            // Literal path mode: anchor under the base dir for prefix matching
            let path = Path::new(base_dir).join(p);
            literal_ignore_paths.push(path);
        }
    }

    let dirs_to_scan: Vec<PathBuf> = if includes.is_empty() {
        vec![Path::new(base_dir).to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                // Glob mode: expand pattern to matching directories
                let full_pattern = Path::new(base_dir).join(inc);
                let pattern_str = full_pattern.to_string_lossy();
                match glob(&pattern_str) {
                    Ok(entries) => {
                        for entry in entries.flatten() {
                            if entry.is_dir() {
                                paths.push(entry);
                            }
                        }
                    }
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid glob pattern '{}': {}",
                                "warning:".bold().yellow(),
                                inc,
                                e
                            );
                        }
                    }
                }
            } else {
                // Literal path mode: use as-is
                let path = Path::new(base_dir).join(inc);
                if path.exists() {
                    paths.push(path);
                } else if verbose {
                    eprintln!(
                        "{} Include path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            // Check if path matches any literal ignore path (prefix match)
            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            // Check if path matches any glob pattern
            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && is_graph_file(path) {
                files.insert(path_str.into());
            }
        }
    }

    GraphFileScan {
        files: files.into_iter().collect(),
        skipped_count,
    }
}

fn is_graph_file(path: &Path) -> bool {
    // Dotfiles (e.g. the config file itself) are never graph exports.
    let hidden = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'));
    !hidden && matches!(path.extension().and_then(|e| e.to_str()), Some("json"))
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_scan_json_files_only() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        File::create(dir_path.join("app.json")).unwrap();
        File::create(dir_path.join("notes.md")).unwrap();
        File::create(dir_path.join("data.jsonl")).unwrap();

        let result = scan_graph_files(dir_path.to_str().unwrap(), &[], &[], false);

        assert_eq!(result.files.len(), 1);
        assert!(result.files[0].ends_with("app.json"));
    }

    #[test]
    fn test_scan_ignores_glob_pattern() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let build = dir_path.join("build");
        fs::create_dir(&build).unwrap();
        File::create(build.join("generated.json")).unwrap();

        File::create(dir_path.join("app.json")).unwrap();

        let result = scan_graph_files(
            dir_path.to_str().unwrap(),
            &[],
            &["**/build/**".to_owned()],
            false,
        );

        assert_eq!(result.files.len(), 1);
        assert!(result.files[0].ends_with("app.json"));
    }

    #[test]
    fn test_scan_ignores_literal_directory_path() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let graphs = dir_path.join("graphs");
        fs::create_dir(&graphs).unwrap();
        File::create(graphs.join("app.json")).unwrap();

        let stale = graphs.join("stale");
        fs::create_dir(&stale).unwrap();
        File::create(stale.join("old.json")).unwrap();

        let result = scan_graph_files(
            dir_path.to_str().unwrap(),
            &["graphs".to_owned()],
            &["graphs/stale".to_owned()],
            false,
        );

        assert_eq!(result.files.len(), 1);
        assert!(result.files[0].ends_with("app.json"));
    }

    #[test]
    fn test_scan_with_includes() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let graphs = dir_path.join("graphs");
        fs::create_dir(&graphs).unwrap();
        File::create(graphs.join("app.json")).unwrap();

        let other = dir_path.join("other");
        fs::create_dir(&other).unwrap();
        File::create(other.join("misc.json")).unwrap();

        let result = scan_graph_files(
            dir_path.to_str().unwrap(),
            &["graphs".to_owned()],
            &[],
            false,
        );

        assert_eq!(result.files.len(), 1);
        assert!(result.files[0].ends_with("graphs/app.json"));
    }

    #[test]
    fn test_scan_with_glob_include() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let module_a = dir_path.join("modules").join("a");
        fs::create_dir_all(&module_a).unwrap();
        File::create(module_a.join("a.json")).unwrap();

        let module_b = dir_path.join("modules").join("b");
        fs::create_dir_all(&module_b).unwrap();
        File::create(module_b.join("b.json")).unwrap();

        let lib = dir_path.join("lib");
        fs::create_dir(&lib).unwrap();
        File::create(lib.join("lib.json")).unwrap();

        let result = scan_graph_files(
            dir_path.to_str().unwrap(),
            &["modules/*".to_owned()],
            &[],
            false,
        );

        assert_eq!(result.files.len(), 2);
        assert!(!result.files.iter().any(|f| f.ends_with("lib.json")));
    }

    #[test]
    fn test_scan_with_nonexistent_include() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        File::create(dir_path.join("app.json")).unwrap();

        let result = scan_graph_files(
            dir_path.to_str().unwrap(),
            &["nonexistent".to_owned()],
            &[],
            false,
        );

        assert!(result.files.is_empty());
    }

    #[test]
    fn test_files_are_sorted() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        File::create(dir_path.join("b.json")).unwrap();
        File::create(dir_path.join("a.json")).unwrap();
        File::create(dir_path.join("c.json")).unwrap();

        let result = scan_graph_files(dir_path.to_str().unwrap(), &[], &[], false);

        let mut sorted = result.files.clone();
        sorted.sort();
        assert_eq!(result.files, sorted);
    }

    #[test]
    fn test_scan_skips_hidden_files() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        File::create(dir_path.join(".modscanrc.json")).unwrap();
        File::create(dir_path.join("app.json")).unwrap();

        let result = scan_graph_files(dir_path.to_str().unwrap(), &[], &[], false);

        assert_eq!(result.files.len(), 1);
        assert!(result.files[0].ends_with("app.json"));
    }

    #[test]
    fn test_is_glob_pattern() {
        assert!(is_glob_pattern("modules/*"));
        assert!(is_glob_pattern("**/*.json"));
        assert!(is_glob_pattern("graph?.json"));
        assert!(!is_glob_pattern("graphs"));
        assert!(!is_glob_pattern("graphs/stale"));
    }
}
