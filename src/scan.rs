//! Filesystem scan: collect root-relative source files for the tree.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Configuration for a source scan.
pub struct ScanConfig {
    /// File extensions to collect (without the dot).
    pub extensions: Vec<String>,
    /// Whether to descend into hidden directories (dotfiles).
    pub show_hidden: bool,
    /// Whether to follow symbolic links during traversal.
    pub follow_symlinks: bool,
    /// Glob patterns for entries to exclude.
    pub ignore_patterns: GlobSet,
}

const DEFAULT_IGNORES: &[&str] = &[".git", "build", "CMakeFiles", ".DS_Store"];

/// Build a GlobSet from user patterns plus the default ignore list.
/// Invalid patterns are skipped and reported to stderr.
pub fn build_ignore_set(user_patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    let mut invalid = Vec::new();
    for pattern in DEFAULT_IGNORES {
        if let Ok(g) = Glob::new(pattern) {
            builder.add(g);
        }
    }
    for pattern in user_patterns {
        match Glob::new(pattern) {
            Ok(g) => {
                builder.add(g);
            }
            Err(_) => {
                invalid.push(pattern.clone());
            }
        }
    }
    if !invalid.is_empty() {
        eprintln!(
            "cmaketree: invalid ignore pattern(s), skipped: {:?}",
            invalid
        );
    }
    builder.build().unwrap_or_else(|e| {
        eprintln!("cmaketree: failed to build ignore set: {}", e);
        GlobSet::empty()
    })
}

/// Build a GlobSet from only user patterns (no defaults).
pub fn build_ignore_set_no_defaults(user_patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in user_patterns {
        if let Ok(g) = Glob::new(pattern) {
            builder.add(g);
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// Recursively collect files under `root` whose extension is in the
/// configured set, as sorted paths relative to `root`.
///
/// Unreadable entries are silently skipped; a partial listing of a
/// directory the user cannot read is still a valid scan result.
pub fn scan_sources(root: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let walker = WalkDir::new(root).follow_links(config.follow_symlinks);

    // filter_entry prevents descending into hidden/ignored directories,
    // not just skipping their display.
    let show_hidden = config.show_hidden;
    let ignore_patterns = config.ignore_patterns.clone();
    let root_owned = root.to_path_buf();
    let iter = walker.into_iter().filter_entry(move |entry| {
        let name = entry.file_name().to_string_lossy();
        // Always allow root
        if entry.depth() == 0 {
            return true;
        }
        if !show_hidden && name.starts_with('.') {
            return false;
        }
        // Match the path relative to root so e.g. "build/**" works
        let path_to_match = entry
            .path()
            .strip_prefix(&root_owned)
            .unwrap_or_else(|_| entry.path());
        if ignore_patterns.is_match(path_to_match) {
            return false;
        }
        true
    });

    let mut files = Vec::new();
    for entry in iter.filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let matches_extension = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| config.extensions.iter().any(|want| want == ext));
        if !matches_extension {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(root) {
            files.push(relative.to_path_buf());
        }
    }

    files.sort();
    files
}
