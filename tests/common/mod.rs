use cmaketree::scan::{build_ignore_set, ScanConfig};
use std::fs;
use tempfile::TempDir;

/// Default ScanConfig with standard ignore patterns.
#[allow(dead_code)]
pub fn default_scan_config() -> ScanConfig {
    ScanConfig {
        extensions: vec!["cpp".to_string()],
        show_hidden: false,
        follow_symlinks: false,
        ignore_patterns: build_ignore_set(&[]),
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}
