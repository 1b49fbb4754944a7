//! Rendering a [`FileTree`] into CMake `set(...)` declarations.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::tree::{FileTree, TreeChild, TreeError};

/// Warning banner written at both ends of the generated document.
pub const AUTOGEN_BANNER: &str = "##### DON'T EDIT THIS FILE - IT'S AUTO-GENERATED #####";

/// CMake variable name for a directory under the given keystem.
///
/// The scan root (empty path) is named by the keystem alone; any other
/// directory appends its uppercased path with separators flattened to
/// underscores, e.g. `NORMSOURCES_A_B` for `a/b`. Distinct directories
/// under one keystem always get distinct names because `/` cannot occur
/// inside a path segment.
pub fn variable_name(dir: &Path, keystem: &str) -> String {
    // add_file rejects absolute paths, so no tree can hand one over.
    assert!(
        !dir.is_absolute(),
        "variable name requested for absolute directory {:?}",
        dir
    );

    let mut name = String::from(keystem);
    for component in dir.components() {
        name.push('_');
        name.push_str(&component.as_os_str().to_string_lossy().to_uppercase());
    }
    name
}

/// Render one `set(...)` declaration for a single directory.
///
/// File children appear as literal relative paths; subdirectory children
/// as `${...}` references to their own declarations.
fn render_block(tree: &FileTree, dir: &Path, keystem: &str) -> String {
    let mut block = String::from("set(\n\t");
    block.push_str(&variable_name(dir, keystem));
    if let Some(children) = tree.children(dir) {
        for child in children {
            block.push_str("\n\t\t");
            match child {
                TreeChild::File(path) => block.push_str(&path.to_string_lossy()),
                TreeChild::Dir(path) => {
                    block.push_str("${");
                    block.push_str(&variable_name(path, keystem));
                    block.push('}');
                }
            }
        }
    }
    block.push_str("\n)");
    block
}

/// Render every declaration of one keystem's tree, blank-line separated,
/// in define-before-reference order (subdirectories first, root last).
/// An empty tree renders to an empty string.
pub fn render_tree(tree: &FileTree, keystem: &str) -> String {
    tree.directories_in_emission_order()
        .into_iter()
        .map(|dir| render_block(tree, dir, keystem))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build and render one tree per keystem and assemble the final
/// document, bracketed by `banner` on both ends.
///
/// Keystems are processed in sorted-name order. No cross-keystem
/// deduplication happens here: if the classifier files one path under
/// two keystems, it is declared twice.
pub fn render_document(
    groups: &BTreeMap<String, BTreeSet<PathBuf>>,
    banner: &str,
) -> Result<String, TreeError> {
    let mut sections = Vec::with_capacity(groups.len());
    for (keystem, files) in groups {
        let mut tree = FileTree::new();
        tree.add_files(files)?;
        sections.push(format!("\n{}", render_tree(&tree, keystem)));
    }
    let main_text = sections.join("\n");
    Ok(format!("{banner}\n{main_text}\n\n{banner}\n"))
}
