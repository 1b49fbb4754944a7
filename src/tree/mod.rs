//! Directory-tree construction from flat lists of relative file paths.

mod order;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

pub use order::emission_cmp;

use thiserror::Error;

/// Errors raised while feeding files into a [`FileTree`].
///
/// Both variants are caller bugs: the scanner only ever hands over
/// non-empty root-relative paths, so hitting one of these means the
/// input was built some other way.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("cannot add an empty path to the tree")]
    EmptyPath,

    #[error("cannot add absolute path to the tree: {0}")]
    AbsolutePath(PathBuf),
}

/// A direct child of a directory: either a file stored verbatim, or a
/// reference to a subdirectory that has its own entry in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeChild {
    /// A file, kept as its full root-relative path.
    File(PathBuf),
    /// A subdirectory one level below the parent.
    Dir(PathBuf),
}

impl TreeChild {
    /// The underlying path, regardless of variant.
    pub fn path(&self) -> &Path {
        match self {
            TreeChild::File(p) | TreeChild::Dir(p) => p,
        }
    }

    fn variant_rank(&self) -> u8 {
        match self {
            TreeChild::Dir(_) => 0,
            TreeChild::File(_) => 1,
        }
    }
}

// Children sort by their underlying path so files and subdirectory
// references interleave in plain path order within a block. The variant
// tie-break only keeps the order total; a path never appears as both.
impl Ord for TreeChild {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.path()
            .cmp(other.path())
            .then_with(|| self.variant_rank().cmp(&other.variant_rank()))
    }
}

impl PartialOrd for TreeChild {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A tree of directories built from relative file paths.
///
/// Keys are directory paths (the empty path is the scan root); values
/// are the direct children of that directory. Every directory that
/// appears as a [`TreeChild::Dir`] anywhere also has its own key, all
/// the way up to the root, so the serializer can emit one declaration
/// per directory and resolve every reference.
#[derive(Debug, Default)]
pub struct FileTree {
    nodes: BTreeMap<PathBuf, BTreeSet<TreeChild>>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single file, registering its whole ancestor chain.
    ///
    /// Walks from the file's immediate parent up to the root, recording
    /// at each level the child one step down: the file itself at the
    /// deepest level, a subdirectory reference everywhere above.
    /// Inserting the same file twice is a no-op.
    pub fn add_file(&mut self, file: &Path) -> Result<(), TreeError> {
        if file.as_os_str().is_empty() {
            return Err(TreeError::EmptyPath);
        }
        if file.is_absolute() {
            return Err(TreeError::AbsolutePath(file.to_path_buf()));
        }

        let mut cursor = file.to_path_buf();
        loop {
            let parent = cursor
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            let child = if cursor == file {
                TreeChild::File(cursor.clone())
            } else {
                TreeChild::Dir(cursor.clone())
            };
            self.nodes.entry(parent.clone()).or_default().insert(child);
            if parent.as_os_str().is_empty() {
                break;
            }
            cursor = parent;
        }
        Ok(())
    }

    /// Add every file in a batch. Order of the batch does not affect
    /// the resulting tree.
    pub fn add_files<'a>(
        &mut self,
        files: impl IntoIterator<Item = &'a PathBuf>,
    ) -> Result<(), TreeError> {
        for file in files {
            self.add_file(file)?;
        }
        Ok(())
    }

    /// Whether any file has been added yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The direct children of a directory, sorted by path.
    pub fn children(&self, dir: &Path) -> Option<&BTreeSet<TreeChild>> {
        self.nodes.get(dir)
    }

    /// Directory paths in declaration-emission order: every descendant
    /// before its ancestors, unrelated subtrees in lexicographic order,
    /// the root last.
    pub fn directories_in_emission_order(&self) -> Vec<&Path> {
        let mut dirs: Vec<&Path> = self.nodes.keys().map(PathBuf::as_path).collect();
        dirs.sort_by(|a, b| emission_cmp(a, b));
        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(paths: &[&str]) -> FileTree {
        let mut tree = FileTree::new();
        for p in paths {
            tree.add_file(Path::new(p)).unwrap();
        }
        tree
    }

    #[test]
    fn test_single_file_registers_root() {
        let tree = tree_of(&["main.cpp"]);
        let root = tree.children(Path::new("")).unwrap();
        assert_eq!(root.len(), 1);
        assert!(root.contains(&TreeChild::File(PathBuf::from("main.cpp"))));
    }

    #[test]
    fn test_nested_file_registers_every_ancestor() {
        let tree = tree_of(&["a/b/x.cpp"]);

        let ab = tree.children(Path::new("a/b")).unwrap();
        assert!(ab.contains(&TreeChild::File(PathBuf::from("a/b/x.cpp"))));

        let a = tree.children(Path::new("a")).unwrap();
        assert!(a.contains(&TreeChild::Dir(PathBuf::from("a/b"))));

        let root = tree.children(Path::new("")).unwrap();
        assert!(root.contains(&TreeChild::Dir(PathBuf::from("a"))));
    }

    #[test]
    fn test_every_referenced_dir_has_its_own_entry() {
        let tree = tree_of(&["a/b/x.cpp", "a/c/z.cpp", "d/y.cpp"]);
        for children in tree.nodes.values() {
            for child in children {
                if let TreeChild::Dir(dir) = child {
                    assert!(
                        tree.children(dir).is_some(),
                        "referenced dir {:?} has no entry of its own",
                        dir
                    );
                }
            }
        }
    }

    #[test]
    fn test_add_file_is_idempotent() {
        let once = tree_of(&["a/b/x.cpp"]);
        let twice = tree_of(&["a/b/x.cpp", "a/b/x.cpp"]);
        assert_eq!(once.nodes, twice.nodes);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let forward = tree_of(&["a/b/x.cpp", "a/b/y.cpp", "a/c/z.cpp"]);
        let backward = tree_of(&["a/c/z.cpp", "a/b/y.cpp", "a/b/x.cpp"]);
        assert_eq!(forward.nodes, backward.nodes);
    }

    #[test]
    fn test_empty_path_rejected() {
        let mut tree = FileTree::new();
        assert_eq!(tree.add_file(Path::new("")), Err(TreeError::EmptyPath));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_absolute_path_rejected() {
        let mut tree = FileTree::new();
        assert_eq!(
            tree.add_file(Path::new("/etc/passwd")),
            Err(TreeError::AbsolutePath(PathBuf::from("/etc/passwd")))
        );
        assert!(tree.is_empty());
    }

    #[test]
    fn test_children_sort_by_path_across_variants() {
        let tree = tree_of(&["a/m.cpp", "a/b/x.cpp", "a/z.cpp"]);
        let children: Vec<&Path> = tree
            .children(Path::new("a"))
            .unwrap()
            .iter()
            .map(TreeChild::path)
            .collect();
        assert_eq!(
            children,
            vec![Path::new("a/b"), Path::new("a/m.cpp"), Path::new("a/z.cpp")]
        );
    }

    #[test]
    fn test_emission_order_descendants_first_root_last() {
        let tree = tree_of(&["a/b/x.cpp", "a/c/z.cpp"]);
        let dirs = tree.directories_in_emission_order();
        assert_eq!(
            dirs,
            vec![
                Path::new("a/b"),
                Path::new("a/c"),
                Path::new("a"),
                Path::new(""),
            ]
        );
    }
}
