//! Directory tree abstraction
//!
//! Discovery only needs to list a directory and tell directories from files,
//! so the filesystem sits behind a small trait that tests can replace.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Dir,
    File,
    Other,
}

#[derive(Debug, Clone)]
pub(crate) struct TreeEntry {
    pub(crate) path: PathBuf,
    pub(crate) kind: EntryKind,
}

impl TreeEntry {
    /// Bare name of the entry, if it is valid UTF-8
    pub(crate) fn name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }
}

pub(crate) trait DirTree {
    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate children of `dir`
    fn entries(&self, dir: &Path) -> io::Result<Vec<TreeEntry>>;
}

/// The real filesystem. Symlinks are followed.
pub(crate) struct FsTree;

impl DirTree for FsTree {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn entries(&self, dir: &Path) -> io::Result<Vec<TreeEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let kind = if path.is_dir() {
                EntryKind::Dir
            } else if path.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            entries.push(TreeEntry { path, kind });
        }
        // read_dir order is platform dependent; keep the listing stable
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }
}
