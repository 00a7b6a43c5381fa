//! Lazy depth-first walk that yields template files

use std::io;
use std::path::PathBuf;
use std::vec;

use glob::Pattern;

use super::TemplateRef;
use super::tree::{DirTree, EntryKind, TreeEntry};

/// Depth-first walk over `root` with an explicit stack of directory listings.
///
/// Directories whose bare name is in `ignore` are never opened. A directory
/// that cannot be listed yields one `Err` and the walk moves on.
pub(crate) struct TemplateWalk<'a> {
    tree: &'a dyn DirTree,
    ignore: &'a [String],
    pattern: &'a Pattern,
    root: Option<PathBuf>,
    stack: Vec<vec::IntoIter<TreeEntry>>,
}

impl<'a> TemplateWalk<'a> {
    pub(crate) fn new(
        tree: &'a dyn DirTree,
        root: PathBuf,
        ignore: &'a [String],
        pattern: &'a Pattern,
    ) -> Self {
        Self {
            tree,
            ignore,
            pattern,
            root: Some(root),
            stack: Vec::new(),
        }
    }

    fn open(&mut self, dir: PathBuf) -> io::Result<()> {
        let entries = self
            .tree
            .entries(&dir)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", dir.display())))?;
        self.stack.push(entries.into_iter());
        Ok(())
    }

    fn descend_into(&self, entry: &TreeEntry) -> bool {
        entry
            .name()
            .is_none_or(|name| !self.ignore.iter().any(|ignored| ignored == name))
    }

    fn is_template(&self, entry: &TreeEntry) -> bool {
        entry.name().is_some_and(|name| self.pattern.matches(name))
    }
}

impl Iterator for TemplateWalk<'_> {
    type Item = io::Result<TemplateRef>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take()
            && let Err(e) = self.open(root)
        {
            return Some(Err(e));
        }

        loop {
            let top = self.stack.last_mut()?;
            let Some(entry) = top.next() else {
                self.stack.pop();
                continue;
            };
            match entry.kind {
                EntryKind::Dir => {
                    if self.descend_into(&entry)
                        && let Err(e) = self.open(entry.path)
                    {
                        return Some(Err(e));
                    }
                }
                EntryKind::File => {
                    if self.is_template(&entry) {
                        return Some(Ok(TemplateRef::new(entry.path)));
                    }
                }
                EntryKind::Other => {}
            }
        }
    }
}
