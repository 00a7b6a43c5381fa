//! Playbook discovery
//!
//! Finds template notebooks under the playbooks root, skipping tool and
//! cache directories.

pub(crate) mod tree;
pub(crate) mod walk;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::context::Context;
use crate::error::AppError;

pub(crate) use tree::{DirTree, FsTree};
pub(crate) use walk::TemplateWalk;

const SOURCE: &str = "discover";

/// A template file found during discovery
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct TemplateRef {
    path: PathBuf,
}

impl TemplateRef {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }

    /// Name of the folder holding the template, used to label the investigation
    pub(crate) fn parent_name(&self) -> Option<&str> {
        self.path
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Collect every template under `root`.
///
/// An empty result is reported as a warning and returned as `NoTemplates`.
pub(crate) fn discover(
    ctx: &Context,
    tree: &dyn DirTree,
    root: &Path,
) -> Result<Vec<TemplateRef>, AppError> {
    let settings = &ctx.settings;
    ctx.log.verbose(
        SOURCE,
        format!(
            "Fetching all '{}' files in the '{}' directory.",
            settings.template_pattern,
            root.display()
        ),
    );

    if !tree.is_dir(root) {
        return Err(ctx.log.report(
            SOURCE,
            AppError::TemplatesRootMissing {
                path: root.to_path_buf(),
            },
        ));
    }

    let walk = TemplateWalk::new(
        tree,
        root.to_path_buf(),
        &settings.ignore_dirs,
        &settings.template_pattern,
    );
    let mut templates = Vec::new();
    for found in walk {
        match found {
            Ok(template) => {
                ctx.log.debug(SOURCE, format!("Found '{template}'."));
                templates.push(template);
            }
            Err(e) => ctx
                .log
                .warning(SOURCE, format!("Skipping unreadable directory {e}")),
        }
    }

    if templates.is_empty() {
        let err = AppError::NoTemplates {
            path: root.to_path_buf(),
        };
        ctx.log.warning(SOURCE, &err);
        return Err(err);
    }
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::test_context;
    use crate::logger::Level;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;
    use super::tree::tests::MemTree;

    #[test]
    fn template_ref_exposes_names() {
        let t = TemplateRef::new(PathBuf::from("Playbooks/Phishing/triage.ipynb"));
        assert_eq!(t.file_name(), Some("triage.ipynb"));
        assert_eq!(t.parent_name(), Some("Phishing"));
        assert_eq!(t.to_string(), "Playbooks/Phishing/triage.ipynb");
    }

    #[test]
    fn template_without_parent_has_no_label() {
        let t = TemplateRef::new(PathBuf::from("triage.ipynb"));
        assert_eq!(t.parent_name(), None);
    }

    #[test]
    fn end_to_end_tree_skips_git() {
        let (ctx, _) = test_context(Path::new("/unused"), Level::Warning);
        let tree = MemTree::with_files(&["root/a/x.ipynb", "root/.git/y.ipynb"]);
        let found = discover(&ctx, &tree, Path::new("root")).unwrap();
        assert_eq!(found, vec![TemplateRef::new(PathBuf::from("root/a/x.ipynb"))]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let (ctx, buf) = test_context(Path::new("/unused"), Level::Warning);
        let tree = MemTree::with_files(&["other/x.ipynb"]);
        let err = discover(&ctx, &tree, Path::new("root")).unwrap_err();
        assert!(matches!(err, AppError::TemplatesRootMissing { .. }));
        assert!(buf.contents().starts_with("[ERROR::discover]"));
    }

    #[test]
    fn empty_result_is_a_warning() {
        let (ctx, buf) = test_context(Path::new("/unused"), Level::Warning);
        let mut tree = MemTree::with_files(&["root/.git/y.ipynb"]);
        tree.add_dir("root/empty");
        let err = discover(&ctx, &tree, Path::new("root")).unwrap_err();
        assert!(matches!(err, AppError::NoTemplates { .. }));
        let out = buf.contents();
        assert!(out.starts_with("[WARNING::discover] No templates found"));
        assert!(!out.contains("ERROR"));
    }

    #[test]
    fn unreadable_subdirectory_is_skipped_with_warning() {
        let (ctx, buf) = test_context(Path::new("/unused"), Level::Warning);
        let mut tree = MemTree::with_files(&["root/a/x.ipynb", "root/b/y.ipynb"]);
        tree.deny("root/a");
        let found = discover(&ctx, &tree, Path::new("root")).unwrap();
        assert_eq!(found.len(), 1);
        assert!(buf.contents().contains("[WARNING::discover] Skipping unreadable directory"));
    }

    #[test]
    fn repeated_discovery_finds_the_same_set() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("Playbooks");
        for file in ["a/x.ipynb", "b/c/y.ipynb", "__pycache__/z.ipynb", "d.ipynb"] {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "{}").unwrap();
        }
        let (ctx, _) = test_context(dir.path(), Level::Warning);

        let first: BTreeSet<_> = discover(&ctx, &FsTree, &root).unwrap().into_iter().collect();
        let second: BTreeSet<_> = discover(&ctx, &FsTree, &root).unwrap().into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert!(first.iter().all(|t| !t.path().starts_with(root.join("__pycache__"))));
    }
}
