//! Investigation directory naming and creation

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::consts::{FALLBACK_LABEL, MAX_DIR_NAME_LEN, is_name_char};
use crate::context::Context;
use crate::error::AppError;

use super::CaseRef;

const SOURCE: &str = "create_investigation_dir";

/// Result of asking for a new investigation directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Created {
    Dir(PathBuf),
    /// Dry run: the directory that would have been created
    DryRun(PathBuf),
}

impl Created {
    pub(crate) fn path(&self) -> &Path {
        match self {
            Created::Dir(path) | Created::DryRun(path) => path,
        }
    }
}

/// `<timestamp>[ <case ref>] - <label>`
pub(crate) fn compose_dir_name(
    timestamp: &str,
    case_ref: Option<&CaseRef>,
    label: Option<&str>,
) -> String {
    let mut name = timestamp.to_string();
    if let Some(case_ref) = case_ref {
        name.push(' ');
        name.push_str(case_ref.as_str());
    }
    name.push_str(" - ");
    name.push_str(label.filter(|l| !l.is_empty()).unwrap_or(FALLBACK_LABEL));
    name
}

pub(crate) fn validate_dir_name(name: &str) -> Result<(), AppError> {
    let len = name.chars().count();
    if len == 0 || len > MAX_DIR_NAME_LEN || !name.chars().all(is_name_char) {
        return Err(AppError::InvalidDirName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Create a fresh, uniquely named investigation directory under `base`.
///
/// `base` must already exist. An existing directory with the same name is an
/// error; the caller retries with different input or a later timestamp.
pub(crate) fn create_investigation_dir(
    ctx: &Context,
    base: &Path,
    case_ref: Option<&CaseRef>,
    label: Option<&str>,
) -> Result<Created, AppError> {
    let log = &ctx.log;

    if !base.exists() {
        return Err(log.report(
            SOURCE,
            AppError::InvestigationsRootMissing {
                path: base.to_path_buf(),
            },
        ));
    }

    let name = compose_dir_name(&ctx.settings.clock.timestamp(), case_ref, label);
    log.info(SOURCE, format!("New directory name: '{name}'"));
    if let Err(e) = validate_dir_name(&name) {
        return Err(log.report(SOURCE, e));
    }

    let path = base.join(&name);
    if path.exists() {
        return Err(log.report(SOURCE, AppError::InvestigationExists { path }));
    }

    if ctx.settings.dry_run {
        log.info(
            SOURCE,
            format!("DRYRUN: Would have created directory '{}'.", path.display()),
        );
        return Ok(Created::DryRun(path));
    }

    // create_dir, not create_dir_all: losing a race must fail
    let path = match fs::create_dir(&path) {
        Ok(()) => verify_dir(path),
        Err(source) => Err(creation_error(path, source)),
    }
    .map_err(|e| log.report(SOURCE, e))?;

    log.info(SOURCE, format!("Created directory '{}'.", path.display()));
    Ok(Created::Dir(path))
}

/// A leaf that appeared after the existence check is still a duplicate
fn creation_error(path: PathBuf, source: io::Error) -> AppError {
    match source.kind() {
        io::ErrorKind::AlreadyExists => AppError::InvestigationExists { path },
        _ => AppError::CreateDir { path, source },
    }
}

fn verify_dir(path: PathBuf) -> Result<PathBuf, AppError> {
    if path.is_dir() {
        Ok(path)
    } else {
        Err(AppError::DirNotVerified { path })
    }
}
