//! Investigation workspace: case references, the directory, and the notebook copy

pub(crate) mod case_ref;
pub(crate) mod naming;

use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::COPY_PREFIX;
use crate::context::Context;
use crate::discovery::TemplateRef;
use crate::error::AppError;

pub(crate) use case_ref::CaseRef;
pub(crate) use naming::{Created, create_investigation_dir};

const SOURCE: &str = "copy_template";

/// Destination of a template copied into `dir`: `dir/inv_<file name>`
pub(crate) fn copy_destination(template: &TemplateRef, dir: &Path) -> Result<PathBuf, AppError> {
    let file_name = template.file_name().ok_or_else(|| AppError::TemplateName {
        path: template.path().to_path_buf(),
    })?;
    Ok(dir.join(format!("{COPY_PREFIX}{file_name}")))
}

/// Copy `template` into the investigation directory and check it landed.
///
/// For a dry-run directory only the intended copy is logged.
pub(crate) fn copy_template(
    ctx: &Context,
    template: &TemplateRef,
    created: &Created,
) -> Result<PathBuf, AppError> {
    let dest = match copy_destination(template, created.path()) {
        Ok(dest) => dest,
        Err(e) => return Err(ctx.log.report(SOURCE, e)),
    };

    if let Created::DryRun(_) = created {
        ctx.log.info(
            SOURCE,
            format!(
                "DRYRUN: Would have copied '{}' to '{}'.",
                template,
                dest.display()
            ),
        );
        return Ok(dest);
    }

    ctx.log.debug(
        SOURCE,
        format!("Copying '{}' to '{}'.", template, dest.display()),
    );
    if let Err(source) = fs::copy(template.path(), &dest) {
        return Err(ctx.log.report(SOURCE, AppError::Copy { to: dest, source }));
    }
    verify_copy(dest).map_err(|e| ctx.log.report(SOURCE, e))
}

fn verify_copy(dest: PathBuf) -> Result<PathBuf, AppError> {
    if dest.is_file() {
        Ok(dest)
    } else {
        Err(AppError::CopyNotVerified { path: dest })
    }
}
