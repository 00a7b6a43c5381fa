use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::context::Context;
use crate::discovery::{DirTree, discover};
use crate::error::AppError;
use crate::prompt::Prompter;
use crate::workspace::{Created, copy_template, create_investigation_dir};

const SOURCE: &str = "main";

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    Created { dir: PathBuf, notebook: PathBuf },
    DryRun { dir: PathBuf, notebook: PathBuf },
}

/// Start a new investigation: pick a playbook, ask for a case reference,
/// create the directory and copy the notebook into it.
pub(crate) fn run<R: BufRead, W: Write>(
    ctx: &Context,
    tree: &dyn DirTree,
    prompter: &mut Prompter<R, W>,
) -> Result<Outcome, AppError> {
    let settings = &ctx.settings;
    let log = &ctx.log;
    let playbooks_dir = &settings.playbooks_dir;

    let has_entries = tree
        .entries(playbooks_dir)
        .map(|entries| !entries.is_empty())
        .unwrap_or(false);
    if !has_entries {
        return Err(log.report(
            SOURCE,
            AppError::PlaybooksUnavailable {
                path: playbooks_dir.clone(),
            },
        ));
    }
    log.verbose(
        SOURCE,
        format!("Playbooks directory '{}' exists.", playbooks_dir.display()),
    );

    let templates = discover(ctx, tree, playbooks_dir).inspect_err(|e| {
        if let AppError::NoTemplates { .. } = e {
            log.error(SOURCE, "No notebooks found in the playbooks directory. Exiting.");
        }
    })?;
    log.verbose(
        SOURCE,
        format!(
            "Found {} notebooks in the playbooks directory.",
            templates.len()
        ),
    );

    let index = prompter.select_template(&templates)?;
    let selected = &templates[index];
    let (Some(file_name), Some(folder)) = (selected.file_name(), selected.parent_name()) else {
        log.debug(SOURCE, format!("Selected notebook: {selected}"));
        return Err(log.report(
            SOURCE,
            AppError::TemplateName {
                path: selected.path().to_path_buf(),
            },
        ));
    };
    log.info(
        SOURCE,
        format!("Selected notebook: [{}] {}", index + 1, file_name),
    );

    let case_ref = prompter.read_case_ref(ctx)?;
    match &case_ref {
        Some(case_ref) => log.info(SOURCE, format!("Case ID reference: {case_ref}")),
        None => log.info(SOURCE, "Case ID reference: none"),
    }

    let created = create_investigation_dir(
        ctx,
        &settings.investigations_dir,
        case_ref.as_ref(),
        Some(folder),
    )?;

    let notebook = copy_template(ctx, selected, &created)?;
    match created {
        Created::Dir(dir) => {
            log.info(
                SOURCE,
                format!(
                    "Copied notebook to the new directory: {}",
                    notebook.display()
                ),
            );
            Ok(Outcome::Created { dir, notebook })
        }
        Created::DryRun(dir) => Ok(Outcome::DryRun { dir, notebook }),
    }
}
