mod app;
mod cli;
mod config;
mod consts;
mod context;
mod discovery;
mod error;
mod logger;
mod prompt;
mod utils;
mod workspace;

use std::io;

use clap::Parser;

use app::Outcome;
use cli::Cli;
use config::{Config, LoadedConfig};
use context::{Context, Settings};
use discovery::FsTree;
use error::{AppError, ExitStatus};
use logger::{Level, Logger};
use prompt::Prompter;

const SOURCE: &str = "main";

fn main() {
    let status = match try_main() {
        Ok(status) => status,
        Err(err) => {
            // Only reached before the configured logger exists
            let log = Logger::stdout(Level::DEFAULT);
            log.error(SOURCE, format!("{err}. Exiting."));
            err.exit_status()
        }
    };
    std::process::exit(status.process_code());
}

fn try_main() -> Result<ExitStatus, AppError> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let LoadedConfig {
        config,
        origin,
        skipped,
    } = loaded;

    let mut log = Logger::stdout(Level::DEFAULT);
    match cli.verbosity() {
        Some(level) => log.set_level(level),
        None => {
            if let Some(name) = config.verbosity.as_deref()
                && let Err(e) = log.set_level_by_name(name)
            {
                log.error(
                    SOURCE,
                    format!("Invalid logging verbosity level in configuration: {name}. Exiting."),
                );
                return Ok(e.exit_status());
            }
        }
    }
    log.verbose(SOURCE, format!("Set verbosity level to {}.", log.level()));

    for problem in &skipped {
        log.warning(SOURCE, problem);
    }
    match &origin {
        Some(path) => log.verbose(SOURCE, format!("Loaded config from {}", path.display())),
        None => log.debug(SOURCE, "No config file found; using defaults."),
    }

    let cli = cli.with_config(&config);
    let settings = match Settings::resolve(&cli, &config) {
        Ok(settings) => settings,
        Err(e) => return Ok(log.report(SOURCE, e).exit_status()),
    };
    if settings.dry_run {
        log.verbose(
            SOURCE,
            format!(
                "Running in dryrun mode with verbosity level {}. No changes will be made.",
                log.level()
            ),
        );
    } else {
        log.verbose(
            SOURCE,
            format!("Running with verbosity level {}.", log.level()),
        );
    }

    let ctx = Context::new(settings, log);
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    match app::run(&ctx, &FsTree, &mut prompter) {
        Ok(outcome) => {
            let (Outcome::Created { dir, .. } | Outcome::DryRun { dir, .. }) = &outcome;
            ctx.log
                .verbose(SOURCE, format!("Investigation directory: {}", dir.display()));
            ctx.log.info(
                SOURCE,
                "Execution completed successfully. Exiting normally.",
            );
            Ok(ExitStatus::Success)
        }
        Err(e) => {
            if matches!(e, AppError::InputClosed | AppError::Console(_)) {
                ctx.log.error(SOURCE, &e);
            }
            ctx.log
                .error(SOURCE, "Execution failed. Exiting with error.");
            Ok(e.exit_status())
        }
    }
}
