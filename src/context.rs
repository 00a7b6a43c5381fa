//! Run-wide settings resolved once at startup
//!
//! Every component receives a `&Context` instead of reading globals.

use std::path::PathBuf;

use glob::Pattern;

use crate::cli::Cli;
use crate::config::Config;
use crate::consts::{
    DEFAULT_IGNORE_DIRS, DEFAULT_INVESTIGATIONS_DIR, DEFAULT_PLAYBOOKS_DIR,
    DEFAULT_TEMPLATE_PATTERN,
};
use crate::error::AppError;
use crate::logger::Logger;
use crate::utils::{Clock, Timezone};

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) playbooks_dir: PathBuf,
    pub(crate) investigations_dir: PathBuf,
    pub(crate) ignore_dirs: Vec<String>,
    pub(crate) template_pattern: Pattern,
    pub(crate) dry_run: bool,
    pub(crate) clock: Clock,
}

impl Settings {
    /// Combine a config-merged CLI with the config-only keys
    pub(crate) fn resolve(cli: &Cli, config: &Config) -> Result<Self, AppError> {
        let timezone = Timezone::parse(cli.timezone.as_deref())?;

        let raw_pattern = config
            .template_pattern
            .as_deref()
            .unwrap_or(DEFAULT_TEMPLATE_PATTERN);
        let template_pattern =
            Pattern::new(raw_pattern).map_err(|e| AppError::InvalidPattern {
                input: raw_pattern.to_string(),
                reason: e.msg.to_string(),
            })?;

        let ignore_dirs = config.ignore_dirs.clone().unwrap_or_else(|| {
            DEFAULT_IGNORE_DIRS
                .iter()
                .map(|name| (*name).to_string())
                .collect()
        });

        Ok(Self {
            playbooks_dir: cli
                .playbooks
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PLAYBOOKS_DIR)),
            investigations_dir: cli
                .investigations
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INVESTIGATIONS_DIR)),
            ignore_dirs,
            template_pattern,
            dry_run: cli.dryrun,
            clock: Clock::System(timezone),
        })
    }
}

pub(crate) struct Context {
    pub(crate) settings: Settings,
    pub(crate) log: Logger,
}

impl Context {
    pub(crate) fn new(settings: Settings, log: Logger) -> Self {
        Self { settings, log }
    }
}
