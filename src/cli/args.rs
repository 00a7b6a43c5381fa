//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::logger::Level;

#[derive(Parser, Debug, Default)]
#[command(name = "new-investigation")]
#[command(
    about = "Start a new investigation folder from a notebook playbook",
    version
)]
pub(crate) struct Cli {
    /// Set verbosity to SILENT
    #[arg(long)]
    pub(crate) silent: bool,

    /// Set verbosity to CRITICAL
    #[arg(long)]
    pub(crate) critical: bool,

    /// Set verbosity to ERROR
    #[arg(long)]
    pub(crate) error: bool,

    /// Set verbosity to WARNING (default)
    #[arg(long)]
    pub(crate) warning: bool,

    /// Set verbosity to INFO
    #[arg(long)]
    pub(crate) info: bool,

    /// Set verbosity to VERBOSE
    #[arg(long)]
    pub(crate) verbose: bool,

    /// Set verbosity to DEBUG
    #[arg(long)]
    pub(crate) debug: bool,

    /// Run without making any changes
    #[arg(long)]
    pub(crate) dryrun: bool,

    /// Directory holding the playbook notebooks [default: Playbooks]
    #[arg(long, value_name = "DIR")]
    pub(crate) playbooks: Option<PathBuf>,

    /// Directory new investigations are created in [default: Investigations]
    #[arg(long, value_name = "DIR")]
    pub(crate) investigations: Option<PathBuf>,

    /// Timezone for the directory timestamp (e.g., "Europe/Oslo", "UTC")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Read configuration from this file instead of the default locations
    #[arg(long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,
}

impl Cli {
    /// Verbosity picked by flag. The first flag in severity order wins.
    pub(crate) fn verbosity(&self) -> Option<Level> {
        let flags = [
            (self.silent, Level::Silent),
            (self.critical, Level::Critical),
            (self.error, Level::Error),
            (self.warning, Level::Warning),
            (self.info, Level::Info),
            (self.verbose, Level::Verbose),
            (self.debug, Level::Debug),
        ];
        flags
            .into_iter()
            .find_map(|(set, level)| set.then_some(level))
    }

    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.dryrun && config.dryrun {
            self.dryrun = true;
        }
        if self.playbooks.is_none() {
            self.playbooks = config.playbooks_dir.clone();
        }
        if self.investigations.is_none() {
            self.investigations = config.investigations_dir.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flag_means_no_verbosity_override() {
        let cli = Cli::parse_from(["new-investigation"]);
        assert_eq!(cli.verbosity(), None);
        assert!(!cli.dryrun);
    }

    #[test]
    fn single_flag_selects_level() {
        let cli = Cli::parse_from(["new-investigation", "--verbose"]);
        assert_eq!(cli.verbosity(), Some(Level::Verbose));
    }

    #[test]
    fn first_flag_in_severity_order_wins() {
        let cli = Cli::parse_from(["new-investigation", "--debug", "--error"]);
        assert_eq!(cli.verbosity(), Some(Level::Error));
    }

    #[test]
    fn config_fills_only_unset_values() {
        let config = Config {
            dryrun: true,
            playbooks_dir: Some(PathBuf::from("lib")),
            investigations_dir: Some(PathBuf::from("cases")),
            timezone: Some("UTC".to_string()),
            ..Config::default()
        };
        let cli = Cli::parse_from(["new-investigation", "--investigations", "mine"])
            .with_config(&config);
        assert!(cli.dryrun);
        assert_eq!(cli.playbooks, Some(PathBuf::from("lib")));
        assert_eq!(cli.investigations, Some(PathBuf::from("mine")));
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
    }
}
