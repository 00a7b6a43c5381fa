use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) playbooks_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) investigations_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) ignore_dirs: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) template_pattern: Option<String>,
    #[serde(default)]
    pub(crate) verbosity: Option<String>,
    #[serde(default)]
    pub(crate) dryrun: bool,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
}

/// A config together with where it came from and what went wrong finding it.
/// Reported once the logger is configured.
#[derive(Debug, Default)]
pub(crate) struct LoadedConfig {
    pub(crate) config: Config,
    pub(crate) origin: Option<PathBuf>,
    pub(crate) skipped: Vec<String>,
}

impl Config {
    /// Load from an explicit path. Any failure is fatal.
    pub(crate) fn load_from(path: &Path) -> Result<LoadedConfig, AppError> {
        let content = fs::read_to_string(path).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::parse(&content).map_err(|reason| AppError::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(LoadedConfig {
            config,
            origin: Some(path.to_path_buf()),
            skipped: Vec::new(),
        })
    }

    /// Load the first usable config from the standard locations
    pub(crate) fn load() -> LoadedConfig {
        Self::load_first(&Self::get_config_paths())
    }

    fn load_first(paths: &[PathBuf]) -> LoadedConfig {
        let mut skipped = Vec::new();

        for path in paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match Self::parse(&content) {
                    Ok(config) => {
                        return LoadedConfig {
                            config,
                            origin: Some(path.clone()),
                            skipped,
                        };
                    }
                    Err(e) => {
                        skipped.push(format!("Failed to parse {}: {}", path.display(), e));
                    }
                }
            }
        }

        LoadedConfig {
            skipped,
            ..LoadedConfig::default()
        }
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str::<Config>(content).map_err(|e| e.to_string())
    }

    fn get_config_paths() -> Vec<PathBuf> {
        // 1. Working directory: ./.new-investigation.toml
        let mut paths = vec![PathBuf::from(".new-investigation.toml")];

        // 2. XDG config: ~/.config/new-investigation/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(
                home.join(".config")
                    .join("new-investigation")
                    .join("config.toml"),
            );
        }

        // 3. Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("new-investigation").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 4. Home directory: ~/.new-investigation.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".new-investigation.toml"));
        }

        paths
    }
}
