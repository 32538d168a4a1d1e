//! Application configuration management.
//!
//! Settings are layered with figment, lowest priority first:
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. TOML file (`--config`, or `config.toml` in the platform config dir)
//! 3. Environment variables prefixed with `PINHASH_` (e.g. `PINHASH_THEME=light`)
//! 4. CLI flags, applied by [`Config::apply_cli`]

use anyhow::Result;
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, ThemeArg};

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "PINHASH_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred TUI theme.
    #[serde(default)]
    pub theme: ThemeArg,

    /// Store file location; `None` means the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,

    /// Draw ASCII borders instead of box-drawing characters.
    #[serde(default)]
    pub accessible: bool,
}

impl Config {
    /// Load the configuration from `path`, or from the default location.
    ///
    /// Falls back to defaults (logged at debug) if anything fails, so a bad
    /// config file never keeps the game from starting.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::config_path().ok(),
        };

        match Self::figment(path.as_deref()).extract() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Build the layered figment (defaults < file < environment).
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Apply CLI flags, which take precedence over every other layer.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(theme) = cli.theme {
            self.theme = theme;
        }
        if let Some(store) = &cli.store {
            self.store_path = Some(store.clone());
        }
        if cli.accessible {
            self.accessible = true;
        }
    }

    /// Save the configuration as TOML to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default platform-specific configuration path.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "pinhash", "pinhash")
            .ok_or_else(|| anyhow::anyhow!("Failed to determine project directories"))?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }
}
