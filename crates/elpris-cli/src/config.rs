// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Elpriskollen.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! CLI configuration loaded from TOML with environment overrides

use elpris_i18n::Language;
use elpris_source::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming a configuration file
pub const CONFIG_PATH_ENV: &str = "ELPRIS_CONFIG";
/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "elpriskollen.toml";

const BASE_URL_ENV: &str = "ELPRIS_API_BASE_URL";
const LANG_ENV: &str = "ELPRIS_LANG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "warn".to_owned()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Root of the price API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// HTTP request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Report language ("sv" or "en")
    #[serde(default)]
    pub language: Language,

    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Fetch tomorrow's prices so a charging window can cross midnight
    #[serde(default = "default_true")]
    pub include_tomorrow: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            language: Language::default(),
            log_level: default_log_level(),
            include_tomorrow: true,
        }
    }
}

impl CliConfig {
    /// Load configuration for this process
    ///
    /// Looks at `explicit` first, then `$ELPRIS_CONFIG`, then
    /// `./elpriskollen.toml`; falls back to defaults when none exists.
    /// A file named explicitly or through the environment must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_with(explicit, Path::new("."), |key| std::env::var(key).ok())
    }

    /// [`CliConfig::load`] with the working directory and environment supplied by the caller
    pub fn load_with(
        explicit: Option<&Path>,
        search_dir: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| env(CONFIG_PATH_ENV).map(PathBuf::from));

        let mut config = match named {
            Some(path) => Self::from_file(&path)?,
            None => {
                let implicit = search_dir.join(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::from_file(&implicit)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env_overrides(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = env(BASE_URL_ENV) {
            self.api_base_url = url;
        }

        if let Some(code) = env(LANG_ENV) {
            self.language = code
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("{LANG_ENV}: {e}")))?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api_base_url must not be empty".to_owned()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
