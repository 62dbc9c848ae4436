use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".fixitrc.json";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Where submitted issues are remembered. `None` disables the cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_location: Option<String>,
    #[serde(default = "default_remote")]
    pub default_remote: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_location: None,
            default_remote: default_remote(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid, or if the
    /// timeout is zero.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.timeout_secs == 0 {
            anyhow::bail!("'timeoutSecs' must be greater than zero");
        }

        if self.default_remote.trim().is_empty() {
            anyhow::bail!("'defaultRemote' must not be empty");
        }

        Ok(())
    }

    /// Resolve `cacheLocation` against the working-tree root.
    pub fn cache_path(&self, root: &Path) -> Option<PathBuf> {
        self.cache_location
            .as_deref()
            .filter(|location| !location.is_empty())
            .map(|location| root.join(location))
    }

    /// Compiled `ignores` patterns. Call [`Config::validate`] first.
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config {
        cache_location: Some(".fixit-cache.json".to_string()),
        ..Default::default()
    };
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
