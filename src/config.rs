use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".keysyncrc.json";

pub const DEFAULT_LOCALES: &[&str] = &["en", "it", "fr", "de"];

pub const DEFAULT_CATALOG_FILE: &str = "translation.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Locale codes; the first one is the reference locale.
    #[serde(default = "default_locales", alias = "langs")]
    pub locales: Vec<String>,
    /// Key prefixes always kept, on top of the ones found in source.
    #[serde(default)]
    pub preserve: Vec<String>,
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,
    /// Glob patterns of source paths to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Source file extensions to scan. Empty scans every text file.
    #[serde(default)]
    pub extensions: Vec<String>,
}

fn default_locales() -> Vec<String> {
    DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect()
}

fn default_catalog_file() -> String {
    DEFAULT_CATALOG_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: default_locales(),
            preserve: Vec::new(),
            catalog_file: default_catalog_file(),
            ignores: Vec::new(),
            extensions: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        let catalog_file = self.catalog_file.as_str();
        if catalog_file.trim().is_empty()
            || catalog_file.trim() != catalog_file
            || catalog_file.contains(['/', '\\'])
        {
            bail!(
                "Invalid 'catalogFile': \"{}\" (expected a plain file name such as \"{}\")",
                self.catalog_file,
                DEFAULT_CATALOG_FILE
            );
        }

        Ok(())
    }
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
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config came from, if not from defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Load the config from an explicit path, or search upward from `start_dir`.
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<ConfigLoadResult> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(start_dir),
    };

    match path {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            source: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}

/// Split a comma-separated list, trimming entries and dropping blanks.
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
