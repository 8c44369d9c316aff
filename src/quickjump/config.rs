use crate::error::{QuickJumpError, Result};
use crate::keygen::{KeyPolicy, DEFAULT_KEY_LENGTH, DEFAULT_MAX_KEY_LENGTH};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DB_FILENAME: &str = "quickjump.json";

/// Configuration for quickjump, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct QuickJumpConfig {
    /// Database file; the platform data dir is used when unset
    #[serde(default)]
    pub db_file: Option<PathBuf>,

    /// Length of freshly generated keys
    #[serde(default = "default_key_length")]
    pub key_length: usize,

    /// Longest key tried before giving up on collisions
    #[serde(default = "default_max_key_length")]
    pub max_key_length: usize,
}

fn default_key_length() -> usize {
    DEFAULT_KEY_LENGTH
}

fn default_max_key_length() -> usize {
    DEFAULT_MAX_KEY_LENGTH
}

impl Default for QuickJumpConfig {
    fn default() -> Self {
        Self {
            db_file: None,
            key_length: DEFAULT_KEY_LENGTH,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
        }
    }
}

impl QuickJumpConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QuickJumpError::Io)?;
        let config: QuickJumpConfig = serde_json::from_str(&content).map_err(|e| {
            QuickJumpError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        config.key_policy()?;
        Ok(config)
    }

    pub fn key_policy(&self) -> Result<KeyPolicy> {
        KeyPolicy::new(self.key_length, self.max_key_length)
    }

    /// Database location: explicit override, then config, then `default_data_dir`.
    ///
    /// A relative `db_file` in the config is taken relative to `config_dir`;
    /// a relative override is made absolute against the startup directory.
    /// `default_data_dir` is only consulted when neither is set.
    pub fn resolve_db_file<F>(
        &self,
        config_dir: &Path,
        override_path: Option<PathBuf>,
        default_data_dir: F,
    ) -> Result<PathBuf>
    where
        F: FnOnce() -> Result<PathBuf>,
    {
        if let Some(path) = override_path {
            return std::path::absolute(&path).map_err(|e| {
                QuickJumpError::Config(format!("Bad database path {}: {}", path.display(), e))
            });
        }
        match &self.db_file {
            Some(path) => Ok(config_dir.join(path)),
            None => Ok(default_data_dir()?.join(DB_FILENAME)),
        }
    }
}

/// Platform directories for quickjump (`~/.config/quickjump`, `~/.local/share/quickjump`, ...)
pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "quickjump", "quickjump").ok_or_else(|| {
        QuickJumpError::Config("Could not determine the home directory".to_string())
    })
}
