// Tue Oct 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ngram_length: usize,
    pub ngram_min_count: usize,
    pub min_match_count: usize,
    pub output_width: usize,
    pub max_threads: usize,
    pub show_progress: bool,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ngram_length: 8,
            ngram_min_count: 5,
            min_match_count: 1,
            output_width: 16,
            max_threads: num_cpus::get(),
            show_progress: true,
            color: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a JSON config file. Missing fields fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_ngram_length(mut self, length: usize) -> Self {
        self.ngram_length = length;
        self
    }

    pub fn with_output_width(mut self, width: usize) -> Self {
        self.output_width = width;
        self
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = threads;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ngram_length == 0 {
            return Err(ConfigError::Invalid("ngram_length must be greater than 0".to_string()));
        }
        if self.output_width == 0 {
            return Err(ConfigError::Invalid("output_width must be greater than 0".to_string()));
        }
        if self.max_threads == 0 {
            return Err(ConfigError::Invalid("max_threads must be greater than 0".to_string()));
        }
        Ok(())
    }
}
