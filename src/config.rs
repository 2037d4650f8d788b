//! Report configuration.
//!
//! A report is driven by a JSON file such as:
//!
//! ```json
//! {
//!   "history_dir": "C:/Users/me/AppData/Roaming/winamax/documents/accounts/me/history",
//!   "username": "me",
//!   "html_output": "open_raises.html"
//! }
//! ```
//!
//! Every field except `history_dir` and `username` has a default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::{HistoryFormat, PatternError};

/// Configuration for one report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory holding the room's history files
    pub history_dir: PathBuf,

    /// Player whose hands are analysed, exactly as written in the logs
    pub username: String,

    /// Extension of history files (without the dot)
    #[serde(default = "default_extension")]
    pub file_extension: String,

    /// Files whose name contains this (case-insensitive) are skipped.
    ///
    /// Winamax writes a tournament summary next to each history; those
    /// carry no hands.
    #[serde(default = "default_skip_token")]
    pub skip_name_token: String,

    /// Worker threads for parsing. `None` uses all cores.
    #[serde(default)]
    pub threads: Option<usize>,

    /// Write the matrices as JSON here
    #[serde(default)]
    pub json_output: Option<PathBuf>,

    /// Write an HTML heatmap here
    #[serde(default)]
    pub html_output: Option<PathBuf>,

    /// Print the grids to the terminal
    #[serde(default = "default_true")]
    pub print_grids: bool,

    #[serde(default)]
    pub format: HistoryFormat,
}

fn default_extension() -> String {
    "txt".to_string()
}

fn default_skip_token() -> String {
    "summary".to_string()
}

fn default_true() -> bool {
    true
}

impl ReportConfig {
    /// Configuration with defaults for everything but the inputs.
    pub fn new(history_dir: impl Into<PathBuf>, username: impl Into<String>) -> Self {
        Self {
            history_dir: history_dir.into(),
            username: username.into(),
            file_extension: default_extension(),
            skip_name_token: default_skip_token(),
            threads: None,
            json_output: None,
            html_output: None,
            print_grids: true,
            format: HistoryFormat::default(),
        }
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.username.trim().is_empty() {
            return Err(ConfigError::EmptyUsername);
        }

        if self.username.contains(|c: char| c == '\n' || c == '\r') {
            return Err(ConfigError::MultilineUsername);
        }

        if self.file_extension.is_empty() {
            return Err(ConfigError::EmptyExtension);
        }

        if self.threads == Some(0) {
            return Err(ConfigError::InvalidThreads);
        }

        if self.format.excluded_token.is_empty() {
            return Err(ConfigError::EmptyToken("excluded_token"));
        }

        if self.format.variant_tokens.iter().all(|t| t.is_empty()) {
            return Err(ConfigError::EmptyToken("variant_tokens"));
        }

        self.format.marker_regex()?;
        Ok(())
    }

    /// Builder method: set worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Builder method: write JSON output.
    pub fn with_json_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_output = Some(path.into());
        self
    }

    /// Builder method: write HTML output.
    pub fn with_html_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.html_output = Some(path.into());
        self
    }

    /// Builder method: set the history format.
    pub fn with_format(mut self, format: HistoryFormat) -> Self {
        self.format = format;
        self
    }
}

/// Errors that can occur when loading report configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("username is empty")]
    EmptyUsername,

    #[error("username spans several lines")]
    MultilineUsername,

    #[error("file extension is empty")]
    EmptyExtension,

    #[error("threads must be at least 1")]
    InvalidThreads,

    #[error("format.{0} is empty")]
    EmptyToken(&'static str),

    #[error(transparent)]
    Pattern(#[from] PatternError),
}
