//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then command-line overrides applied by the CLI layer. Every field has a
//! default, so a config file only needs the keys it changes.
//!
//! ```toml
//! [processing]
//! merge_progress_interval = 1000
//!
//! [output]
//! workbook_name = "Quarterly NCOA_39_40_41"
//! ```

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_COUNTS_FILE, DEFAULT_ELIGIBLE_SHEET,
    DEFAULT_FILTER_FILE, DEFAULT_FILTERED_FILE, DEFAULT_INELIGIBLE_SHEET,
    DEFAULT_MERGE_PROGRESS_INTERVAL, DEFAULT_MERGED_FILE, DEFAULT_PARSE_PROGRESS_INTERVAL,
    DEFAULT_PARSED_FILE, DEFAULT_WORKBOOK_NAME,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Global configuration for NCOA processing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

/// Settings that control how records are processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Filter list looked up in the output directory when none is given
    pub filter_file_name: String,

    /// Records between progress log lines in the parse pass
    pub parse_progress_interval: usize,

    /// Feed rows between progress log lines in the merge pass
    pub merge_progress_interval: usize,

    /// Draw progress bars on the terminal
    pub show_progress: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            filter_file_name: DEFAULT_FILTER_FILE.to_string(),
            parse_progress_interval: DEFAULT_PARSE_PROGRESS_INTERVAL,
            merge_progress_interval: DEFAULT_MERGE_PROGRESS_INTERVAL,
            show_progress: true,
        }
    }
}

/// Output location and file names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory; defaults to the directory of the pass's input
    pub output_dir: Option<PathBuf>,

    pub parsed_file: String,
    pub filtered_file: String,
    pub counts_file: String,
    pub merged_file: String,
    pub workbook_name: String,
    pub eligible_sheet: String,
    pub ineligible_sheet: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            parsed_file: DEFAULT_PARSED_FILE.to_string(),
            filtered_file: DEFAULT_FILTERED_FILE.to_string(),
            counts_file: DEFAULT_COUNTS_FILE.to_string(),
            merged_file: DEFAULT_MERGED_FILE.to_string(),
            workbook_name: DEFAULT_WORKBOOK_NAME.to_string(),
            eligible_sheet: DEFAULT_ELIGIBLE_SHEET.to_string(),
            ineligible_sheet: DEFAULT_INELIGIBLE_SHEET.to_string(),
        }
    }
}

impl OutputConfig {
    /// Configured output directory, or the directory containing `input`
    pub fn resolve_dir(&self, input: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => input
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

impl Config {
    /// Platform config file location, e.g. `~/.config/ncoa-processor/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine the user config directory"))
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config file {}", path.display()), e))?;
        let config = Self::from_toml(&content).map_err(|e| {
            Error::configuration(format!("{}: {}", path.display(), e))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Defaults overlaid with the config file, if one is given
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject settings that would make a run meaningless
    pub fn validate(&self) -> Result<()> {
        if self.processing.parse_progress_interval == 0 {
            return Err(Error::configuration(
                "parse_progress_interval must be greater than 0",
            ));
        }
        if self.processing.merge_progress_interval == 0 {
            return Err(Error::configuration(
                "merge_progress_interval must be greater than 0",
            ));
        }

        let names = [
            ("filter_file_name", &self.processing.filter_file_name),
            ("parsed_file", &self.output.parsed_file),
            ("filtered_file", &self.output.filtered_file),
            ("counts_file", &self.output.counts_file),
            ("merged_file", &self.output.merged_file),
            ("workbook_name", &self.output.workbook_name),
            ("eligible_sheet", &self.output.eligible_sheet),
            ("ineligible_sheet", &self.output.ineligible_sheet),
        ];
        for (key, value) in names {
            if value.trim().is_empty() {
                return Err(Error::configuration(format!("{} must not be empty", key)));
            }
        }

        if self.output.eligible_sheet == self.output.ineligible_sheet {
            return Err(Error::configuration(
                "eligible_sheet and ineligible_sheet must differ",
            ));
        }

        Ok(())
    }
}
