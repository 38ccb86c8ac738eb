//! Run configuration: built-in defaults, optional TOML file, CLI flags.
//!
//! Precedence is CLI flag, then config file, then the constants in
//! [`morsel_model::config`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use morsel_model::{
    CanonicalField, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH, DEFAULT_PATTERN, ModelError,
    SynonymTable,
};

use crate::cli::{RunArgs, SynonymsArgs};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid synonyms in {path}: {source}")]
    Synonyms {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

/// Contents of a `--config` TOML file. Every key is optional.
///
/// ```toml
/// input_directory = "extracts"
/// pattern = "daily_sales_*.csv"
/// output_path = "out/formatted_data.csv"
/// report_path = "out/report.json"
///
/// [synonyms]
/// region = ["territory"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input_directory: Option<PathBuf>,
    pub pattern: Option<String>,
    pub output_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    #[serde(default)]
    pub synonyms: BTreeMap<CanonicalField, Vec<String>>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default synonym table with this file's extensions appended.
    pub fn synonym_table(&self, path: &Path) -> Result<SynonymTable, ConfigError> {
        let mut table = SynonymTable::default();
        for (field, extra) in &self.synonyms {
            table
                .extend(*field, extra)
                .map_err(|source| ConfigError::Synonyms {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        for overlap in table.overlaps() {
            warn!(
                synonym = %overlap.synonym,
                first = %overlap.first,
                second = %overlap.second,
                "synonym accepted by two fields"
            );
        }
        Ok(table)
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_directory: PathBuf,
    pub pattern: String,
    pub output_path: PathBuf,
    pub report_path: Option<PathBuf>,
    pub synonyms: SynonymTable,
    pub dry_run: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_directory: PathBuf::from(DEFAULT_INPUT_DIR),
            pattern: DEFAULT_PATTERN.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            report_path: None,
            synonyms: SynonymTable::default(),
            dry_run: false,
        }
    }
}

impl RunConfig {
    /// Resolves settings from CLI arguments and the optional config file.
    pub fn from_args(args: &RunArgs) -> Result<Self, ConfigError> {
        let file = match &args.config {
            Some(path) => Some((ConfigFile::load(path)?, path.as_path())),
            None => None,
        };
        Self::resolve(args, file)
    }

    /// Merges CLI arguments over an already loaded config file.
    pub fn resolve(args: &RunArgs, file: Option<(ConfigFile, &Path)>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some((file, path)) = file {
            debug!(config = %path.display(), "loaded config file");
            config.synonyms = file.synonym_table(path)?;
            if let Some(dir) = file.input_directory {
                config.input_directory = dir;
            }
            if let Some(pattern) = file.pattern {
                config.pattern = pattern;
            }
            if let Some(output) = file.output_path {
                config.output_path = output;
            }
            config.report_path = file.report_path;
        }
        if let Some(dir) = &args.input_dir {
            config.input_directory = dir.clone();
        }
        if let Some(pattern) = &args.pattern {
            config.pattern = pattern.clone();
        }
        if let Some(output) = &args.output {
            config.output_path = output.clone();
        }
        if args.report.is_some() {
            config.report_path = args.report.clone();
        }
        config.dry_run = args.dry_run;
        Ok(config)
    }
}

/// Synonym table for the `synonyms` command.
pub fn synonyms_from_args(args: &SynonymsArgs) -> Result<SynonymTable, ConfigError> {
    match &args.config {
        Some(path) => ConfigFile::load(path)?.synonym_table(path),
        None => Ok(SynonymTable::default()),
    }
}
