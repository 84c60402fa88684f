//! Configuration for the command-line front end.
//!
//! Settings are layered: command-line flags override the config file, which
//! overrides the built-in defaults. Both layers are a [`FileConfig`] with
//! every field optional.
//!
//! ```toml
//! top = 20
//! min_count = 2
//! tie_break = "lexical"
//! keep_empty = false
//! format = "tsv"
//! ```

use crate::error::{Error, Result};
use crate::render::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wordfreq_types::{CountOptions, EmptyWordPolicy, TieBreak};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// One layer of settings. Unset fields fall through to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub top: Option<usize>,
    pub min_count: Option<u64>,
    pub tie_break: Option<TieBreak>,
    pub keep_empty: Option<bool>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// Loads a config layer from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: FileConfig = toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Field-wise overlay: values set in `self` win over `base`.
    pub fn over(self, base: FileConfig) -> FileConfig {
        FileConfig {
            top: self.top.or(base.top),
            min_count: self.min_count.or(base.min_count),
            tie_break: self.tie_break.or(base.tie_break),
            keep_empty: self.keep_empty.or(base.keep_empty),
            format: self.format.or(base.format),
        }
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if self.top == Some(0) {
            return Err(Error::InvalidConfigValue {
                field: "top".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.min_count == Some(0) {
            return Err(Error::InvalidConfigValue {
                field: "min_count".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub options: CountOptions,
    pub format: OutputFormat,
}

impl Settings {
    /// Resolves a (merged) config layer against the defaults.
    pub fn resolve(config: &FileConfig) -> Result<Self> {
        config.validate()?;

        let mut options = CountOptions::new();
        if let Some(tie_break) = config.tie_break {
            options = options.with_tie_break(tie_break);
        }
        if config.keep_empty == Some(true) {
            options = options.with_empty_words(EmptyWordPolicy::Keep);
        }
        if let Some(min_count) = config.min_count {
            options = options.with_min_count(min_count);
        }
        if let Some(top) = config.top {
            options = options.with_limit(top);
        }

        Ok(Self {
            options,
            format: config.format.unwrap_or_default(),
        })
    }
}
