use std::path::Path;

use anyhow::{Context, Result};
use csvguard_core::{ReaderConfig, ReaderConfigBuilder, RuleSet};
use serde::Deserialize;
use tracing::warn;

use crate::errors::ConfigError;

/// TOML rule configuration.
///
/// ```toml
/// [reader]
/// comment_prefix = "#"
///
/// [[file]]
/// path = "./data/dev.csv"
///
/// [[file.column]]
/// name = "id"
/// rules = ["unique", "order_asc"]
/// ```
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reader: Option<Reader>,
    #[serde(default)]
    pub file: Vec<File>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Reader {
    pub batch_size: Option<usize>,
    pub comment_prefix: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct File {
    pub path: String,
    #[serde(default)]
    pub column: Vec<Column>,
}

#[derive(Debug, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<String>,
}

impl Config {
    /// Reject configurations that cannot describe any check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file.is_empty() {
            return Err(ConfigError::Empty);
        }
        for (i, file) in self.file.iter().enumerate() {
            if file.path.is_empty() {
                return Err(ConfigError::EmptyPath { index: i + 1 });
            }
            if let Some(j) = file.column.iter().position(|c| c.name.is_empty()) {
                return Err(ConfigError::EmptyColumn {
                    path: file.path.clone(),
                    index: j + 1,
                });
            }
        }
        if self.reader.as_ref().and_then(|r| r.batch_size) == Some(0) {
            return Err(ConfigError::ZeroBatchSize);
        }
        Ok(())
    }

    /// Rule names are copied verbatim, unknown ones are reported when checking.
    pub fn rule_set(&self) -> RuleSet {
        let mut rule_set = RuleSet::new();
        for file in &self.file {
            let entry = rule_set.file(file.path.as_str());
            for column in &file.column {
                if entry.columns().iter().any(|c| c.name == column.name) {
                    warn!(
                        file = %file.path,
                        column = %column.name,
                        "column declared twice, keeping the last rules"
                    );
                }
                entry.column(column.name.as_str(), column.rules.iter().map(String::as_str));
            }
        }
        rule_set
    }

    pub fn reader_config(&self) -> ReaderConfig {
        let mut builder = ReaderConfigBuilder::new();
        if let Some(reader) = &self.reader {
            if let Some(batch_size) = reader.batch_size {
                builder = builder.with_batch_size(batch_size);
            }
            if let Some(prefix) = &reader.comment_prefix {
                builder = builder.with_comment_prefix(prefix.as_str());
            }
        }
        builder.build()
    }
}

pub fn parse_str(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

pub fn parse_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
