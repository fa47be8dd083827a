mod types;

pub use types::*;

use crate::words::WordListNormalizer;
use anyhow::{Context, Result};
use mediahub_parser::{NormalizeError, Parser};
use std::path::Path;
use std::sync::Arc;

/// Configuration validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("scan.threads cannot be 0")]
    ZeroThreads,

    #[error("invalid [words] section")]
    Words(#[from] NormalizeError),
}

impl Config {
    /// Build a parser with the configured settings and word rules.
    pub fn build_parser(&self) -> Result<Parser, ConfigError> {
        let parser = Parser::new(self.parser.to_parser_config());
        if self.words.is_empty() {
            return Ok(parser);
        }
        let normalizer = WordListNormalizer::from_config(&self.words)?;
        Ok(parser.with_normalizer(Arc::new(normalizer)))
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {:?}", path))?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./mediahub.toml",
        "./config.toml",
        "~/.config/mediahub/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file: {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.scan.threads == Some(0) {
        return Err(ConfigError::ZeroThreads);
    }

    WordListNormalizer::from_config(&config.words)?;

    Ok(())
}
