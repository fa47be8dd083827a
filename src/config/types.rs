use mediahub_parser::config::ParserConfig;
use mediahub_parser::MediaType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserSection,

    #[serde(default)]
    pub words: WordsConfig,

    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ParserSection {
    /// Treat every input as a single file name
    #[serde(default)]
    pub is_file: bool,

    /// Keep titles as anime records instead of classifying them
    #[serde(default)]
    pub anime: bool,
}

impl ParserSection {
    pub fn to_parser_config(&self) -> ParserConfig {
        let builder = ParserConfig::builder().is_file(self.is_file);
        if self.anime {
            builder.media_type_hint(MediaType::Anime).build()
        } else {
            builder.build()
        }
    }
}

/// Custom word rules applied to titles before parsing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WordsConfig {
    /// Regular expressions removed from titles
    #[serde(default)]
    pub ignored: Vec<String>,

    /// `pattern => replacement` rules
    #[serde(default)]
    pub replaced: Vec<String>,

    /// `locator >> offset` episode offset rules, recorded when the locator
    /// occurs in a title
    #[serde(default)]
    pub offset: Vec<String>,
}

impl WordsConfig {
    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty() && self.replaced.is_empty() && self.offset.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Only parse files with a known video extension (default: true)
    #[serde(default = "default_extensions_only")]
    pub extensions_only: bool,

    /// Worker threads for parsing; unset uses one per CPU
    #[serde(default)]
    pub threads: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions_only: default_extensions_only(),
            threads: None,
        }
    }
}

fn default_extensions_only() -> bool {
    true
}
