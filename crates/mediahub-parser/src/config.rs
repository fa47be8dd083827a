//! Per-parser settings.

use crate::model::MediaType;

/// Settings shared by every call made through one [`crate::Parser`].
///
/// ```
/// use mediahub_parser::config::ParserConfig;
/// use mediahub_parser::MediaType;
///
/// let config = ParserConfig::builder()
///     .is_file(true)
///     .media_type_hint(MediaType::Tv)
///     .build();
/// assert!(config.is_file);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Names refer to single files rather than directories or torrents.
    /// A single file never spans several seasons and at most two episodes.
    /// Default: false
    pub is_file: bool,

    /// Known media type of the inputs, if any.
    /// `Anime` skips the video grammar and keeps the title as is.
    pub media_type_hint: Option<MediaType>,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the defaults and override selected settings.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder returned by [`ParserConfig::builder`].
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
}

impl ParserConfigBuilder {
    /// Mark inputs as single file names.
    pub fn is_file(mut self, is_file: bool) -> Self {
        self.config.is_file = is_file;
        self
    }

    /// Declare the media type of the inputs.
    pub fn media_type_hint(mut self, hint: MediaType) -> Self {
        self.config.media_type_hint = Some(hint);
        self
    }

    pub fn build(self) -> ParserConfig {
        self.config
    }
}
