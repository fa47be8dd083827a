//! The metadata record populated by one parse.

use super::{MediaType, NumberRange};
use crate::numeral::is_chinese;

/// Everything recovered from one media name.
///
/// Text fields use an empty string for "not found"; single-valued
/// classification fields use `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meta {
    /// Input exactly as the caller supplied it
    pub org_string: String,
    /// Input after the title normalizer ran
    pub rev_string: String,
    /// Explicit title, only set for records that skip the step pipeline
    pub title: String,
    /// Free-text subtitle accompanying the name
    pub subtitle: String,
    /// Movie, TV series or anime
    pub media_type: MediaType,
    /// Title written in Chinese script
    pub cn_name: String,
    /// Title written in any other script
    pub en_name: String,
    /// Release year
    pub year: Option<u16>,
    /// Season range
    pub seasons: NumberRange,
    /// Episode range
    pub episodes: NumberRange,
    /// Resolution, e.g. `1080p` or `4k`
    pub resolution: Option<String>,
    /// Source, e.g. `BluRay` or `WEB-DL`
    pub source: Option<String>,
    /// Effect tags in first-seen order, without duplicates
    pub effects: Vec<String>,
    /// Video codec, e.g. `x265 10bit`
    pub video_codec: Option<String>,
    /// Audio codec, e.g. `DTS-HD MA 5.1`
    pub audio_codec: Option<String>,
    /// Part or disc label, e.g. `CD2`
    pub part: Option<String>,
    /// Whether the name belongs to a single file rather than a directory
    pub is_file: bool,
    /// Words rewritten by the title normalizer
    pub replaced_words: Vec<String>,
    /// Words removed by the title normalizer
    pub ignored_words: Vec<String>,
    /// Episode offset rules that matched in the title normalizer
    pub offset_words: Vec<String>,
}

impl Meta {
    pub(crate) fn new(title: &str, subtitle: &str, is_file: bool) -> Self {
        Self {
            org_string: title.to_owned(),
            subtitle: subtitle.to_owned(),
            is_file,
            ..Self::default()
        }
    }

    /// The best available name: the Chinese name when it really is Chinese,
    /// otherwise the other-script name, otherwise whatever is present.
    pub fn name(&self) -> &str {
        if !self.cn_name.is_empty() && is_chinese(&self.cn_name) {
            &self.cn_name
        } else if !self.en_name.is_empty() {
            &self.en_name
        } else {
            &self.cn_name
        }
    }

    /// Human-facing title with a ` (year)` suffix when a year is known.
    ///
    /// An explicit [`Meta::title`] wins over the recovered names.
    pub fn display_title(&self) -> String {
        let base = if self.title.is_empty() {
            self.name()
        } else {
            self.title.as_str()
        };
        match self.year {
            Some(year) if !base.is_empty() => format!("{} ({})", base, year),
            _ => base.to_owned(),
        }
    }

    /// Total number of seasons covered.
    pub fn total_seasons(&self) -> u32 {
        self.seasons.total()
    }

    /// Total number of episodes covered.
    pub fn total_episodes(&self) -> u32 {
        self.episodes.total()
    }

    /// Whether any season or episode number was recovered.
    pub fn has_episode_info(&self) -> bool {
        !self.seasons.is_empty() || !self.episodes.is_empty()
    }
}

/// Result of a parse: either a fully classified video record or a plain
/// anime record that only carries the title.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaInfo {
    /// Movie or TV series classified by the step pipeline.
    Video(Meta),
    /// Anime title passed through without classification.
    Anime(Meta),
}

impl MetaInfo {
    /// The raw aggregate.
    pub fn meta(&self) -> &Meta {
        match self {
            MetaInfo::Video(meta) | MetaInfo::Anime(meta) => meta,
        }
    }

    pub(crate) fn meta_mut(&mut self) -> &mut Meta {
        match self {
            MetaInfo::Video(meta) | MetaInfo::Anime(meta) => meta,
        }
    }

    /// Display name, see [`Meta::name`].
    pub fn name(&self) -> &str {
        let meta = self.meta();
        if meta.title.is_empty() {
            meta.name()
        } else {
            &meta.title
        }
    }

    /// Display title with year, see [`Meta::display_title`].
    pub fn title(&self) -> String {
        self.meta().display_title()
    }

    /// Unwrap into the underlying record.
    pub fn into_meta(self) -> Meta {
        match self {
            MetaInfo::Video(meta) | MetaInfo::Anime(meta) => meta,
        }
    }
}
