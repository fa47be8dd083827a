//! Serializable views of parse results for CLI output.

use crate::scan::ScanEntry;
use mediahub_parser::{MetaInfo, NumberRange};
use serde::Serialize;

/// Flat view of one parse result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub input: String,
    pub title: String,
    pub name: String,
    pub cn_name: String,
    pub en_name: String,
    pub media_type: String,
    pub year: Option<u16>,
    pub season_begin: Option<u32>,
    pub season_end: Option<u32>,
    pub total_seasons: u32,
    pub episode_begin: Option<u32>,
    pub episode_end: Option<u32>,
    pub total_episodes: u32,
    pub resolution: Option<String>,
    pub source: Option<String>,
    pub effects: Vec<String>,
    pub video_codec: Option<String>,
    pub audio_codec: Option<String>,
    pub part: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    pub is_file: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replaced_words: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored_words: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub offset_words: Vec<String>,
}

impl ParseReport {
    /// Compact season/episode label such as `S01E02`, `S01-S04` or
    /// `E01-E12`. Empty when neither range is known.
    pub fn season_episode(&self) -> String {
        let mut label = String::new();
        push_range(&mut label, 'S', self.season_begin, self.season_end);
        push_range(&mut label, 'E', self.episode_begin, self.episode_end);
        label
    }
}

fn push_range(label: &mut String, prefix: char, begin: Option<u32>, end: Option<u32>) {
    if let Some(begin) = begin {
        label.push_str(&format!("{}{:02}", prefix, begin));
        if let Some(end) = end {
            label.push_str(&format!("-{}{:02}", prefix, end));
        }
    }
}

impl From<&MetaInfo> for ParseReport {
    fn from(info: &MetaInfo) -> Self {
        let meta = info.meta();
        let (season_begin, season_end) = bounds(&meta.seasons);
        let (episode_begin, episode_end) = bounds(&meta.episodes);
        Self {
            input: meta.org_string.clone(),
            title: info.title(),
            name: info.name().to_owned(),
            cn_name: meta.cn_name.clone(),
            en_name: meta.en_name.clone(),
            media_type: meta.media_type.to_string(),
            year: meta.year,
            season_begin,
            season_end,
            total_seasons: meta.total_seasons(),
            episode_begin,
            episode_end,
            total_episodes: meta.total_episodes(),
            resolution: meta.resolution.clone(),
            source: meta.source.clone(),
            effects: meta.effects.clone(),
            video_codec: meta.video_codec.clone(),
            audio_codec: meta.audio_codec.clone(),
            part: meta.part.clone(),
            subtitle: meta.subtitle.clone(),
            is_file: meta.is_file,
            replaced_words: meta.replaced_words.clone(),
            ignored_words: meta.ignored_words.clone(),
            offset_words: meta.offset_words.clone(),
        }
    }
}

fn bounds(range: &NumberRange) -> (Option<u32>, Option<u32>) {
    (range.begin(), range.end())
}

/// A [`ParseReport`] tagged with the file it came from.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    #[serde(flatten)]
    pub report: ParseReport,
}

impl From<&ScanEntry> for FileReport {
    fn from(entry: &ScanEntry) -> Self {
        Self {
            path: entry.path.display().to_string(),
            report: ParseReport::from(&entry.info),
        }
    }
}
