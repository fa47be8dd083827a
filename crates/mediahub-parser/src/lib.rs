//! # mediahub-parser
//!
//! Metadata extraction for noisy media file and directory names.
//!
//! Release names mix Latin and Chinese text, scene tags and free-form
//! subtitles. This crate recovers the title (Chinese and other-script
//! variants), year, season and episode ranges, resolution, source, codecs
//! and part markers from them.
//!
//! ## Quick Start
//!
//! ```
//! use mediahub_parser::{parse, MediaType};
//!
//! let info = parse("Friends.S01E02.1080p.WEB-DL.x264-NTb").unwrap();
//! let meta = info.meta();
//!
//! assert_eq!(meta.en_name, "Friends");
//! assert_eq!(meta.seasons.begin(), Some(1));
//! assert_eq!(meta.episodes.begin(), Some(2));
//! assert_eq!(meta.media_type, MediaType::Tv);
//! ```
//!
//! ## Subtitles and single files
//!
//! ```
//! use mediahub_parser::Parser;
//! use mediahub_parser::config::ParserConfig;
//!
//! let parser = Parser::new(ParserConfig::builder().is_file(true).build());
//! let info = parser.parse_with_subtitle("Some.Show.2021.mkv", "全12集").unwrap();
//!
//! assert_eq!(info.meta().total_episodes(), 12);
//! ```

pub mod config;
pub mod lexer;
pub mod model;
pub mod normalize;
pub mod numeral;
mod parser;

use std::sync::Arc;

pub use model::{MediaType, Meta, MetaInfo, NumberRange, ParseError};
pub use normalize::{
    AnimeClassifier, NeverAnime, NormalizeError, Normalized, PassthroughNormalizer,
    TitleNormalizer,
};

use config::ParserConfig;

/// Parse a name into metadata using default settings.
///
/// Returns `None` for an empty name.
///
/// ```
/// use mediahub_parser::parse;
///
/// let info = parse("Movie.Name.2020.1080p.BluRay.x264-GROUP").unwrap();
/// assert_eq!(info.meta().year, Some(2020));
/// assert_eq!(info.title(), "Movie Name (2020)");
/// assert!(parse("").is_none());
/// ```
pub fn parse(title: &str) -> Option<MetaInfo> {
    Parser::default().parse(title)
}

/// A configurable parser.
///
/// A `Parser` holds no per-call state and can be shared between threads;
/// every call builds its own token stream and record.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
    normalizer: Arc<dyn TitleNormalizer>,
    anime: Arc<dyn AnimeClassifier>,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            normalizer: Arc::new(PassthroughNormalizer),
            anime: Arc::new(NeverAnime),
        }
    }

    /// Use `normalizer` to clean titles and subtitles before parsing.
    pub fn with_normalizer(mut self, normalizer: Arc<dyn TitleNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Use `classifier` to route anime titles around the video grammar.
    pub fn with_anime_classifier(mut self, classifier: Arc<dyn AnimeClassifier>) -> Self {
        self.anime = classifier;
        self
    }

    /// Replace the configuration, keeping the collaborators.
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a name without a subtitle.
    pub fn parse(&self, title: &str) -> Option<MetaInfo> {
        self.parse_with_subtitle(title, "")
    }

    /// Parse a name together with its free-text subtitle.
    ///
    /// Returns `None` for an empty name. A failing normalizer is logged and
    /// the raw name is parsed instead.
    pub fn parse_with_subtitle(&self, title: &str, subtitle: &str) -> Option<MetaInfo> {
        if title.is_empty() {
            return None;
        }

        let normalized = self.normalizer.normalize(title).unwrap_or_else(|e| {
            tracing::warn!(title, error = %e, "title normalization failed");
            Normalized::unchanged(title)
        });
        let subtitle = match self.normalizer.normalize(subtitle) {
            Ok(cleaned) => cleaned.title,
            Err(_) => subtitle.to_owned(),
        };

        let mut info = if self.config.media_type_hint == Some(MediaType::Anime)
            || self.anime.is_anime(&normalized.title)
        {
            MetaInfo::Anime(Meta {
                title: normalized.title.clone(),
                subtitle,
                media_type: MediaType::Anime,
                is_file: self.config.is_file,
                ..Meta::default()
            })
        } else {
            MetaInfo::Video(parser::parse_video(
                &normalized.title,
                &subtitle,
                self.config.is_file,
            ))
        };

        let meta = info.meta_mut();
        meta.org_string = title.to_owned();
        meta.rev_string = normalized.title;
        meta.replaced_words = normalized.replaced_words;
        meta.ignored_words = normalized.ignored_words;
        meta.offset_words = normalized.offset_words;

        tracing::debug!(title, name = info.name(), media_type = %info.meta().media_type, "parsed");
        Some(info)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FailingNormalizer;

    impl TitleNormalizer for FailingNormalizer {
        fn normalize(&self, _title: &str) -> Result<Normalized, NormalizeError> {
            Err(NormalizeError::EmptyTitle)
        }
    }

    #[derive(Debug)]
    struct Upper;

    impl TitleNormalizer for Upper {
        fn normalize(&self, title: &str) -> Result<Normalized, NormalizeError> {
            Ok(Normalized {
                title: title.replace("Film", "Movie"),
                replaced_words: vec!["Film => Movie".into()],
                ..Normalized::default()
            })
        }
    }

    #[derive(Debug)]
    struct Brackets;

    impl AnimeClassifier for Brackets {
        fn is_anime(&self, title: &str) -> bool {
            title.starts_with('[')
        }
    }

    #[test]
    fn test_empty_title_is_nothing_to_parse() {
        assert!(parse("").is_none());
        assert!(Parser::default().parse_with_subtitle("", "第1集").is_none());
    }

    #[test]
    fn test_parse_tv_episode() {
        let info = parse("Friends.S01E02.1080p.WEB-DL.x264-NTb").unwrap();
        assert!(matches!(info, MetaInfo::Video(_)));
        let meta = info.meta();
        assert!(meta.en_name.starts_with("Friends"));
        assert_eq!(meta.seasons.begin(), Some(1));
        assert_eq!(meta.total_seasons(), 1);
        assert_eq!(meta.episodes.begin(), Some(2));
        assert_eq!(meta.total_episodes(), 1);
        assert_eq!(meta.resolution.as_deref(), Some("1080p"));
        assert_eq!(meta.source.as_deref(), Some("WEB-DL"));
        assert_eq!(meta.video_codec.as_deref(), Some("x264"));
        assert_eq!(meta.media_type, MediaType::Tv);
    }

    #[test]
    fn test_parse_movie() {
        let info = parse("Movie.Name.2020.1080p.BluRay.x264-GROUP").unwrap();
        let meta = info.meta();
        assert_eq!(meta.year, Some(2020));
        assert_eq!(meta.resolution.as_deref(), Some("1080p"));
        assert_eq!(meta.source.as_deref(), Some("BluRay"));
        assert!(meta.video_codec.as_deref().unwrap().contains("264"));
        assert_eq!(meta.media_type, MediaType::Movie);
        assert_eq!(info.name(), "Movie Name");
        assert_eq!(info.title(), "Movie Name (2020)");
    }

    #[test]
    fn test_numbered_file() {
        let parser = Parser::new(ParserConfig::builder().is_file(true).build());
        let meta = parser.parse("03.mp4").unwrap().into_meta();
        assert_eq!(meta.episodes.begin(), Some(3));
        assert_eq!(meta.total_episodes(), 1);
        assert_eq!(meta.media_type, MediaType::Tv);
        assert_eq!(meta.org_string, "03.mp4");
    }

    #[test]
    fn test_subtitle_season_and_episode() {
        let info = Parser::default()
            .parse_with_subtitle("Some.Show.2021", "第3季 第5集")
            .unwrap();
        let meta = info.meta();
        assert_eq!(meta.seasons.begin(), Some(3));
        assert_eq!(meta.total_seasons(), 1);
        assert_eq!(meta.episodes.begin(), Some(5));
        assert_eq!(meta.total_episodes(), 1);
        assert_eq!(meta.media_type, MediaType::Tv);
        assert_eq!(meta.subtitle, "第3季 第5集");
    }

    #[test]
    fn test_normalizer_failure_falls_back_to_raw_title() {
        let parser = Parser::default().with_normalizer(Arc::new(FailingNormalizer));
        let meta = parser.parse("Movie.2020.1080p").unwrap().into_meta();
        assert_eq!(meta.en_name, "Movie");
        assert_eq!(meta.rev_string, "Movie.2020.1080p");
    }

    #[test]
    fn test_normalizer_provenance_recorded() {
        let parser = Parser::default().with_normalizer(Arc::new(Upper));
        let meta = parser.parse("Film.2020.1080p").unwrap().into_meta();
        assert_eq!(meta.org_string, "Film.2020.1080p");
        assert_eq!(meta.rev_string, "Movie.2020.1080p");
        assert_eq!(meta.en_name, "Movie");
        assert_eq!(meta.replaced_words, vec!["Film => Movie"]);
    }

    #[test]
    fn test_anime_routing() {
        let parser = Parser::default().with_anime_classifier(Arc::new(Brackets));
        let info = parser.parse("[Group] Title - 01 [1080p]").unwrap();
        assert!(matches!(info, MetaInfo::Anime(_)));
        assert_eq!(info.name(), "[Group] Title - 01 [1080p]");
        assert!(info.meta().resolution.is_none());

        let hinted = Parser::new(
            ParserConfig::builder()
                .media_type_hint(MediaType::Anime)
                .build(),
        );
        let info = hinted.parse("Title.S01E01").unwrap();
        assert_eq!(info.meta().media_type, MediaType::Anime);
        assert!(info.meta().seasons.is_empty());
    }

    #[test]
    fn test_media_type_never_unknown_for_video() {
        for title in ["x", "Movie", "Show.S02", "流浪地球", "第3集", "..."] {
            let meta = parse(title).unwrap().into_meta();
            assert!(meta.media_type.is_video(), "{title}");
        }
    }

    #[test]
    fn test_totals_follow_ranges() {
        for title in [
            "Show.S01-S04.1080p",
            "Show.E01-E12.720p",
            "Show.S02E05.1080p",
            "Movie.2019.1080p",
        ] {
            let meta = parse(title).unwrap().into_meta();
            for range in [meta.seasons, meta.episodes] {
                let expected = match (range.begin(), range.end()) {
                    (Some(b), Some(e)) => e - b + 1,
                    (Some(_), None) => 1,
                    _ => 0,
                };
                assert_eq!(range.total(), expected, "{title}");
            }
        }
    }

    #[test]
    fn test_reparse_of_normalized_title_is_identical() {
        let parser = Parser::default();
        for title in [
            "Friends.S01E02.1080p.WEB-DL.x264-NTb",
            "流浪地球.The.Wandering.Earth.2019.1080p.WEB-DL.H264.AAC",
            "[Group] Show.S01E01.720p",
        ] {
            let first = parser.parse(title).unwrap().into_meta();
            let second = parser.parse(&first.rev_string).unwrap().into_meta();
            assert_eq!(first, second, "{title}");
        }
    }

    #[test]
    fn test_parser_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser>();
    }
}
