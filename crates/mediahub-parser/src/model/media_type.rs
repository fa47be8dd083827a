//! Media type enum.

use super::ParseError;

/// What a parsed name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaType {
    Movie,
    /// Series with seasons and episodes
    Tv,
    /// Anime, kept out of the video grammar
    Anime,
    /// Not decided yet. A finished video parse never reports this.
    #[default]
    Unknown,
}

impl MediaType {
    /// Display label.
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "Movie",
            MediaType::Tv => "TV",
            MediaType::Anime => "Anime",
            MediaType::Unknown => "Unknown",
        }
    }

    /// Whether this is a movie or a series, i.e. the output of the video
    /// grammar.
    pub fn is_video(self) -> bool {
        matches!(self, MediaType::Movie | MediaType::Tv)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MediaType {
    type Err = ParseError;

    /// Accepts the display labels plus common English and Chinese aliases,
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let media_type = match s.trim().to_ascii_lowercase().as_str() {
            "movie" | "film" | "电影" => MediaType::Movie,
            "tv" | "tv-series" | "series" | "show" | "电视剧" | "剧集" => MediaType::Tv,
            "anime" | "动漫" | "动画" => MediaType::Anime,
            "unknown" => MediaType::Unknown,
            _ => return Err(ParseError(format!("unknown media type `{}`", s))),
        };
        Ok(media_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        for media_type in [
            MediaType::Movie,
            MediaType::Tv,
            MediaType::Anime,
            MediaType::Unknown,
        ] {
            assert_eq!(media_type.as_str().parse::<MediaType>(), Ok(media_type));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("电视剧".parse::<MediaType>(), Ok(MediaType::Tv));
        assert_eq!(" TV-Series ".parse::<MediaType>(), Ok(MediaType::Tv));
        assert_eq!("电影".parse::<MediaType>(), Ok(MediaType::Movie));
        assert_eq!(
            "cartoon".parse::<MediaType>(),
            Err(ParseError("unknown media type `cartoon`".into()))
        );
    }

    #[test]
    fn test_unknown_until_classified() {
        assert_eq!(MediaType::default(), MediaType::Unknown);
        assert!(!MediaType::Unknown.is_video());
        assert!(!MediaType::Anime.is_video());
        assert!(MediaType::Tv.is_video());
    }
}
