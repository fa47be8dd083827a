//! Scratch state shared by the rules of one parse.

use bitflags::bitflags;

use crate::lexer::TokenStream;
use crate::model::Meta;

bitflags! {
    /// Facts established earlier in the token stream.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct ParseFlags: u8 {
        /// A second Chinese fragment has already been considered for the name.
        const CN_NAME = 0x1;
        /// Something that cannot belong to a title was seen; stop collecting it.
        const NAME = 0x2;
        /// A year has been consumed.
        const YEAR = 0x4;
    }
}

/// Kind of token most recently classified. Bare numbers are read
/// differently depending on what came right before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Phase {
    #[default]
    Start,
    Part,
    ChineseName,
    Name,
    SeasonEpisodeMarker,
    Year,
    Resolution,
    Season,
    Episode,
    Source,
    Effect,
    VideoCodec,
    AudioCodec,
}

/// Result of offering a token to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The rule consumed the token; later rules do not see it.
    Claimed,
    /// The token moves on to the next rule.
    Passed,
}

#[derive(Debug)]
pub(crate) struct ParseContext {
    pub tokens: TokenStream,
    pub flags: ParseFlags,
    pub phase: Phase,
    /// Last significant token, used to rebuild values split by separators
    /// (`WEB` + `DL`, `H` + `264`, `DTS` + `5` + `1`).
    pub last_token: String,
    /// A number that could still turn out to be a year, an episode or part
    /// of the title.
    pub unknown: Option<String>,
    pub source: String,
    pub effects: Vec<String>,
}

impl ParseContext {
    pub fn new(tokens: TokenStream) -> Self {
        Self {
            tokens,
            flags: ParseFlags::empty(),
            phase: Phase::Start,
            last_token: String::new(),
            unknown: None,
            source: String::new(),
            effects: Vec::new(),
        }
    }

    /// Whether the token stream has already produced a year, resolution,
    /// source, season or episode. Several rules only fire after the title.
    pub fn has_release_info(&self, meta: &Meta) -> bool {
        meta.year.is_some()
            || meta.resolution.is_some()
            || !self.source.is_empty()
            || !meta.seasons.is_empty()
            || !meta.episodes.is_empty()
    }
}
