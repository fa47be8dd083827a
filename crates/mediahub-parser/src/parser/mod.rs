//! Rule pipeline for video titles.
//!
//! Every token of a title is offered to a fixed, ordered list of rules. The
//! first rule that claims a token hides it from the rules after it. Rules
//! cooperate through [`ParseContext`], which remembers what kind of token was
//! seen last and holds values that are only settled by later tokens.
//!
//! Order matters: a part marker must be seen before the title rule swallows
//! it, the year before resolution, seasons before episodes (so that `S01E02`
//! reaches both) and so on.

mod codec;
mod context;
mod episode;
mod part;
mod patterns;
mod quality;
mod subtitle;
mod title;
mod trim;

use context::{Outcome, ParseContext};
use patterns::{DIY, DIY_RELEASE};
use title::NameState;

use crate::lexer::TokenStream;
use crate::model::{MediaType, Meta};
use crate::numeral::{file_stem, is_digits, is_media_file, to_int};

/// One grammar rule of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Part,
    Name(NameState),
    Year,
    Resolution,
    Season,
    Episode,
    Source,
    VideoCodec,
    AudioCodec,
}

impl Rule {
    /// Only the title rule ever retires for good.
    fn is_complete(&self) -> bool {
        matches!(self, Rule::Name(NameState::Terminated))
    }

    fn apply(&mut self, token: &str, cx: &mut ParseContext, meta: &mut Meta) -> Outcome {
        match self {
            Rule::Part => part::part(token, cx, meta),
            Rule::Name(state) => title::name(state, token, cx, meta),
            Rule::Year => title::year(token, cx, meta),
            Rule::Resolution => quality::resolution(token, cx, meta),
            Rule::Season => episode::season(token, cx, meta),
            Rule::Episode => episode::episode(token, cx, meta),
            Rule::Source => quality::source(token, cx, meta),
            Rule::VideoCodec => codec::video(token, cx, meta),
            Rule::AudioCodec => codec::audio(token, cx, meta),
        }
    }
}

#[derive(Debug)]
struct Pipeline {
    rules: [Rule; 9],
}

impl Pipeline {
    fn new() -> Self {
        Self {
            rules: [
                Rule::Part,
                Rule::Name(NameState::Active),
                Rule::Year,
                Rule::Resolution,
                Rule::Season,
                Rule::Episode,
                Rule::Source,
                Rule::VideoCodec,
                Rule::AudioCodec,
            ],
        }
    }

    fn run_token(&mut self, token: &str, cx: &mut ParseContext, meta: &mut Meta) {
        for rule in self.rules.iter_mut().filter(|rule| !rule.is_complete()) {
            if rule.apply(token, cx, meta) == Outcome::Claimed {
                tracing::trace!(token, ?rule, "token claimed");
                break;
            }
        }
    }
}

/// Classify a movie or TV title.
///
/// `title` is expected to be normalized already; `subtitle` is free text
/// that may carry season and episode counts.
pub(crate) fn parse_video(title: &str, subtitle: &str, is_file: bool) -> Meta {
    let mut meta = Meta::new(title, subtitle, is_file);

    // Directories of bare numbered files: "03.mp4" is episode 3.
    let stem = file_stem(title);
    if is_media_file(title) && is_digits(stem) && stem.len() < 5 {
        meta.episodes.start(to_int(stem, 0));
        meta.media_type = MediaType::Tv;
        return meta;
    }

    let trimmed = trim::pre_trim(title);
    let mut cx = ParseContext::new(TokenStream::new(&trimmed));
    let mut pipeline = Pipeline::new();
    while let Ok(token) = cx.tokens.current() {
        let token = token.to_owned();
        pipeline.run_token(&token, &mut cx, &mut meta);
        if cx.tokens.advance().is_err() {
            break;
        }
    }

    finish(title, cx, &mut meta);
    meta
}

fn finish(title: &str, mut cx: ParseContext, meta: &mut Meta) {
    title::settle_trailing_unknown(&mut cx, meta);
    meta.effects = cx.effects;
    let source = cx.source.trim();
    if !source.is_empty() {
        let diy = (!meta.subtitle.is_empty() && DIY.is_match(&meta.subtitle))
            || DIY_RELEASE.is_match(title);
        meta.source = Some(if diy && source.contains("BluRay") {
            format!("{source} DIY")
        } else {
            source.to_owned()
        });
    }

    if !subtitle::extract(title, meta) {
        let subtitle = meta.subtitle.clone();
        subtitle::extract(&subtitle, meta);
    }

    if meta.media_type == MediaType::Unknown {
        meta.media_type = MediaType::Movie;
    }
    if meta
        .part
        .as_deref()
        .is_some_and(|part| part.eq_ignore_ascii_case("PART"))
    {
        meta.part = None;
    }
}
