//! Season and episode rules.

use regex::Regex;

use super::context::{Outcome, ParseContext, ParseFlags, Phase};
use super::patterns::{EPISODE, SEASON};
use crate::model::{MediaType, Meta, NumberRange};
use crate::numeral::{is_digits, to_int};

/// A single file never spans more than one season.
const FILE_SEASON_SPAN: u32 = 1;
/// A single file may hold a double episode.
const FILE_EPISODE_SPAN: u32 = 2;

/// Record every number captured by `pattern` in `token`. Returns false when
/// the pattern does not match at all.
fn record_captures(pattern: &Regex, token: &str, range: &mut NumberRange) -> bool {
    let Some(caps) = pattern.captures(token) else {
        return false;
    };
    for group in caps.iter().skip(1).flatten() {
        if is_digits(group.as_str()) {
            range.record(to_int(group.as_str(), 0));
        }
    }
    true
}

fn mark_tv(cx: &mut ParseContext, meta: &mut Meta, phase: Phase) {
    meta.media_type = MediaType::Tv;
    cx.flags.insert(ParseFlags::NAME);
    cx.phase = phase;
}

pub(crate) fn season(token: &str, cx: &mut ParseContext, meta: &mut Meta) -> Outcome {
    if record_captures(&SEASON, token, &mut meta.seasons) {
        if meta.is_file {
            meta.seasons.collapse_above(FILE_SEASON_SPAN);
        }
        mark_tv(cx, meta, Phase::Season);
        // Combined codes like S01E02 still need the episode rule.
        return Outcome::Passed;
    }

    if is_digits(token) {
        if cx.phase == Phase::Season && meta.seasons.end().is_none() && token.len() < 3 {
            meta.seasons.start(to_int(token, 0));
            mark_tv(cx, meta, Phase::Season);
            return Outcome::Claimed;
        }
    } else if meta.seasons.end().is_none() && token.eq_ignore_ascii_case("SEASON") {
        cx.phase = Phase::Season;
    }
    Outcome::Passed
}

pub(crate) fn episode(token: &str, cx: &mut ParseContext, meta: &mut Meta) -> Outcome {
    if record_captures(&EPISODE, token, &mut meta.episodes) {
        if meta.is_file {
            meta.episodes.collapse_above(FILE_EPISODE_SPAN);
        }
        mark_tv(cx, meta, Phase::Episode);
        return Outcome::Claimed;
    }

    if !is_digits(token) {
        if token.eq_ignore_ascii_case("EPISODE") {
            cx.phase = Phase::Episode;
        }
        return Outcome::Passed;
    }

    let number = to_int(token, 0);
    let begin = meta.episodes.begin();

    // "E01-03" style ranges: the bare tail extends the range.
    if cx.phase == Phase::Episode
        && begin.is_some_and(|begin| number > begin)
        && meta.episodes.end().is_none()
        && token.len() < 5
    {
        meta.episodes.extend_to(number);
        if meta.is_file {
            meta.episodes.collapse_above(FILE_EPISODE_SPAN);
        }
        meta.media_type = MediaType::Tv;
        return Outcome::Claimed;
    }

    if begin.is_none()
        && (2..=3).contains(&number)
        && !matches!(cx.phase, Phase::Year | Phase::VideoCodec)
        && cx.unknown.as_deref() != Some(token)
    {
        meta.episodes.start(number);
        mark_tv(cx, meta, Phase::Episode);
        return Outcome::Claimed;
    }

    if cx.phase == Phase::Episode && begin.is_none() && token.len() < 5 {
        meta.episodes.start(number);
        if !meta.episodes.is_empty() {
            meta.media_type = MediaType::Tv;
        }
        return Outcome::Claimed;
    }

    Outcome::Passed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenStream;

    fn setup(is_file: bool) -> (ParseContext, Meta) {
        let meta = Meta {
            is_file,
            ..Meta::default()
        };
        (ParseContext::new(TokenStream::new("")), meta)
    }

    #[test]
    fn test_combined_code_passes_to_episode() {
        let (mut cx, mut meta) = setup(false);
        assert_eq!(season("S01E02", &mut cx, &mut meta), Outcome::Passed);
        assert_eq!(episode("S01E02", &mut cx, &mut meta), Outcome::Claimed);
        assert_eq!(meta.seasons.begin(), Some(1));
        assert_eq!(meta.total_seasons(), 1);
        assert_eq!(meta.episodes.begin(), Some(2));
        assert_eq!(meta.total_episodes(), 1);
        assert_eq!(meta.media_type, MediaType::Tv);
    }

    #[test]
    fn test_season_span() {
        let (mut cx, mut meta) = setup(false);
        season("S01", &mut cx, &mut meta);
        season("S03", &mut cx, &mut meta);
        assert_eq!((meta.seasons.begin(), meta.seasons.end()), (Some(1), Some(3)));
        assert_eq!(meta.total_seasons(), 3);
    }

    #[test]
    fn test_single_file_season_span_collapses() {
        let (mut cx, mut meta) = setup(true);
        season("S01", &mut cx, &mut meta);
        season("S02", &mut cx, &mut meta);
        assert_eq!(meta.seasons.end(), None);
        assert_eq!(meta.total_seasons(), 1);
    }

    #[test]
    fn test_season_word_then_number() {
        let (mut cx, mut meta) = setup(false);
        assert_eq!(season("Season", &mut cx, &mut meta), Outcome::Passed);
        assert_eq!(cx.phase, Phase::Season);
        assert_eq!(season("4", &mut cx, &mut meta), Outcome::Claimed);
        assert_eq!(meta.seasons.begin(), Some(4));
        assert_eq!(meta.media_type, MediaType::Tv);
    }

    #[test]
    fn test_season_word_ignores_long_number() {
        let (mut cx, mut meta) = setup(false);
        season("Season", &mut cx, &mut meta);
        assert_eq!(season("100", &mut cx, &mut meta), Outcome::Passed);
        assert_eq!(meta.seasons.begin(), None);
        assert_eq!(meta.total_seasons(), 0);
    }

    #[test]
    fn test_episode_range_from_bare_tail() {
        let (mut cx, mut meta) = setup(false);
        episode("E01", &mut cx, &mut meta);
        assert_eq!(episode("05", &mut cx, &mut meta), Outcome::Claimed);
        assert_eq!(meta.total_episodes(), 5);
    }

    #[test]
    fn test_single_file_allows_double_episode() {
        let (mut cx, mut meta) = setup(true);
        episode("E01", &mut cx, &mut meta);
        episode("02", &mut cx, &mut meta);
        assert_eq!(meta.total_episodes(), 2);

        let (mut cx, mut meta) = setup(true);
        episode("E01", &mut cx, &mut meta);
        episode("03", &mut cx, &mut meta);
        assert_eq!(meta.episodes.end(), None);
        assert_eq!(meta.total_episodes(), 1);
    }

    #[test]
    fn test_small_standalone_number_is_episode() {
        let (mut cx, mut meta) = setup(false);
        assert_eq!(episode("2", &mut cx, &mut meta), Outcome::Claimed);
        assert_eq!(meta.episodes.begin(), Some(2));

        let (mut cx, mut meta) = setup(false);
        cx.phase = Phase::Year;
        assert_eq!(episode("2", &mut cx, &mut meta), Outcome::Passed);

        let (mut cx, mut meta) = setup(false);
        cx.unknown = Some("3".into());
        assert_eq!(episode("3", &mut cx, &mut meta), Outcome::Passed);

        let (mut cx, mut meta) = setup(false);
        assert_eq!(episode("4", &mut cx, &mut meta), Outcome::Passed);
    }

    #[test]
    fn test_episode_word_then_number() {
        let (mut cx, mut meta) = setup(false);
        episode("Episode", &mut cx, &mut meta);
        assert_eq!(cx.phase, Phase::Episode);
        assert_eq!(episode("12", &mut cx, &mut meta), Outcome::Claimed);
        assert_eq!(meta.episodes.begin(), Some(12));
        assert_eq!(meta.media_type, MediaType::Tv);
    }
}
