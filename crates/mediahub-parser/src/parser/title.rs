//! Title and year rules.
//!
//! The title is collected token by token until something that cannot be
//! part of a title shows up. Chinese and other-script names are kept apart.

use super::context::{Outcome, ParseContext, ParseFlags, Phase};
use super::patterns::{
    EDITION_WORDS, EPISODE, RESOLUTION, SEASON, SEASON_EPISODE_WORDS, SEASON_SUFFIX, SOURCE,
};
use crate::model::Meta;
use crate::numeral::{is_chinese, is_digits, is_roman_numeral, is_video_extension, to_int};

/// Life cycle of the name rule. Once terminated it never sees a token again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum NameState {
    #[default]
    Active,
    Terminated,
}

fn append(name: &mut String, word: &str) {
    if name.is_empty() {
        name.push_str(word);
    } else {
        name.push(' ');
        name.push_str(word);
    }
}

/// Settle a number held back by an earlier token: now that another token
/// arrived it belongs to the other-script name, unless it became the year.
fn settle_unknown(cx: &mut ParseContext, meta: &mut Meta) {
    let Some(unknown) = cx.unknown.take() else {
        return;
    };
    if !meta.cn_name.is_empty() {
        return;
    }
    let is_year = meta.year.is_some_and(|year| year.to_string() == unknown);
    if meta.en_name.is_empty() || !is_year {
        append(&mut meta.en_name, &unknown);
    }
    cx.phase = Phase::Name;
}

pub(crate) fn name(
    state: &mut NameState,
    token: &str,
    cx: &mut ParseContext,
    meta: &mut Meta,
) -> Outcome {
    settle_unknown(cx, meta);

    if cx.flags.contains(ParseFlags::NAME) {
        *state = NameState::Terminated;
        return Outcome::Passed;
    }
    if token.eq_ignore_ascii_case("AKA") {
        *state = NameState::Terminated;
        return Outcome::Claimed;
    }
    if token.is_empty() {
        return Outcome::Passed;
    }
    if SEASON_EPISODE_WORDS.is_match(token) {
        cx.phase = Phase::SeasonEpisodeMarker;
        *state = NameState::Terminated;
        return Outcome::Passed;
    }

    if is_chinese(token) {
        cx.phase = Phase::ChineseName;
        if meta.cn_name.is_empty() {
            meta.cn_name = token.to_owned();
        } else if !cx.flags.contains(ParseFlags::CN_NAME) {
            if !EDITION_WORDS.is_match(token) {
                append(&mut meta.cn_name, token);
            }
            cx.flags.insert(ParseFlags::CN_NAME);
        }
        return Outcome::Passed;
    }

    let is_number = is_digits(token);
    if is_number || is_roman_numeral(token) {
        return number(token, is_number, cx, meta);
    }

    if SEASON.is_match(token)
        || EPISODE.is_match(token)
        || SOURCE.is_match(token)
        || RESOLUTION.is_match(token)
    {
        cx.flags.insert(ParseFlags::NAME);
        return Outcome::Passed;
    }
    if is_video_extension(token) {
        return Outcome::Passed;
    }

    append(&mut meta.en_name, token);
    cx.phase = Phase::Name;
    Outcome::Passed
}

fn number(token: &str, is_number: bool, cx: &mut ParseContext, meta: &mut Meta) -> Outcome {
    if meta.name().is_empty() {
        // First number before any title text: could be a year, an episode
        // or the title itself ("1917").
        cx.unknown.get_or_insert_with(|| token.to_owned());
        return Outcome::Passed;
    }
    // "01" after a title is almost always an episode.
    if token.starts_with('0') {
        return Outcome::Passed;
    }
    if is_number && cx.phase == Phase::ChineseName && to_int(token, 0) < 1900 {
        return Outcome::Passed;
    }

    if !is_number || token.len() < 4 {
        match cx.phase {
            Phase::ChineseName => append(&mut meta.cn_name, token),
            Phase::Name => append(&mut meta.en_name, token),
            _ => {}
        }
        return Outcome::Claimed;
    }
    if token.len() == 4 {
        cx.unknown.get_or_insert_with(|| token.to_owned());
    }
    Outcome::Passed
}

/// A number still held back when the tokens run out is the title itself
/// ("1917") if nothing else became the title.
pub(crate) fn settle_trailing_unknown(cx: &mut ParseContext, meta: &mut Meta) {
    if let Some(unknown) = cx.unknown.take() {
        if meta.name().is_empty() {
            meta.en_name = unknown;
        }
    }
}

pub(crate) fn year(token: &str, cx: &mut ParseContext, meta: &mut Meta) -> Outcome {
    if meta.name().is_empty() || token.len() != 4 || !is_digits(token) {
        return Outcome::Passed;
    }
    let value = to_int(token, 0);
    if !(1900..=2050).contains(&value) {
        return Outcome::Passed;
    }

    if cx.flags.contains(ParseFlags::YEAR) {
        // A second year: the first one was a number at the end of the title.
        if let Some(previous) = meta.year {
            let previous = previous.to_string();
            if !meta.en_name.is_empty() {
                append(&mut meta.en_name, &previous);
            } else if !meta.cn_name.is_empty() {
                append(&mut meta.cn_name, &previous);
            }
        }
    } else if SEASON_SUFFIX.is_match(&meta.en_name) {
        // "Season" is part of the title here; the trailing space keeps it
        // from being stripped as noise later on.
        meta.en_name.push(' ');
    }

    meta.year = u16::try_from(value).ok();
    cx.phase = Phase::Year;
    cx.flags.insert(ParseFlags::NAME | ParseFlags::YEAR);
    Outcome::Claimed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenStream;

    fn context() -> ParseContext {
        ParseContext::new(TokenStream::new(""))
    }

    #[test]
    fn test_collects_other_script_name() {
        let mut cx = context();
        let mut meta = Meta::default();
        let mut state = NameState::Active;
        for token in ["The", "Wandering", "Earth"] {
            assert_eq!(name(&mut state, token, &mut cx, &mut meta), Outcome::Passed);
        }
        assert_eq!(meta.en_name, "The Wandering Earth");
        assert_eq!(cx.phase, Phase::Name);
    }

    #[test]
    fn test_second_chinese_fragment_appended_once() {
        let mut cx = context();
        let mut meta = Meta::default();
        let mut state = NameState::Active;
        for token in ["流浪地球", "导演剪辑", "特别篇"] {
            name(&mut state, token, &mut cx, &mut meta);
        }
        assert_eq!(meta.cn_name, "流浪地球 导演剪辑");
        assert!(cx.flags.contains(ParseFlags::CN_NAME));
    }

    #[test]
    fn test_edition_fragment_not_appended() {
        let mut cx = context();
        let mut meta = Meta::default();
        let mut state = NameState::Active;
        for token in ["流浪地球", "国语版"] {
            name(&mut state, token, &mut cx, &mut meta);
        }
        assert_eq!(meta.cn_name, "流浪地球");
    }

    #[test]
    fn test_first_number_is_stashed() {
        let mut cx = context();
        let mut meta = Meta::default();
        let mut state = NameState::Active;
        name(&mut state, "1917", &mut cx, &mut meta);
        assert_eq!(cx.unknown.as_deref(), Some("1917"));
        assert!(meta.en_name.is_empty());

        name(&mut state, "Extended", &mut cx, &mut meta);
        assert_eq!(meta.en_name, "1917 Extended");
        assert!(cx.unknown.is_none());
    }

    #[test]
    fn test_small_number_and_roman_numeral_join_title() {
        let mut cx = context();
        let mut meta = Meta::default();
        let mut state = NameState::Active;
        name(&mut state, "Rocky", &mut cx, &mut meta);
        assert_eq!(name(&mut state, "IV", &mut cx, &mut meta), Outcome::Claimed);
        assert_eq!(name(&mut state, "2", &mut cx, &mut meta), Outcome::Claimed);
        assert_eq!(meta.en_name, "Rocky IV 2");
    }

    #[test]
    fn test_leading_zero_number_left_alone() {
        let mut cx = context();
        let mut meta = Meta::default();
        let mut state = NameState::Active;
        name(&mut state, "Show", &mut cx, &mut meta);
        assert_eq!(name(&mut state, "05", &mut cx, &mut meta), Outcome::Passed);
        assert_eq!(meta.en_name, "Show");
    }

    #[test]
    fn test_terminated_by_marker_and_aka() {
        let mut cx = context();
        let mut meta = Meta::default();
        let mut state = NameState::Active;
        name(&mut state, "Show", &mut cx, &mut meta);
        name(&mut state, "1080p", &mut cx, &mut meta);
        assert_eq!(state, NameState::Active);
        assert!(cx.flags.contains(ParseFlags::NAME));
        name(&mut state, "Extra", &mut cx, &mut meta);
        assert_eq!(state, NameState::Terminated);
        assert_eq!(meta.en_name, "Show");

        let mut cx = context();
        let mut state = NameState::Active;
        assert_eq!(name(&mut state, "aka", &mut cx, &mut meta), Outcome::Claimed);
        assert_eq!(state, NameState::Terminated);
    }

    #[test]
    fn test_video_extension_ignored() {
        let mut cx = context();
        let mut meta = Meta::default();
        let mut state = NameState::Active;
        name(&mut state, "Movie", &mut cx, &mut meta);
        name(&mut state, "mkv", &mut cx, &mut meta);
        assert_eq!(meta.en_name, "Movie");
    }

    #[test]
    fn test_year_requires_name_and_range() {
        let mut cx = context();
        let mut meta = Meta::default();
        assert_eq!(year("2020", &mut cx, &mut meta), Outcome::Passed);

        meta.en_name = "Movie".into();
        assert_eq!(year("1850", &mut cx, &mut meta), Outcome::Passed);
        assert_eq!(year("2051", &mut cx, &mut meta), Outcome::Passed);
        assert_eq!(year("20200", &mut cx, &mut meta), Outcome::Passed);
        assert_eq!(year("2020", &mut cx, &mut meta), Outcome::Claimed);
        assert_eq!(meta.year, Some(2020));
        assert!(cx.flags.contains(ParseFlags::NAME | ParseFlags::YEAR));

        let mut cx = context();
        let mut meta = Meta {
            en_name: "Movie".into(),
            ..Meta::default()
        };
        assert_eq!(year("2050", &mut cx, &mut meta), Outcome::Claimed);
        assert_eq!(meta.year, Some(2050));
    }

    #[test]
    fn test_second_year_folds_first_into_title() {
        let mut cx = context();
        let mut meta = Meta {
            en_name: "Blade Runner".into(),
            ..Meta::default()
        };
        year("2049", &mut cx, &mut meta);
        year("2017", &mut cx, &mut meta);
        assert_eq!(meta.en_name, "Blade Runner 2049");
        assert_eq!(meta.year, Some(2017));
    }

    #[test]
    fn test_season_suffix_protected() {
        let mut cx = context();
        let mut meta = Meta {
            en_name: "The Final Season".into(),
            ..Meta::default()
        };
        year("2019", &mut cx, &mut meta);
        assert_eq!(meta.en_name, "The Final Season ");
    }
}
