//! Season and episode counts written out in Chinese free text.
//!
//! Runs on raw text rather than tokens: `第3季`, `第1-2季`, `全12集`,
//! `12集全`, `共3季`.

use regex::{Captures, Regex};

use super::patterns::{
    SUBTITLE_EPISODE, SUBTITLE_EPISODE_ALL, SUBTITLE_MARKERS, SUBTITLE_SEASON,
    SUBTITLE_SEASON_ALL,
};
use crate::model::{MediaType, Meta, NumberRange};
use crate::numeral::to_int;

const COMPLETE_MARKERS: [char; 2] = ['全', '共'];

/// First match of `pattern` that is neither preceded nor followed by a
/// "complete" qualifier (`全`, `共`). Those belong to the count patterns.
fn find_unqualified<'t>(pattern: &Regex, text: &'t str) -> Option<Captures<'t>> {
    let mut start = 0;
    while let Some(caps) = pattern.captures_at(text, start) {
        let whole = caps.get(0)?;
        let before = text[..whole.start()].trim_end();
        let after = text[whole.end()..].trim_start();
        if !before.ends_with(COMPLETE_MARKERS) && !after.starts_with(COMPLETE_MARKERS) {
            return Some(caps);
        }
        start = whole.start() + text[whole.start()..].chars().next()?.len_utf8();
    }
    None
}

/// Apply a `N` or `N-M` capture to `range`. Returns whether any number was
/// found.
fn apply_numbered(caps: &Captures<'_>, strip: &[char], range: &mut NumberRange) -> bool {
    let Some(group) = caps.get(1) else {
        return false;
    };
    let cleaned: String = group
        .as_str()
        .to_uppercase()
        .chars()
        .filter(|c| !strip.contains(c))
        .collect();
    let mut bounds = cleaned.split('-').map(|part| to_int(part.trim(), 0));
    let begin = bounds.next().unwrap_or(0);
    let end = bounds.next().unwrap_or(0);
    if begin == 0 && end == 0 {
        return false;
    }

    if range.is_empty() {
        range.start(begin);
    }
    if end != begin && range.end().is_none() {
        range.extend_to(end);
    }
    true
}

/// Apply a "complete" count (`全12集`) to `range` when nothing was recorded.
fn apply_count(caps: &Captures<'_>, range: &mut NumberRange) -> bool {
    let Some(count) = caps.get(1).or_else(|| caps.get(2)) else {
        return false;
    };
    if !range.is_empty() {
        return false;
    }
    range.set_count(to_int(count.as_str().trim(), 0));
    true
}

/// Fill season and episode ranges from `text`. Returns whether anything
/// matched.
pub(crate) fn extract(text: &str, meta: &mut Meta) -> bool {
    if text.is_empty() {
        return false;
    }
    let text = format!(" {text} ");
    if !SUBTITLE_MARKERS.is_match(&text) {
        return false;
    }

    let mut found = false;
    if let Some(caps) = find_unqualified(&SUBTITLE_SEASON, &text) {
        found |= apply_numbered(&caps, &['S'], &mut meta.seasons);
    }
    if let Some(caps) = find_unqualified(&SUBTITLE_EPISODE, &text) {
        found |= apply_numbered(&caps, &['E', 'P'], &mut meta.episodes);
    }
    if let Some(caps) = SUBTITLE_EPISODE_ALL.captures(&text) {
        found |= apply_count(&caps, &mut meta.episodes);
    }
    if let Some(caps) = SUBTITLE_SEASON_ALL.captures(&text) {
        found |= apply_count(&caps, &mut meta.seasons);
    }

    if found {
        meta.media_type = MediaType::Tv;
    }
    found
}
