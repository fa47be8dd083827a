//! Resolution, source and effect rules.

use super::context::{Outcome, ParseContext, ParseFlags, Phase};
use super::patterns::{EFFECT, RESOLUTION, RESOLUTION_K, SOURCE};
use crate::model::Meta;
use crate::numeral::is_digits;

pub(crate) fn resolution(token: &str, cx: &mut ParseContext, meta: &mut Meta) -> Outcome {
    if meta.name().is_empty() {
        return Outcome::Passed;
    }

    let value = if let Some(caps) = RESOLUTION.captures(token) {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_ascii_lowercase())
            .map(|pix| if is_digits(&pix) { format!("{pix}p") } else { pix })
    } else if let Some(found) = RESOLUTION_K.find(token) {
        Some(found.as_str().to_ascii_lowercase())
    } else {
        return Outcome::Passed;
    };

    if meta.resolution.is_none() {
        meta.resolution = value;
    }
    cx.phase = Phase::Resolution;
    cx.flags.insert(ParseFlags::NAME);
    Outcome::Claimed
}

pub(crate) fn source(token: &str, cx: &mut ParseContext, meta: &mut Meta) -> Outcome {
    if meta.name().is_empty() {
        return Outcome::Passed;
    }

    if SOURCE.is_match(token) {
        cx.phase = Phase::Source;
        if cx.source.is_empty() {
            cx.source = token.to_owned();
            cx.last_token = token.to_ascii_uppercase();
        }
        cx.flags.insert(ParseFlags::NAME);
        return Outcome::Claimed;
    }

    let upper = token.to_ascii_uppercase();
    match upper.as_str() {
        "DL" if cx.phase == Phase::Source && cx.last_token == "WEB" => {
            cx.source = "WEB-DL".into();
            return Outcome::Claimed;
        }
        "RAY" if cx.phase == Phase::Source && cx.last_token == "BLU" => {
            cx.source = "BluRay".into();
            return Outcome::Claimed;
        }
        "WEBDL" => {
            cx.source = "WEB-DL".into();
            return Outcome::Claimed;
        }
        _ => {}
    }

    if EFFECT.is_match(token) {
        cx.phase = Phase::Effect;
        if !cx.effects.iter().any(|effect| effect == token) {
            cx.effects.push(token.to_owned());
        }
        cx.last_token = token.to_owned();
        cx.flags.insert(ParseFlags::NAME);
        return Outcome::Claimed;
    }

    Outcome::Passed
}
