//! Video and audio codec rules.

use super::context::{Outcome, ParseContext, ParseFlags, Phase};
use super::patterns::{AUDIO_CODEC, VIDEO_CODEC};
use crate::model::Meta;
use crate::numeral::is_digits;

const TEN_BIT: &str = "10bit";

/// Canonical spelling of a video codec token: `H264`, `x265`, `HEVC`.
fn canonical_video_codec(token: &str) -> String {
    let upper = token.to_ascii_uppercase();
    match upper.as_bytes() {
        [b'X', b'2', b'6', b'4' | b'5'] => format!("x{}", &upper[1..]),
        _ => upper,
    }
}

fn codecs_apply(cx: &ParseContext, meta: &Meta) -> bool {
    !meta.name().is_empty() && cx.has_release_info(meta)
}

pub(crate) fn video(token: &str, cx: &mut ParseContext, meta: &mut Meta) -> Outcome {
    if !codecs_apply(cx, meta) {
        return Outcome::Passed;
    }

    if VIDEO_CODEC.is_match(token) {
        let codec = canonical_video_codec(token);
        cx.phase = Phase::VideoCodec;
        if meta.video_codec.is_none() {
            cx.last_token.clone_from(&codec);
            meta.video_codec = Some(codec);
        } else if meta.video_codec.as_deref() == Some(TEN_BIT) {
            meta.video_codec = Some(format!("{codec} {TEN_BIT}"));
            cx.last_token = codec;
        }
        cx.flags.insert(ParseFlags::NAME);
        return Outcome::Claimed;
    }

    let upper = token.to_ascii_uppercase();
    if upper == "H" || upper == "X" {
        cx.phase = Phase::VideoCodec;
        cx.last_token = if upper == "H" { "H".into() } else { "x".into() };
        cx.flags.insert(ParseFlags::NAME);
        return Outcome::Claimed;
    }

    // "264" joins whatever came before it; "265" only joins a lone "H".
    // Anything right after a lone "x" is joined too.
    let joins_h26x = upper == "264"
        || (upper == "265" && cx.phase == Phase::VideoCodec && cx.last_token == "H")
        || cx.last_token == "x";
    let joins_numbered = (is_digits(token)
        && cx.phase == Phase::VideoCodec
        && cx.last_token == "VC")
        || cx.last_token == "MPEG";

    if joins_h26x || joins_numbered {
        let codec = format!("{}{}", cx.last_token, token);
        cx.last_token.clone_from(&codec);
        meta.video_codec = Some(codec);
    } else if upper == "10BIT" {
        cx.phase = Phase::VideoCodec;
        meta.video_codec = Some(match meta.video_codec.take() {
            Some(codec) => format!("{codec} {TEN_BIT}"),
            None => TEN_BIT.to_owned(),
        });
    }
    Outcome::Passed
}

pub(crate) fn audio(token: &str, cx: &mut ParseContext, meta: &mut Meta) -> Outcome {
    if !codecs_apply(cx, meta) {
        return Outcome::Passed;
    }

    if AUDIO_CODEC.is_match(token) {
        meta.audio_codec = Some(match meta.audio_codec.take() {
            None => token.to_owned(),
            Some(codec) if codec.eq_ignore_ascii_case("DTS") => format!("{codec}-{token}"),
            Some(codec) => format!("{codec} {token}"),
        });
        cx.phase = Phase::AudioCodec;
        cx.last_token = token.to_ascii_uppercase();
        cx.flags.insert(ParseFlags::NAME);
        return Outcome::Claimed;
    }

    if is_digits(token) && cx.phase == Phase::AudioCodec {
        if let Some(codec) = meta.audio_codec.as_mut() {
            if is_digits(&cx.last_token) {
                // DTS 5 + 1 -> DTS 5.1
                codec.push('.');
                codec.push_str(token);
            } else if codec.ends_with(|c: char| c.is_ascii_digit()) {
                // DDP5 + 1 -> DDP 5.1
                let channels = codec.split_off(codec.len() - 1);
                codec.push(' ');
                codec.push_str(&channels);
                codec.push('.');
                codec.push_str(token);
            } else {
                codec.push(' ');
                codec.push_str(token);
            }
        }
        cx.last_token = token.to_owned();
    }
    Outcome::Passed
}
