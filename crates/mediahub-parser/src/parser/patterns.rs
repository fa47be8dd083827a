//! Compiled matching patterns shared by every parse.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("Invalid pattern {pattern:?}: {e}"))
}

/// Characters that mark a Chinese season/episode phrase (第, 季, 集, ...).
pub(crate) static SEASON_EPISODE_WORDS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[共第季集话話期]"));

/// Chinese fragments naming an edition or subtitle track rather than a title.
pub(crate) static EDITION_WORDS: LazyLock<Regex> = LazyLock::new(|| compile(r"版|字幕"));

pub(crate) static EPISODE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)EP?([0-9]{2,4})$|^EP?([0-9]{1,4})$|^S[0-9]{1,2}EP?([0-9]{1,4})$|S[0-9]{2}EP?([0-9]{2,4})")
});

pub(crate) static SEASON: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)S([0-9]{2})|^S([0-9]{1,2})$|S([0-9]{1,2})E"));

pub(crate) static SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(?:BLURAY|HDTV|UHDTV|HDDVD|WEBRIP|DVDRIP|BDRIP|BLU|WEB|BD|HDRip)$")
});

pub(crate) static EFFECT: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?:REMUX|UHD|SDR|HDR[0-9]*|DOLBY|DOVI|DV|3D|REPACK)$")
});

/// `1080p`, `HD720P`, `1920x1080`; the captured group is the value kept.
pub(crate) static RESOLUTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^[SBUHD]*([0-9]{3,4}[PI]+)|[0-9]{3,4}X([0-9]{3,4})")
});

pub(crate) static RESOLUTION_K: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^[248]+K"));

pub(crate) static VIDEO_CODEC: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(?:[HX]26[45]|AVC|HEVC|VC[0-9]?|MPEG[0-9]?|Xvid|DivX|HDR[0-9]*)$")
});

pub(crate) static AUDIO_CODEC: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)^(?:DTS[0-9]?|DTSHD|DTSHDMA|Atmos|TrueHD[0-9]?|AC3|[0-9]Audios?|DDP[0-9]?|DD[0-9]?|LPCM[0-9]?|AAC[0-9]?|FLAC[0-9]?|HD[0-9]?|MA[0-9]?)$",
    )
});

pub(crate) static PART: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(?:PART[0-9ABI]{0,2}|CD[0-9]{0,2}|DVD[0-9]{0,2}|DISK[0-9]{0,2}|DISC[0-9]{0,2})$")
});

pub(crate) static SEASON_SUFFIX: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)SEASON$"));

pub(crate) static DIY: LazyLock<Regex> = LazyLock::new(|| compile(r"D[Ii]Y"));

pub(crate) static DIY_RELEASE: LazyLock<Regex> = LazyLock::new(|| compile(r"-D[Ii]Y@"));

pub(crate) static LEADING_BRACKET: LazyLock<Regex> = LazyLock::new(|| compile(r"^\[.+?\]"));

pub(crate) static YEAR_SPAN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"([\s.]+)([0-9]{4})-([0-9]{4})"));

/// A size marker plus any letters glued to it; only bare sizes are removed.
pub(crate) static FILE_SIZE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)([0-9.]+\s*[MGT]i?B)([A-Z]*)"));

pub(crate) static CALENDAR_DATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[0-9]{4}[\s._-][0-9]{1,2}[\s._-][0-9]{1,2}"));

pub(crate) static SUBTITLE_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[全第季集话話期]"));

pub(crate) static SUBTITLE_SEASON: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)[第\s]+([0-9一二三四五六七八九十S\-]+)\s*季"));

pub(crate) static SUBTITLE_SEASON_ALL: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"[全共]\s*([0-9一二三四五六七八九十]+)\s*季|([0-9一二三四五六七八九十]+)\s*季\s*[全共]")
});

pub(crate) static SUBTITLE_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)[第\s]+([0-9一二三四五六七八九十百零EP\-]+)\s*[集话話期]"));

pub(crate) static SUBTITLE_EPISODE_ALL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"([0-9一二三四五六七八九十百零]+)\s*集\s*[全共]|[全共]\s*([0-9一二三四五六七八九十百零]+)\s*[集话話期]",
    )
});
