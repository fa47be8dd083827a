//! Numeral conversion and string classification helpers.
//!
//! Everything here is pure and independent of the step pipeline.

use std::sync::LazyLock;

use phf::{phf_map, phf_set};
use regex::Regex;
use winnow::combinator::repeat;
use winnow::prelude::*;
use winnow::token::any;
use winnow::ModalResult;

/// Video container extensions, lowercase and without the dot.
static VIDEO_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    "mp4", "mkv", "ts", "iso", "rmvb", "avi", "mov", "mpeg", "mpg",
    "wmv", "3gp", "asf", "m4v", "flv", "m2ts", "strm", "tp",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numeral {
    Digit(u64),
    Unit(u64),
}

static CJK_NUMERALS: phf::Map<char, Numeral> = phf_map! {
    '零' => Numeral::Digit(0),
    '〇' => Numeral::Digit(0),
    '一' => Numeral::Digit(1),
    '二' => Numeral::Digit(2),
    '两' => Numeral::Digit(2),
    '三' => Numeral::Digit(3),
    '四' => Numeral::Digit(4),
    '五' => Numeral::Digit(5),
    '六' => Numeral::Digit(6),
    '七' => Numeral::Digit(7),
    '八' => Numeral::Digit(8),
    '九' => Numeral::Digit(9),
    '十' => Numeral::Unit(10),
    '百' => Numeral::Unit(100),
    '千' => Numeral::Unit(1_000),
    '万' => Numeral::Unit(10_000),
};

static ROMAN_NUMERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M*(C[MD]|D?C{0,3})(X[CL]|L?X{0,3})(I[XV]|V?I{0,3})$")
        .expect("Invalid roman numeral pattern")
});

fn numeral(input: &mut &str) -> ModalResult<Numeral> {
    any.verify_map(|c: char| CJK_NUMERALS.get(&c).copied())
        .parse_next(input)
}

fn numerals(input: &mut &str) -> ModalResult<Vec<Numeral>> {
    repeat(1.., numeral).parse_next(input)
}

/// Parse a Chinese numeral word such as `十二`, `二十三`, `一百零五` or the
/// positional form `二〇二〇`.
pub fn cn_to_number(text: &str) -> Option<u64> {
    let parts = numerals.parse(text).ok()?;

    if parts.iter().all(|p| matches!(p, Numeral::Digit(_))) {
        return Some(parts.iter().fold(0u64, |acc, part| match part {
            Numeral::Digit(d) => acc.saturating_mul(10).saturating_add(*d),
            Numeral::Unit(_) => acc,
        }));
    }

    let mut total = 0u64;
    let mut section = 0u64;
    let mut pending: Option<u64> = None;
    for part in parts {
        match part {
            Numeral::Digit(d) => pending = Some(d),
            Numeral::Unit(unit) if unit >= 10_000 => {
                let value = section + pending.take().unwrap_or(0);
                total = total.saturating_add(value.max(1).saturating_mul(unit));
                section = 0;
            }
            Numeral::Unit(unit) => {
                section = section.saturating_add(pending.take().unwrap_or(1).saturating_mul(unit));
            }
        }
    }

    Some(total.saturating_add(section).saturating_add(pending.unwrap_or(0)))
}

/// Convert a decimal or Chinese numeral token to an integer, falling back to
/// `default` when neither reading works.
pub fn to_int(token: &str, default: u32) -> u32 {
    if let Ok(value) = token.parse::<u32>() {
        return value;
    }
    cn_to_number(token)
        .and_then(|value| u32::try_from(value).ok())
        .unwrap_or(default)
}

/// Whether `s` is a non-empty run of ASCII decimal digits.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `s` contains at least one CJK unified ideograph.
pub fn is_chinese(s: &str) -> bool {
    s.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// Whether `s` is a well-formed uppercase Roman numeral.
pub fn is_roman_numeral(s: &str) -> bool {
    !s.is_empty() && ROMAN_NUMERAL.is_match(s)
}

/// Whether `ext` (without the dot) is a known video container.
pub fn is_video_extension(ext: &str) -> bool {
    VIDEO_EXTENSIONS.contains(ext.to_ascii_lowercase().as_str())
}

/// Whether the extension of `path` is a known video container.
///
/// This is a pure suffix check; the file system is never touched.
pub fn is_media_file(path: &str) -> bool {
    file_name(path)
        .rsplit_once('.')
        .is_some_and(|(_, ext)| is_video_extension(ext))
}

/// The last path component of `path`, cut at its first dot.
pub fn file_stem(path: &str) -> &str {
    let name = file_name(path);
    name.split_once('.').map_or(name, |(stem, _)| stem)
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
