//! Noise removed from a title before it is tokenized.

use std::borrow::Cow;

use regex::Captures;

use super::patterns::{CALENDAR_DATE, FILE_SIZE, LEADING_BRACKET, YEAR_SPAN};

/// Strip the leading `[group]` tag, shorten `YYYY-YYYY` spans to their first
/// year, and remove file sizes and calendar dates.
pub(crate) fn pre_trim(title: &str) -> String {
    let title = LEADING_BRACKET.replace(title, "");
    let title = YEAR_SPAN.replace_all(&title, "$1$2");
    let title = FILE_SIZE.replace_all(&title, |caps: &Captures<'_>| {
        // "4GB" is a size; "4GBX" is something else and stays.
        if caps[2].is_empty() {
            Cow::Borrowed("")
        } else {
            Cow::Owned(caps[0].to_owned())
        }
    });
    CALENDAR_DATE.replace_all(&title, "").into_owned()
}
