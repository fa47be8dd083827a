//! Part and disc markers (`Part2`, `CD1`, `DISC.2`).

use super::context::{Outcome, ParseContext, Phase};
use super::patterns::PART;
use crate::model::Meta;
use crate::numeral::is_digits;

const PART_SUFFIXES: [&str; 6] = ["A", "B", "C", "I", "II", "III"];

fn is_part_suffix(token: &str) -> bool {
    (is_digits(token) && token.len() <= 2)
        || PART_SUFFIXES
            .iter()
            .any(|suffix| suffix.eq_ignore_ascii_case(token))
}

pub(crate) fn part(token: &str, cx: &mut ParseContext, meta: &mut Meta) -> Outcome {
    if meta.name().is_empty() || !cx.has_release_info(meta) {
        return Outcome::Passed;
    }
    let Some(found) = PART.find(token) else {
        return Outcome::Passed;
    };

    let label = meta.part.get_or_insert_with(|| found.as_str().to_owned());
    if let Ok(next) = cx.tokens.peek() {
        if is_part_suffix(next) {
            label.push_str(next);
            // The suffix is consumed here and never offered to other rules.
            let _ = cx.tokens.advance();
        }
    }

    cx.phase = Phase::Part;
    Outcome::Claimed
}
