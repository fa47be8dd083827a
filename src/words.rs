//! Word rules applied to titles before parsing.
//!
//! Rules come from the `[words]` config section. Blank entries and entries
//! starting with `#` are skipped.
//!
//! - `ignored`: a regular expression; every match is removed.
//! - `replaced`: `pattern => replacement`; `replacement` may refer to
//!   capture groups (`$1`).
//! - `offset`: `locator >> offset`; the rule is recorded on every title
//!   containing `locator`. A locator written as `front <> back` is matched
//!   on its front part.

use crate::config::WordsConfig;
use mediahub_parser::{NormalizeError, Normalized, TitleNormalizer};
use regex::Regex;

#[derive(Debug)]
struct Ignored {
    rule: String,
    pattern: Regex,
}

#[derive(Debug)]
struct Replacement {
    rule: String,
    pattern: Regex,
    replacement: String,
}

#[derive(Debug)]
struct Offset {
    rule: String,
    locator: String,
}

/// A [`TitleNormalizer`] built from configured word lists.
#[derive(Debug, Default)]
pub struct WordListNormalizer {
    ignored: Vec<Ignored>,
    replaced: Vec<Replacement>,
    offsets: Vec<Offset>,
}

impl WordListNormalizer {
    /// Compile every rule in `words`.
    ///
    /// Fails on the first rule that is not a valid regular expression or is
    /// missing its separator.
    pub fn from_config(words: &WordsConfig) -> Result<Self, NormalizeError> {
        let ignored = rules(&words.ignored)
            .map(|rule| {
                Ok(Ignored {
                    rule: rule.to_owned(),
                    pattern: compile(rule)?,
                })
            })
            .collect::<Result<_, NormalizeError>>()?;

        let replaced = rules(&words.replaced)
            .map(parse_replacement)
            .collect::<Result<_, _>>()?;

        let offsets = rules(&words.offset)
            .map(parse_offset)
            .collect::<Result<_, _>>()?;

        Ok(Self {
            ignored,
            replaced,
            offsets,
        })
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.ignored.len() + self.replaced.len() + self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TitleNormalizer for WordListNormalizer {
    fn normalize(&self, title: &str) -> Result<Normalized, NormalizeError> {
        let mut out = Normalized::unchanged(title);

        for ignored in &self.ignored {
            if ignored.pattern.is_match(&out.title) {
                out.title = ignored.pattern.replace_all(&out.title, "").into_owned();
                out.ignored_words.push(ignored.rule.clone());
            }
        }

        for replaced in &self.replaced {
            if replaced.pattern.is_match(&out.title) {
                out.title = replaced
                    .pattern
                    .replace_all(&out.title, replaced.replacement.as_str())
                    .into_owned();
                out.replaced_words.push(replaced.rule.clone());
            }
        }

        for offset in &self.offsets {
            if out.title.contains(&offset.locator) {
                out.offset_words.push(offset.rule.clone());
            }
        }

        let trimmed = out.title.trim();
        if trimmed.is_empty() {
            return Err(NormalizeError::EmptyTitle);
        }
        if trimmed.len() != out.title.len() {
            out.title = trimmed.to_owned();
        }
        Ok(out)
    }
}

fn rules(entries: &[String]) -> impl Iterator<Item = &str> {
    entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty() && !entry.starts_with('#'))
}

fn compile(pattern: &str) -> Result<Regex, NormalizeError> {
    Regex::new(pattern).map_err(|source| NormalizeError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })
}

fn parse_replacement(rule: &str) -> Result<Replacement, NormalizeError> {
    let (pattern, replacement) = rule
        .split_once("=>")
        .ok_or_else(|| NormalizeError::InvalidRule(rule.to_owned()))?;
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Err(NormalizeError::InvalidRule(rule.to_owned()));
    }
    Ok(Replacement {
        rule: rule.to_owned(),
        pattern: compile(pattern)?,
        replacement: replacement.trim().to_owned(),
    })
}

fn parse_offset(rule: &str) -> Result<Offset, NormalizeError> {
    let (locator, offset) = rule
        .split_once(">>")
        .ok_or_else(|| NormalizeError::InvalidRule(rule.to_owned()))?;
    let locator = locator
        .split_once("<>")
        .map_or(locator, |(front, _)| front)
        .trim();
    if locator.is_empty() || offset.trim().is_empty() {
        return Err(NormalizeError::InvalidRule(rule.to_owned()));
    }
    Ok(Offset {
        rule: rule.to_owned(),
        locator: locator.to_owned(),
    })
}
