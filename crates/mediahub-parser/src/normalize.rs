//! Collaborators consulted before classification.
//!
//! A [`TitleNormalizer`] cleans a raw title (custom ignored and replaced
//! words) and an [`AnimeClassifier`] decides whether a title skips the video
//! grammar entirely. Both are injected into [`crate::Parser`].

use std::fmt::Debug;

/// Errors reported by a [`TitleNormalizer`].
///
/// A failing normalizer never aborts a parse; the raw title is used instead.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// Nothing was left of the title after cleanup.
    #[error("title is empty after normalization")]
    EmptyTitle,

    /// A word rule is not a valid regular expression.
    #[error("invalid word pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A word rule is malformed (e.g. a replacement without `=>`).
    #[error("invalid word rule `{0}`")]
    InvalidRule(String),
}

/// A cleaned title together with the rules that changed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    pub title: String,
    pub replaced_words: Vec<String>,
    pub ignored_words: Vec<String>,
    pub offset_words: Vec<String>,
}

impl Normalized {
    /// A title no rule touched.
    pub fn unchanged(title: &str) -> Self {
        Self {
            title: title.to_owned(),
            ..Self::default()
        }
    }
}

pub trait TitleNormalizer: Send + Sync + Debug {
    fn normalize(&self, title: &str) -> Result<Normalized, NormalizeError>;
}

/// Returns every title as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughNormalizer;

impl TitleNormalizer for PassthroughNormalizer {
    fn normalize(&self, title: &str) -> Result<Normalized, NormalizeError> {
        Ok(Normalized::unchanged(title))
    }
}

pub trait AnimeClassifier: Send + Sync + Debug {
    fn is_anime(&self, title: &str) -> bool;
}

/// Classifies nothing as anime.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverAnime;

impl AnimeClassifier for NeverAnime {
    fn is_anime(&self, _title: &str) -> bool {
        false
    }
}
