//! Data model for parsed media names.

mod media_type;
mod meta;
mod range;

pub use media_type::MediaType;
pub use meta::{Meta, MetaInfo};
pub use range::NumberRange;

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.0)
    }
}

impl std::error::Error for ParseError {}
