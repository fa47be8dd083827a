//! Token types for the Logos-based lexer.

use logos::Logos;

/// Raw lexemes of a media name.
///
/// The lexer only distinguishes text from the characters that separate
/// fragments; classification of the fragments happens in the step pipeline.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// A run of ASCII whitespace. Counts as a single separator.
    #[regex(r"[ \t\n\r\x0C]+")]
    Whitespace,

    /// Single-character separators, including the CJK brackets and tildes
    /// used by Chinese release groups.
    #[regex(r"[.()\[\]/;&|#_~+\-【】～「」]")]
    Delimiter,

    /// Anything that is not a separator.
    #[regex(r"[^ \t\n\r\x0C.()\[\]/;&|#_~+\-【】～「」]+")]
    Text(&'src str),
}

impl Token<'_> {
    /// Whether this lexeme ends the current fragment.
    pub fn is_separator(&self) -> bool {
        matches!(self, Token::Whitespace | Token::Delimiter)
    }
}
