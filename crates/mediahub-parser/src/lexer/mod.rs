//! Logos-based tokenizer for media names.
//!
//! A name is cut into fragments at every separator (dots, whitespace runs,
//! brackets, dashes, slashes, CJK brackets and a few more). Separators are
//! never part of a fragment, and two adjacent separators produce an empty
//! fragment between them.

mod token;
pub use token::Token;

use logos::Logos;

/// Returned by [`TokenStream`] once the cursor has run past the last fragment.
///
/// This is the normal end of a parse loop, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("token stream exhausted")]
pub struct Exhausted;

/// Split `text` into fragments.
///
/// Always returns at least one fragment; an empty input yields `[""]`.
pub fn split(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut lexer = Token::lexer(text);

    while let Some(token) = lexer.next() {
        if matches!(token, Ok(token) if token.is_separator()) {
            let span = lexer.span();
            fragments.push(&text[start..span.start]);
            start = span.end;
        }
    }
    fragments.push(&text[start..]);

    fragments
}

/// An indexable, restartable cursor over the fragments of a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<String>,
    index: usize,
}

impl TokenStream {
    /// Tokenize `text`.
    pub fn new(text: &str) -> Self {
        Self {
            tokens: split(text).into_iter().map(str::to_owned).collect(),
            index: 0,
        }
    }

    /// All fragments, regardless of the cursor position.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The fragment under the cursor.
    pub fn current(&self) -> Result<&str, Exhausted> {
        self.tokens
            .get(self.index)
            .map(String::as_str)
            .ok_or(Exhausted)
    }

    /// The fragment after the cursor, without moving.
    pub fn peek(&self) -> Result<&str, Exhausted> {
        self.tokens
            .get(self.index + 1)
            .map(String::as_str)
            .ok_or(Exhausted)
    }

    /// Move to the next fragment and return it.
    ///
    /// The cursor stays on the last fragment when there is nothing left.
    pub fn advance(&mut self) -> Result<&str, Exhausted> {
        if self.index + 1 < self.tokens.len() {
            self.index += 1;
            Ok(&self.tokens[self.index])
        } else {
            Err(Exhausted)
        }
    }

    /// Rewind to the first fragment.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_dotted_name() {
        assert_eq!(
            split("Friends.S01E02.1080p.WEB-DL.x264-NTb"),
            vec!["Friends", "S01E02", "1080p", "WEB", "DL", "x264", "NTb"]
        );
    }

    #[test]
    fn test_whitespace_run_is_one_separator() {
        assert_eq!(split("The   Wandering\tEarth"), vec!["The", "Wandering", "Earth"]);
    }

    #[test]
    fn test_adjacent_separators_emit_empty_fragment() {
        assert_eq!(split("Movie.(2020)"), vec!["Movie", "", "2020", ""]);
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn test_cjk_brackets() {
        assert_eq!(
            split("【字幕组】流浪地球「国语」～完整版"),
            vec!["", "字幕组", "流浪地球", "国语", "", "完整版"]
        );
    }

    #[test]
    fn test_ascii_delimiters() {
        assert_eq!(
            split("a/b;c&d|e#f_g+h~i[j]k"),
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"]
        );
        assert_eq!(split("a_+b"), vec!["a", "", "b"]);
        assert_eq!(split("Show[1080p]"), vec!["Show", "1080p", ""]);
    }

    #[test]
    fn test_full_width_space_is_not_a_separator() {
        assert_eq!(split("流浪\u{3000}地球"), vec!["流浪\u{3000}地球"]);
    }

    #[test]
    fn test_stream_cursor() {
        let mut stream = TokenStream::new("a.b.c");
        assert_eq!(stream.current(), Ok("a"));
        assert_eq!(stream.peek(), Ok("b"));
        assert_eq!(stream.advance(), Ok("b"));
        assert_eq!(stream.advance(), Ok("c"));
        assert_eq!(stream.peek(), Err(Exhausted));
        assert_eq!(stream.advance(), Err(Exhausted));
        assert_eq!(stream.current(), Ok("c"));

        stream.reset();
        assert_eq!(stream.current(), Ok("a"));
        assert_eq!(stream.tokens().len(), 3);
    }
}
