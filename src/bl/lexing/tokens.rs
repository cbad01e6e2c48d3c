//! Token definitions for the BL language
//!
//! The raw tokens are defined using the logos derive macro. Whitespace and comments
//! are skipped by logos itself, so the lexer only ever yields words and stray
//! character runs.
use crate::bl::lexing::position::Position;
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Raw token classes produced by logos
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+|#[^\n]*")]
pub enum RawToken {
    // Identifiers, keywords and conditions share one shape
    #[regex(r"[A-Za-z][A-Za-z0-9\-]*")]
    Word,

    // Anything that cannot start a word, a comment or whitespace
    #[regex(r"[^A-Za-z \t\r\n\f#]+")]
    Stray,
}

/// A token as seen by the parser: its text and where it starts in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    text: String,
    position: Position,
}

impl Token {
    pub fn new(text: impl Into<String>, position: Position) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Check if this token's text is exactly `text`
    pub fn is(&self, text: &str) -> bool {
        self.text == text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Tokenize a string, returning each token's text and byte span.
///
/// Lexing never fails: input logos cannot match is kept as a token of its own.
/// A word containing non-ASCII letters or digits (`mové`) comes out as one token,
/// so diagnostics quote it whole.
pub fn tokenize(source: &str) -> Vec<(String, logos::Span)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens: Vec<(String, logos::Span)> = Vec::new();

    while let Some(_result) = lexer.next() {
        let span = lexer.span();
        let slice = lexer.slice();

        if let Some((text, previous)) = tokens.last_mut() {
            if previous.end == span.start && joins_word(text, slice) {
                text.push_str(slice);
                previous.end = span.end;
                continue;
            }
        }
        tokens.push((slice.to_string(), span));
    }

    tokens
}

/// Two touching runs are one word when they meet between word characters and
/// at least one of those characters is outside ASCII.
fn joins_word(left: &str, right: &str) -> bool {
    match (left.chars().next_back(), right.chars().next()) {
        (Some(a), Some(b)) => {
            is_word_char(a) && is_word_char(b) && !(a.is_ascii() && b.is_ascii())
        }
        _ => false,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<String> {
        tokenize(source).into_iter().map(|(text, _)| text).collect()
    }

    #[test]
    fn test_words() {
        let mut lexer = RawToken::lexer("next-is-empty turnleft");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Word)));
        assert_eq!(lexer.slice(), "next-is-empty");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Word)));
        assert_eq!(lexer.slice(), "turnleft");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_stray_characters() {
        let mut lexer = RawToken::lexer("move; 42");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Word)));
        assert_eq!(lexer.next(), Some(Ok(RawToken::Stray)));
        assert_eq!(lexer.slice(), ";");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Stray)));
        assert_eq!(lexer.slice(), "42");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        assert_eq!(
            texts("IF # THEN ELSE\nrandom"),
            vec!["IF".to_string(), "random".to_string()]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize("  skip\tmove");
        assert_eq!(tokens[0].1, 2..6);
        assert_eq!(tokens[1].1, 7..11);
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t  # nothing here").is_empty());
    }

    #[test]
    fn test_non_ascii_letters_stay_in_one_word() {
        assert_eq!(
            texts("mové skip émove naïve-x"),
            vec![
                "mové".to_string(),
                "skip".to_string(),
                "émove".to_string(),
                "naïve-x".to_string()
            ]
        );
        let tokens = tokenize(" mové skip");
        assert_eq!(tokens[0].1, 1..6);
        assert_eq!(tokens[1].1, 7..11);
    }

    #[test]
    fn test_ascii_punctuation_still_splits() {
        assert_eq!(
            texts("move;skip 4move"),
            vec![
                "move".to_string(),
                ";".to_string(),
                "skip".to_string(),
                "4".to_string(),
                "move".to_string()
            ]
        );
    }

    #[test]
    fn test_words_with_digits() {
        assert_eq!(texts("step2 a-1"), vec!["step2".to_string(), "a-1".to_string()]);
    }
}
