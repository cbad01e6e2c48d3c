//! The token cursor consumed by the parser
//!
//! A TokenStream is a front-dequeuing queue that always ends with the END_OF_INPUT
//! sentinel. The sentinel is never removed: dequeuing at the end hands out a copy of
//! it, so the parser can keep asking for tokens after a premature end and will fail
//! on the first expectation the sentinel does not meet.

use crate::bl::lexing::position::Position;
use crate::bl::lexing::tokens::Token;
use std::collections::VecDeque;

/// Text of the sentinel token terminating every stream. `#` starts a comment in BL,
/// so the lexer can never produce this text.
pub const END_OF_INPUT: &str = "### END OF INPUT ###";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
}

impl TokenStream {
    /// Build a stream from lexed tokens; `end` is where the sentinel is reported
    pub fn new(tokens: impl IntoIterator<Item = Token>, end: Position) -> Self {
        let mut tokens: VecDeque<Token> = tokens.into_iter().collect();
        if !tokens.back().is_some_and(|t| t.is(END_OF_INPUT)) {
            tokens.push_back(Token::new(END_OF_INPUT, end));
        }
        Self { tokens }
    }

    /// Build a stream from bare token texts, numbering them as columns of line 1
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<Token> = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Token::new(text, Position::new(1, i + 1)))
            .collect();
        let end = Position::new(1, tokens.len() + 1);
        Self::new(tokens, end)
    }

    /// Peek at the first token without removing it
    pub fn front(&self) -> &Token {
        // never empty: the sentinel is always present
        &self.tokens[0]
    }

    /// Remove and return the first token (the sentinel stays in place)
    pub fn dequeue(&mut self) -> Token {
        if self.tokens.len() > 1 {
            if let Some(token) = self.tokens.pop_front() {
                return token;
            }
        }
        self.front().clone()
    }

    /// Number of tokens left, sentinel included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check if only the sentinel is left
    pub fn is_at_end(&self) -> bool {
        self.front().is(END_OF_INPUT)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }
}
