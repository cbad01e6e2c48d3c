//! Lexing for the BL language
//!
//!     BL source is a flat sequence of words separated by whitespace. Comments start
//!     with `#` and run to the end of the line. The lexer is a plain logos lexer: the
//!     word pattern is the only real token, anything else is kept verbatim as a
//!     single "stray" token so that the parser can reject it with a precise message
//!     (an identifier or condition was expected here).
//!
//!     Tokens are strings. Whether a word is a keyword, a condition, or an identifier
//!     is decided by the classification predicates, not by the lexer, because the
//!     parser needs to ask those questions about the text of arbitrary tokens.
//!
//!     Every stream handed to the parser ends with the END_OF_INPUT sentinel.

pub mod classification;
pub mod position;
pub mod stream;
pub mod tokens;

pub use classification::{
    is_condition, is_identifier, is_keyword, is_primitive_instruction, CONDITIONS, KEYWORDS,
    PRIMITIVE_INSTRUCTIONS,
};
pub use position::{Position, SourceLocation};
pub use stream::{TokenStream, END_OF_INPUT};
pub use tokens::{tokenize, RawToken, Token};

/// Lex source text into a parser-ready token stream (tokens + END_OF_INPUT sentinel)
pub fn tokens(source: &str) -> TokenStream {
    let location = SourceLocation::new(source);
    let tokens = tokenize(source)
        .into_iter()
        .map(|(text, span)| Token::new(text, location.byte_to_position(span.start)));
    TokenStream::new(tokens, location.byte_to_position(source.len()))
}
