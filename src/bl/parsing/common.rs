//! Token expectations shared by the statement and program rules
//!
//! Each helper dequeues exactly one token and checks it, returning the token (or
//! what it translates to) on success.

use crate::bl::ast::{Condition, ParseError, ParseResult};
use crate::bl::lexing::{is_condition, is_identifier, Token, TokenStream};

/// Dequeue a token that must be exactly `keyword`
pub fn expect_keyword(tokens: &mut TokenStream, keyword: &'static str) -> ParseResult<Token> {
    let token = tokens.dequeue();
    if token.is(keyword) {
        Ok(token)
    } else {
        Err(Box::new(ParseError::MissingKeyword {
            expected: keyword,
            position: token.position(),
            found: token.into_text(),
        }))
    }
}

/// Dequeue a token that must be an identifier
pub fn expect_identifier(tokens: &mut TokenStream) -> ParseResult<Token> {
    let token = tokens.dequeue();
    if is_identifier(token.text()) {
        Ok(token)
    } else {
        Err(invalid_identifier(token))
    }
}

/// Dequeue a condition token and translate it
pub fn expect_condition(tokens: &mut TokenStream) -> ParseResult<Condition> {
    let token = tokens.dequeue();
    if !is_condition(token.text()) {
        return Err(invalid_condition(token));
    }
    token
        .text()
        .parse::<Condition>()
        .map_err(|_| invalid_condition(token))
}

pub fn invalid_identifier(token: Token) -> Box<ParseError> {
    Box::new(ParseError::InvalidIdentifier {
        position: token.position(),
        found: token.into_text(),
    })
}

fn invalid_condition(token: Token) -> Box<ParseError> {
    Box::new(ParseError::InvalidCondition {
        position: token.position(),
        found: token.into_text(),
    })
}
