//! Statement-level rules: block, if / if-else, while, call

use super::common::{expect_condition, expect_identifier, expect_keyword, invalid_identifier};
use crate::bl::ast::{Block, ParseResult, Statement};
use crate::bl::lexing::{is_identifier, Token, TokenStream, END_OF_INPUT};
use log::trace;

/// Tokens that end a block without being consumed by it
fn ends_block(token: &Token) -> bool {
    token.is(END_OF_INPUT) || token.is("ELSE") || token.is("END")
}

impl Block {
    /// Parse statements for as long as the front token does not end the block
    pub fn parse(tokens: &mut TokenStream) -> ParseResult<Block> {
        let mut block = Block::new();
        while !ends_block(tokens.front()) {
            let mut child = Statement::default();
            child.parse(tokens)?;
            block.insert(block.len(), child);
        }
        Ok(block)
    }
}

impl Statement {
    /// Replace this statement with the one statement at the front of `tokens`
    pub fn parse(&mut self, tokens: &mut TokenStream) -> ParseResult<()> {
        let front = tokens.front();
        if front.is("IF") {
            parse_if(tokens, self)
        } else if front.is("WHILE") {
            parse_while(tokens, self)
        } else if is_identifier(front.text()) {
            parse_call(tokens, self)
        } else {
            Err(invalid_identifier(tokens.dequeue()))
        }
    }

    /// Replace this statement with a BLOCK of the statements at the front of `tokens`
    ///
    /// Nested blocks recurse, so nesting depth is limited by the stack.
    pub fn parse_block(&mut self, tokens: &mut TokenStream) -> ParseResult<()> {
        let block = Block::parse(tokens)?;
        *self = Statement::Block(block);
        Ok(())
    }
}

fn parse_if(tokens: &mut TokenStream, s: &mut Statement) -> ParseResult<()> {
    let start = expect_keyword(tokens, "IF")?.position();
    let condition = expect_condition(tokens)?;
    expect_keyword(tokens, "THEN")?;
    let then_block = Block::parse(tokens)?;

    if tokens.front().is("ELSE") {
        tokens.dequeue();
        let else_block = Block::parse(tokens)?;
        s.assemble_if_else(condition, then_block, else_block);
    } else {
        s.assemble_if(condition, then_block);
    }

    expect_keyword(tokens, "END")?;
    expect_keyword(tokens, "IF")?;
    trace!("parsed {} {} at {}", s.kind(), condition, start);
    Ok(())
}

fn parse_while(tokens: &mut TokenStream, s: &mut Statement) -> ParseResult<()> {
    let start = expect_keyword(tokens, "WHILE")?.position();
    let condition = expect_condition(tokens)?;
    expect_keyword(tokens, "DO")?;
    let body = Block::parse(tokens)?;
    expect_keyword(tokens, "END")?;
    expect_keyword(tokens, "WHILE")?;

    s.assemble_while(condition, body);
    trace!("parsed WHILE {} at {}", condition, start);
    Ok(())
}

fn parse_call(tokens: &mut TokenStream, s: &mut Statement) -> ParseResult<()> {
    let token = expect_identifier(tokens)?;
    trace!("parsed CALL {} at {}", token.text(), token.position());
    s.assemble_call(token.into_text());
    Ok(())
}
