//! Program-level rules: header, instruction definitions, main body
//!
//! The parser has two phases. It collects instruction definitions until it sees
//! BEGIN, then parses the main body. There is no way back from the second phase to
//! the first. Nothing is written into the target Program until the whole input has
//! been accepted, so a failed parse leaves it as it was.

use super::common::{expect_identifier, expect_keyword, invalid_identifier};
use crate::bl::ast::{Block, ParseError, ParseResult, Program, ReservedKind};
use crate::bl::lexing::{
    is_condition, is_identifier, is_keyword, is_primitive_instruction, TokenStream,
};
use log::{debug, trace};

impl Program {
    /// Replace this program's name, context and body with the program in `tokens`
    pub fn parse(&mut self, tokens: &mut TokenStream) -> ParseResult<()> {
        expect_keyword(tokens, "PROGRAM")?;
        let name = expect_identifier(tokens)?;
        expect_keyword(tokens, "IS")?;

        let mut context = self.new_context();
        while !tokens.front().is("BEGIN") {
            let position = tokens.front().position();
            let (instruction, body) = parse_instruction(tokens)?;
            if context.contains_key(&instruction) {
                return Err(Box::new(ParseError::DuplicateInstruction {
                    name: instruction,
                    position,
                }));
            }
            context.insert(instruction, body);
        }

        expect_keyword(tokens, "BEGIN")?;
        let mut body = Block::parse(tokens)?;
        expect_keyword(tokens, "END")?;
        let closing = tokens.dequeue();
        if !closing.is(name.text()) {
            return Err(Box::new(ParseError::NameMismatch {
                opening: name.into_text(),
                position: closing.position(),
                closing: closing.into_text(),
            }));
        }

        if !tokens.is_at_end() {
            let rest = tokens.front();
            return Err(Box::new(ParseError::TrailingContent {
                found: rest.text().to_string(),
                position: rest.position(),
            }));
        }

        debug!(
            "parsed program {} ({} instructions, {} statements in body)",
            name.text(),
            context.len(),
            body.len()
        );
        self.set_name(name.into_text());
        self.swap_context(&mut context);
        self.swap_body(&mut body);
        Ok(())
    }
}

/// Parse one `INSTRUCTION name IS block END name` definition
fn parse_instruction(tokens: &mut TokenStream) -> ParseResult<(String, Block)> {
    expect_keyword(tokens, "INSTRUCTION")?;
    let name = tokens.dequeue();
    if let Some(reserved) = reserved_kind(name.text()) {
        return Err(Box::new(ParseError::ReservedName {
            reserved,
            position: name.position(),
            name: name.into_text(),
        }));
    }
    if !is_identifier(name.text()) {
        return Err(invalid_identifier(name));
    }

    expect_keyword(tokens, "IS")?;
    let body = Block::parse(tokens)?;
    expect_keyword(tokens, "END")?;

    let closing = tokens.dequeue();
    if !closing.is(name.text()) {
        return Err(Box::new(ParseError::NameMismatch {
            opening: name.into_text(),
            position: closing.position(),
            closing: closing.into_text(),
        }));
    }

    trace!("parsed INSTRUCTION {} at {}", name.text(), name.position());
    Ok((name.into_text(), body))
}

/// Names a user instruction may not take
fn reserved_kind(name: &str) -> Option<ReservedKind> {
    if is_keyword(name) {
        Some(ReservedKind::Keyword)
    } else if is_condition(name) {
        Some(ReservedKind::Condition)
    } else if is_primitive_instruction(name) {
        Some(ReservedKind::PrimitiveInstruction)
    } else {
        None
    }
}
