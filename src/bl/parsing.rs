//! Recursive-descent parsing for BL
//!
//! Grammar
//!
//!     program      = "PROGRAM" IDENTIFIER "IS" instruction* "BEGIN" block "END" IDENTIFIER
//!     instruction  = "INSTRUCTION" IDENTIFIER "IS" block "END" IDENTIFIER
//!     block        = statement*
//!     statement    = if | while | call
//!     if           = "IF" CONDITION "THEN" block ["ELSE" block] "END" "IF"
//!     while        = "WHILE" CONDITION "DO" block "END" "WHILE"
//!     call         = IDENTIFIER
//!
//!     A block ends at the first ELSE, END or end of input; the enclosing rule then
//!     checks that the token is the one it expects.
//!
//! Structure
//!
//!     `program` holds the program-level rules and drives `statement`, which holds the
//!     statement-level rules. The two share nothing but the TokenStream cursor. Both
//!     are written as methods on the AST types they fill in (`Program::parse`,
//!     `Statement::parse`, `Statement::parse_block`) plus free functions taking source
//!     text for convenience.
//!
//! Errors
//!
//!     Every check happens where the token is consumed. The first failure is returned
//!     as a ParseError and nothing after it is looked at.
//!
//! Resources
//!
//!     Recursion depth follows the block nesting depth of the input. There is no
//!     explicit limit; deeply nested input is bounded by the thread's stack.

pub mod common;
pub mod program;
pub mod statement;

pub use crate::bl::ast::{ParseError, ParseResult};

use crate::bl::ast::{Block, Program, Statement};
use crate::bl::lexing::tokens;

/// Parse a complete program from source text
pub fn parse_program(source: &str) -> ParseResult<Program> {
    let mut stream = tokens(source);
    let mut program = Program::new();
    program.parse(&mut stream)?;
    Ok(program)
}

/// Parse a single statement from source text; tokens after it are left unread
pub fn parse_statement(source: &str) -> ParseResult<Statement> {
    let mut stream = tokens(source);
    let mut statement = Statement::default();
    statement.parse(&mut stream)?;
    Ok(statement)
}

/// Parse a sequence of statements from source text, up to the first ELSE, END or
/// end of input
pub fn parse_block(source: &str) -> ParseResult<Block> {
    let mut stream = tokens(source);
    Block::parse(&mut stream)
}
