//! Main module for BL library functionality
//!
//! The pipeline runs one direction only:
//!
//!     source text -> lexing (TokenStream) -> parsing (Program / Statement) -> formats
//!
//! The parser is a hand-written recursive descent over a token cursor. Program-level
//! rules delegate instruction and main bodies to the statement-level rules, which
//! recurse into themselves for nested IF / WHILE blocks.

pub mod ast;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod processor;
pub mod testing;
