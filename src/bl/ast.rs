//! AST definitions for the BL language
//!
//! - `condition` - the closed set of sensor conditions
//! - `statement` - Statement (one variant per statement kind) and Block
//! - `program` - Program: name, instruction context, main body
//! - `error` - parse errors and source context formatting
//!
//! Trees are plain owned data. Assembly operations take their operands by value and
//! disassembly operations hand them back by value, leaving the node as an empty
//! BLOCK, so a node can never share structure with another node.

pub mod condition;
pub mod error;
pub mod program;
pub mod statement;

pub use condition::{Condition, UnknownCondition};
pub use error::{format_source_context, ParseError, ParseResult, ReservedKind};
pub use program::{Context, Program};
pub use statement::{Block, Kind, Statement};
