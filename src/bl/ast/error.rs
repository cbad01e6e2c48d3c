//! Error types for parsing
//!
//! Every grammar violation is fatal: the parser stops at the first one and returns
//! it. Errors carry the text and position of the offending token so the caller can
//! point at it.

use crate::bl::lexing::Position;
use std::fmt;
use thiserror::Error;

/// Why a name is not available for a user-defined instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedKind {
    Keyword,
    Condition,
    PrimitiveInstruction,
}

impl fmt::Display for ReservedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservedKind::Keyword => write!(f, "keyword"),
            ReservedKind::Condition => write!(f, "condition"),
            ReservedKind::PrimitiveInstruction => write!(f, "primitive instruction"),
        }
    }
}

/// Errors that can occur while parsing a program or statement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An expected literal keyword (IS, THEN, END, ...) is absent
    #[error("keyword {expected} not present: found \"{found}\" at {position}")]
    MissingKeyword {
        expected: &'static str,
        found: String,
        position: Position,
    },

    #[error("Invalid Identifier: \"{found}\" at {position}")]
    InvalidIdentifier { found: String, position: Position },

    /// An instruction definition tries to take a reserved name
    #[error("Invalid Identifier: \"{name}\" is a {reserved} and cannot name an instruction (at {position})")]
    ReservedName {
        name: String,
        reserved: ReservedKind,
        position: Position,
    },

    #[error("Invalid Condition: \"{found}\" at {position}")]
    InvalidCondition { found: String, position: Position },

    /// A program or instruction is closed with a different name than it was opened with
    #[error("Identifier names do not match: \"{opening}\" is closed by \"{closing}\" at {position}")]
    NameMismatch {
        opening: String,
        closing: String,
        position: Position,
    },

    #[error("Cannot have duplicate Identifiers: instruction \"{name}\" is already defined (at {position})")]
    DuplicateInstruction { name: String, position: Position },

    /// Tokens remain after the program's closing name
    #[error("There is content still in tokens: found \"{found}\" at {position}")]
    TrailingContent { found: String, position: Position },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::MissingKeyword { position, .. }
            | ParseError::InvalidIdentifier { position, .. }
            | ParseError::ReservedName { position, .. }
            | ParseError::InvalidCondition { position, .. }
            | ParseError::NameMismatch { position, .. }
            | ParseError::DuplicateInstruction { position, .. }
            | ParseError::TrailingContent { position, .. } => *position,
        }
    }
}

/// Type alias for parser results with boxed errors (keeps recursive frames small)
pub type ParseResult<T> = Result<T, Box<ParseError>>;

/// Format source code context around an error position
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// All lines are numbered for easy reference. A position past the last line
/// (the end-of-input token after a trailing newline) marks the last line.
pub fn format_source_context(source: &str, position: Position) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = position
        .line
        .saturating_sub(1)
        .min(lines.len().saturating_sub(1));

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
    }

    context
}
