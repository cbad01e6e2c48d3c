//! File processing API for BL
//!
//! Glue between the parser and the output formats: read a file (or take source
//! text), parse it as a whole program or as a bare statement sequence, and render
//! the result in one of the [`OutputFormat`]s. The CLI is a thin layer over this.

use crate::bl::ast::{Block, ParseError, ParseResult, Program};
use crate::bl::config::BlConfig;
use crate::bl::formats::{
    block_to_treeviz_str, pretty_print_block_with, pretty_print_program_with, serialize_ast_tag,
    serialize_block_tag, to_treeviz_str_with, OutputFormat,
};
use crate::bl::lexing::{tokens, TokenStream};
use log::debug;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] Box<ParseError>),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ProcessingError {
    /// The parse error behind this failure, if parsing is what failed
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            ProcessingError::Parse(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

/// Resolve a format name, as given on the command line or in the config
pub fn resolve_format(name: &str) -> Result<OutputFormat, ProcessingError> {
    name.parse().map_err(ProcessingError::InvalidFormat)
}

/// Parse `source` and render it in `format`
///
/// With `statement_mode` the source is a bare statement sequence instead of a full
/// program; it must still be consumed to the end.
pub fn process_source(
    source: &str,
    format: OutputFormat,
    statement_mode: bool,
    config: &BlConfig,
) -> Result<String, ProcessingError> {
    if statement_mode {
        let block = parse_statements(source)?;
        debug!("parsed {} top-level statements", block.len());
        render_block(&block, format, config)
    } else {
        let mut stream = tokens(source);
        let mut program = Program::new();
        program.parse(&mut stream)?;
        render_program(&program, format, config)
    }
}

/// Read a file and process it with [`process_source`]
pub fn process_file<P: AsRef<Path>>(
    path: P,
    format: OutputFormat,
    statement_mode: bool,
    config: &BlConfig,
) -> Result<String, ProcessingError> {
    let path = path.as_ref();
    debug!("processing {}", path.display());
    let source = fs::read_to_string(path)?;
    process_source(&source, format, statement_mode, config)
}

/// Render the token stream of `source`, one token per line with its position
pub fn format_tokens(stream: &TokenStream) -> String {
    let mut result = String::new();
    for token in stream.iter() {
        result.push_str(&format!("{}\t{}\n", token.position(), token.text()));
    }
    result
}

fn parse_statements(source: &str) -> ParseResult<Block> {
    let mut stream = tokens(source);
    let block = Block::parse(&mut stream)?;
    if !stream.is_at_end() {
        let token = stream.dequeue();
        return Err(Box::new(ParseError::TrailingContent {
            position: token.position(),
            found: token.into_text(),
        }));
    }
    Ok(block)
}

fn render_program(
    program: &Program,
    format: OutputFormat,
    config: &BlConfig,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Pretty => Ok(pretty_print_program_with(program, &config.formatting)),
        OutputFormat::Treeviz => Ok(to_treeviz_str_with(program, config.inspect.label_width)),
        OutputFormat::Tag => Ok(serialize_ast_tag(program)),
        OutputFormat::Json => serde_json::to_string_pretty(program)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(program)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
    }
}

fn render_block(
    block: &Block,
    format: OutputFormat,
    config: &BlConfig,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Pretty => Ok(pretty_print_block_with(block, &config.formatting)),
        OutputFormat::Treeviz => Ok(block_to_treeviz_str(block)),
        OutputFormat::Tag => Ok(serialize_block_tag(block)),
        OutputFormat::Json => serde_json::to_string_pretty(block)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(block)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
    }
}
