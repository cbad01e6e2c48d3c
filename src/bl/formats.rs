//! Output formats for parsed BL
//!
//! - `pretty` - canonical BL source; parsing it again gives back the same tree
//! - `treeviz` - box-drawing tree, one line per node
//! - `tag` - XML-like tags mirroring the AST
//! - `json` / `yaml` - serde serialization of the AST

pub mod pretty;
pub mod tag;
pub mod treeviz;

pub use pretty::{
    pretty_print_block, pretty_print_block_with, pretty_print_program,
    pretty_print_program_with, pretty_print_statement,
};
pub use tag::{serialize_ast_tag, serialize_block_tag};
pub use treeviz::{block_to_treeviz_str, to_treeviz_str, to_treeviz_str_with};

use std::fmt;
use std::str::FromStr;

/// Formats a parsed program can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Treeviz,
    Tag,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Pretty,
        OutputFormat::Treeviz,
        OutputFormat::Tag,
        OutputFormat::Json,
        OutputFormat::Yaml,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Tag => "tag",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "Canonical BL source",
            OutputFormat::Treeviz => "Tree view of the AST",
            OutputFormat::Tag => "XML-like tags mirroring the AST",
            OutputFormat::Json => "AST as JSON",
            OutputFormat::Yaml => "AST as YAML",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| s.to_string())
    }
}
