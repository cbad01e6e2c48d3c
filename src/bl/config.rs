//! Configuration loading for the bl toolchain.
//!
//! `defaults/bl.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those
//! defaults via [`Loader`] before deserializing into [`BlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/bl.default.toml");

/// Top-level configuration consumed by bl applications.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlConfig {
    pub formatting: FormattingConfig,
    pub inspect: InspectConfig,
}

/// Knobs for the BL pretty-printer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormattingConfig {
    pub indent_width: usize,
    pub blank_line_between_instructions: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            blank_line_between_instructions: true,
        }
    }
}

/// Controls AST inspection output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InspectConfig {
    pub default_format: String,
    pub label_width: usize,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<BlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BlConfig, ConfigError> {
    Loader::new().build()
}
