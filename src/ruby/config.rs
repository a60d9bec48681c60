//! Configuration loading
//!
//! `defaults/rubytext.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user files and single-key
//! overrides on top of those defaults via [`Loader`] before deserializing into
//! [`RubyConfig`].

use super::formats::{FormatRegistry, HtmlFormatter, JsonFormatter};
use super::parser::ParseOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/rubytext.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RubyConfig {
    pub parser: ParseOptions,
    pub output: OutputConfig,
    pub html: HtmlConfig,
    pub check: CheckConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub pretty: bool,
}

/// Mirrors the knobs of [`HtmlFormatter`].
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub parentheses: bool,
    pub annotation_scale: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub strict: bool,
}

impl RubyConfig {
    /// Default formatters, with the configurable ones set up from this config.
    pub fn format_registry(&self) -> FormatRegistry {
        let mut registry = FormatRegistry::with_defaults();
        registry.register(JsonFormatter {
            pretty: self.output.pretty,
        });
        registry.register(HtmlFormatter {
            parentheses: self.html.parentheses,
            annotation_scale: self.html.annotation_scale,
        });
        registry
    }
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
    pub fn build(self) -> Result<RubyConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RubyConfig, ConfigError> {
    Loader::new().build()
}
