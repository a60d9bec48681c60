//! File processing API
//!
//! Ties the parser, the strict checks and the format registry together under one
//! [`RubyConfig`]:
//!
//! ```rust,ignore
//! use rubytext::ruby::config::load_defaults;
//! use rubytext::ruby::processor::Processor;
//!
//! let processor = Processor::new(load_defaults()?);
//! let html = processor.process_str("|東京《とうきょう》", "html")?;
//! ```

use super::config::RubyConfig;
use super::diagnostics::{parse_with_diagnostics, ParseReport};
use super::formats::{FormatError, FormatRegistry};
use super::parser::RubyParser;
use super::segment::compact;
use config::ConfigError;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Parsed and serialized output, with diagnostics when strict mode is on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedOutput {
    pub rendered: String,
    pub report: Option<ParseReport>,
}

pub struct Processor {
    config: RubyConfig,
    parser: RubyParser,
    registry: FormatRegistry,
}

impl Processor {
    pub fn new(config: RubyConfig) -> Self {
        let parser = RubyParser::new(config.parser);
        let registry = config.format_registry();
        Self {
            config,
            parser,
            registry,
        }
    }

    pub fn config(&self) -> &RubyConfig {
        &self.config
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Parse `source` and serialize it in `format`.
    pub fn process_str(&self, source: &str, format: &str) -> Result<String, ProcessingError> {
        let segments = self.parser.parse(source);
        Ok(self.registry.serialize(&segments, format)?)
    }

    /// Like [`process_str`](Self::process_str), but also runs the strict checks
    /// when `check.strict` is set.
    pub fn process_checked(
        &self,
        source: &str,
        format: &str,
    ) -> Result<ProcessedOutput, ProcessingError> {
        if !self.config.check.strict {
            return Ok(ProcessedOutput {
                rendered: self.process_str(source, format)?,
                report: None,
            });
        }

        let mut report = self.check_str(source);
        if !self.config.parser.keep_empty_plain {
            report.segments = compact(report.segments);
        }
        let rendered = self.registry.serialize(&report.segments, format)?;
        Ok(ProcessedOutput {
            rendered,
            report: Some(report),
        })
    }

    /// Run the strict checks on `source`.
    pub fn check_str(&self, source: &str) -> ParseReport {
        parse_with_diagnostics(source)
    }

    /// Read a file and process it.
    pub fn process_file<P: AsRef<Path>>(
        &self,
        path: P,
        format: &str,
    ) -> Result<ProcessedOutput, ProcessingError> {
        let source = read_source(path)?;
        self.process_checked(&source, format)
    }
}

/// Read input from `path`, or from stdin when `path` is `-`.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, ProcessingError> {
    let path = path.as_ref();
    if path == Path::new("-") {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    if !path.exists() {
        return Err(ProcessingError::FileNotFound(path.display().to_string()));
    }

    tracing::debug!(path = %path.display(), "reading source");
    Ok(std::fs::read_to_string(path)?)
}
