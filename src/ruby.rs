//! Main module for rubytext library functionality

pub mod config;
pub mod diagnostics;
pub mod formats;
pub mod parser;
pub mod processor;
pub mod scanning;
pub mod segment;

pub use diagnostics::{parse_with_diagnostics, Diagnostic, DiagnosticKind, ParseReport};
pub use parser::{parse, ParseOptions, RubyParser};
pub use segment::Segment;
