//! Text-shaped outputs
//!
//! `text` keeps what sits on the line and drops every annotation. `markup` writes
//! segments back as ruby source, always with an explicit `｜` so the base does not
//! depend on the Han fallback when read again.

use super::registry::{FormatError, Formatter};
use crate::ruby::segment::{base_text, Segment};

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(&self, segments: &[Segment]) -> Result<String, FormatError> {
        Ok(base_text(segments))
    }

    fn description(&self) -> &str {
        "Base text with annotations removed"
    }
}

pub struct MarkupFormatter;

impl Formatter for MarkupFormatter {
    fn name(&self) -> &str {
        "markup"
    }

    fn serialize(&self, segments: &[Segment]) -> Result<String, FormatError> {
        let mut output = String::new();
        for segment in segments {
            match segment {
                Segment::Plain { content } => output.push_str(content),
                Segment::Annotated { base, annotation } => {
                    output.push('｜');
                    output.push_str(base);
                    output.push('《');
                    output.push_str(annotation);
                    output.push('》');
                }
            }
        }
        Ok(output)
    }

    fn description(&self) -> &str {
        "Canonical ruby markup with explicit delimiters"
    }
}
