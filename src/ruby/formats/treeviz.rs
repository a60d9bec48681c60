//! Treeviz formatter for segments
//!
//! One line per segment under a root line, with the same box-drawing connectors
//! the document tree views use:
//!
//! ```text
//! ⧉ 3 segments
//! ├─ ◦ 今日は
//! ├─ ⺀ 東京 ‹とうきょう›
//! └─ ◦ へ
//! ```
//!
//! Icons:
//!     Root: ⧉
//!     Plain: ◦ (∅ when empty)
//!     Annotated: ⺀

use super::registry::{FormatError, Formatter};
use crate::ruby::segment::Segment;

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn label(segment: &Segment) -> String {
    match segment {
        Segment::Plain { content } if content.is_empty() => "∅".to_string(),
        Segment::Plain { content } => format!("◦ {}", truncate(content, MAX_LABEL_CHARS)),
        Segment::Annotated { base, annotation } => format!(
            "⺀ {} ‹{}›",
            truncate(base, MAX_LABEL_CHARS),
            truncate(annotation, MAX_LABEL_CHARS)
        ),
    }
}

/// Render segments as a treeviz string.
pub fn to_treeviz_str(segments: &[Segment]) -> String {
    let mut output = format!("⧉ {} segments\n", segments.len());
    for (i, segment) in segments.iter().enumerate() {
        let connector = if i == segments.len() - 1 {
            "└─"
        } else {
            "├─"
        };
        // Newlines would break the one-line-per-node layout.
        let line = label(segment).replace('\n', "↵");
        output.push_str(&format!("{} {}\n", connector, line));
    }
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, segments: &[Segment]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(segments))
    }

    fn description(&self) -> &str {
        "One line per segment, for inspection"
    }
}
