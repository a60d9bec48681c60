//! Segment nodes produced by the ruby parser.
//!
//! A parse yields a flat, ordered `Vec<Segment>`. There is no nesting: each
//! segment is either a plain run of text or a base run carrying one annotation.

use serde::Serialize;

/// One piece of parsed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Literal text with no annotation. May be empty.
    Plain { content: String },
    /// Base text glossed by an annotation. Both sides are non-empty.
    Annotated { base: String, annotation: String },
}

impl Segment {
    pub fn plain(content: impl Into<String>) -> Self {
        Segment::Plain {
            content: content.into(),
        }
    }

    pub fn annotated(base: impl Into<String>, annotation: impl Into<String>) -> Self {
        Segment::Annotated {
            base: base.into(),
            annotation: annotation.into(),
        }
    }

    /// The text that sits on the line: `content` for plain runs, `base` otherwise.
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { content } => content,
            Segment::Annotated { base, .. } => base,
        }
    }

    /// Returns the annotation when this segment carries one.
    pub fn annotation(&self) -> Option<&str> {
        match self {
            Segment::Plain { .. } => None,
            Segment::Annotated { annotation, .. } => Some(annotation),
        }
    }

    /// Returns `true` when this segment is plain text.
    pub fn is_plain(&self) -> bool {
        matches!(self, Segment::Plain { .. })
    }

    /// Returns `true` for plain segments with no content.
    pub fn is_empty_plain(&self) -> bool {
        matches!(self, Segment::Plain { content } if content.is_empty())
    }
}

/// Concatenates the on-line text of every segment, dropping annotations.
pub fn base_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}

/// Drops empty plain segments, leaving everything else in order.
pub fn compact(segments: Vec<Segment>) -> Vec<Segment> {
    segments
        .into_iter()
        .filter(|segment| !segment.is_empty_plain())
        .collect()
}
