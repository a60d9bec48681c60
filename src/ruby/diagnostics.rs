//! Strict-mode diagnostics
//!
//! Parsing never fails, but some inputs are probably not what the author meant.
//! [`parse_with_diagnostics`] returns the same segments as [`parse`](super::parse)
//! plus a list of non-fatal findings that tooling can show as warnings.

use super::parser::{parse_resolved, Resolution};
use super::scanning::{scan_brackets, stray_openings, BracketKind, BracketMatch};
use super::segment::Segment;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// What kind of surprise was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// Opening and closing bracket come from different families, e.g. `(…）`.
    MismatchedBrackets,
    /// An opening bracket appears inside an annotation; nesting is not supported.
    NestedOpening,
    /// No base could be resolved, so the annotation was rendered literally.
    IrregularFallback,
    /// An opening bracket was never closed.
    UnclosedBracket,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiagnosticKind::MismatchedBrackets => "mismatched-brackets",
            DiagnosticKind::NestedOpening => "nested-opening",
            DiagnosticKind::IrregularFallback => "irregular-fallback",
            DiagnosticKind::UnclosedBracket => "unclosed-bracket",
        };
        f.write_str(label)
    }
}

/// A single finding, located by byte range in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub range: Range<usize>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}: {}: {}",
            self.range.start, self.range.end, self.kind, self.message
        )
    }
}

/// Segments plus whatever the strict checks found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub segments: Vec<Segment>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse `source` and collect diagnostics, ordered by position.
pub fn parse_with_diagnostics(source: &str) -> ParseReport {
    let mut diagnostics = Vec::new();

    let segments = parse_resolved(source, |current, resolution| {
        check_match(source, current, &mut diagnostics);
        if resolution == Resolution::Irregular {
            diagnostics.push(Diagnostic {
                kind: DiagnosticKind::IrregularFallback,
                range: current.whole.clone(),
                message: format!(
                    "no base text for {}, kept as plain text",
                    current.whole_text(source)
                ),
            });
        }
    });

    check_unclosed(source, &scan_brackets(source), &mut diagnostics);
    diagnostics.sort_by_key(|d| (d.range.start, d.range.end));

    if !diagnostics.is_empty() {
        tracing::debug!(count = diagnostics.len(), "strict checks reported findings");
    }

    ParseReport {
        segments,
        diagnostics,
    }
}

fn check_match(source: &str, current: &BracketMatch, diagnostics: &mut Vec<Diagnostic>) {
    if current.is_mismatched() {
        diagnostics.push(Diagnostic {
            kind: DiagnosticKind::MismatchedBrackets,
            range: current.whole.clone(),
            message: format!(
                "'{}' closed by '{}'",
                current.opening.opening(),
                current.closing.closing()
            ),
        });
    }

    let annotation = current.annotation_text(source);
    if let Some((offset, kind)) = stray_openings(annotation).next() {
        let start = current.annotation.start + offset;
        diagnostics.push(Diagnostic {
            kind: DiagnosticKind::NestedOpening,
            range: start..start + kind.opening().len_utf8(),
            message: format!("'{}' inside annotation is not nested", kind.opening()),
        });
    }
}

/// Reports opening brackets in the gaps between matches. Closing brackets alone are
/// common in ordinary prose and are not reported.
fn check_unclosed(source: &str, matches: &[BracketMatch], diagnostics: &mut Vec<Diagnostic>) {
    let mut gaps = Vec::with_capacity(matches.len() + 1);
    let mut gap_start = 0;
    for m in matches {
        gaps.push(gap_start..m.whole.start);
        gap_start = m.whole.end;
    }
    gaps.push(gap_start..source.len());

    for gap in gaps {
        for (offset, kind) in stray_openings(&source[gap.clone()]) {
            let start = gap.start + offset;
            diagnostics.push(unclosed(start, kind));
        }
    }
}

fn unclosed(start: usize, kind: BracketKind) -> Diagnostic {
    Diagnostic {
        kind: DiagnosticKind::UnclosedBracket,
        range: start..start + kind.opening().len_utf8(),
        message: format!("'{}' has no closing bracket", kind.opening()),
    }
}
