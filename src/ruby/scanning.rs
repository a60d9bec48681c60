//! Bracket scanning and offset helpers
//!
//! The scan is a single, non-recursive regex pass. Opening and closing brackets are
//! matched by family membership only, so `(かな）` is accepted even though the
//! kinds differ, and an inner opening bracket is swallowed into the annotation of
//! the outer one. Both limitations are inherited on purpose; see
//! [`diagnostics`](super::diagnostics) for a way to surface them.
//!
//! All ranges are half-open byte ranges into the scanned `&str` and always fall
//! on `char` boundaries.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static BRACKET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(《|\(|（)(.+?)(》|\)|）)").expect("bracket pattern is valid"));

static TRAILING_HAN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Han}+$").expect("Han pattern is valid"));

/// Explicit base-text delimiters, ASCII and full-width.
pub const DELIMITERS: [char; 2] = ['|', '｜'];

/// The three bracket families recognised around an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    /// `《` `》`
    DoubleAngle,
    /// `(` `)`
    Paren,
    /// `（` `）`
    FullWidthParen,
}

impl BracketKind {
    pub fn from_opening(ch: char) -> Option<Self> {
        match ch {
            '《' => Some(BracketKind::DoubleAngle),
            '(' => Some(BracketKind::Paren),
            '（' => Some(BracketKind::FullWidthParen),
            _ => None,
        }
    }

    pub fn from_closing(ch: char) -> Option<Self> {
        match ch {
            '》' => Some(BracketKind::DoubleAngle),
            ')' => Some(BracketKind::Paren),
            '）' => Some(BracketKind::FullWidthParen),
            _ => None,
        }
    }

    pub fn opening(self) -> char {
        match self {
            BracketKind::DoubleAngle => '《',
            BracketKind::Paren => '(',
            BracketKind::FullWidthParen => '（',
        }
    }

    pub fn closing(self) -> char {
        match self {
            BracketKind::DoubleAngle => '》',
            BracketKind::Paren => ')',
            BracketKind::FullWidthParen => '）',
        }
    }
}

/// One bracketed annotation found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketMatch {
    /// The full construct, brackets included.
    pub whole: Range<usize>,
    /// The text strictly between the brackets. Never empty.
    pub annotation: Range<usize>,
    pub opening: BracketKind,
    pub closing: BracketKind,
}

impl BracketMatch {
    /// Whether the opening and closing bracket belong to different families.
    pub fn is_mismatched(&self) -> bool {
        self.opening != self.closing
    }

    pub fn annotation_text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.annotation.clone()]
    }

    pub fn whole_text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.whole.clone()]
    }
}

/// Finds every bracketed annotation, left to right, without overlap.
pub fn scan_brackets(source: &str) -> Vec<BracketMatch> {
    let matches: Vec<BracketMatch> = BRACKET_REGEX
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let opening = caps.get(1)?;
            let inner = caps.get(2)?;
            let closing = caps.get(3)?;
            Some(BracketMatch {
                whole: whole.range(),
                annotation: inner.range(),
                opening: first_char(opening.as_str()).and_then(BracketKind::from_opening)?,
                closing: first_char(closing.as_str()).and_then(BracketKind::from_closing)?,
            })
        })
        .collect();

    tracing::trace!(count = matches.len(), "scanned bracket matches");
    matches
}

/// Pairs each match with the end offset of its predecessor.
///
/// The start of input acts as a zero-length predecessor of the first match, and a
/// final `None` entry stands for the end of input, so callers see
/// `(0, Some(m0)), (m0.end, Some(m1)), ..., (mN.end, None)`.
pub fn with_predecessors(
    matches: &[BracketMatch],
) -> impl Iterator<Item = (usize, Option<&BracketMatch>)> + '_ {
    let predecessor_ends = std::iter::once(0).chain(matches.iter().map(|m| m.whole.end));
    let currents = matches.iter().map(Some).chain(std::iter::once(None));
    predecessor_ends.zip(currents)
}

/// Byte range of the rightmost `|` or `｜` in `text`.
pub fn rightmost_delimiter(text: &str) -> Option<Range<usize>> {
    text.char_indices()
        .rev()
        .find(|(_, ch)| DELIMITERS.contains(ch))
        .map(|(index, ch)| index..index + ch.len_utf8())
}

/// Start offset of the run of Han characters that ends `text`, if any.
pub fn trailing_han_start(text: &str) -> Option<usize> {
    TRAILING_HAN_REGEX.find(text).map(|m| m.start())
}

/// Byte offsets of opening brackets in `text` that are not part of any match.
pub fn stray_openings(text: &str) -> impl Iterator<Item = (usize, BracketKind)> + '_ {
    text.char_indices()
        .filter_map(|(index, ch)| BracketKind::from_opening(ch).map(|kind| (index, kind)))
}

fn first_char(text: &str) -> Option<char> {
    text.chars().next()
}
