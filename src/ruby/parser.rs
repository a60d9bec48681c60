//! Ruby markup parser
//!
//! Splits a string into [`Segment`]s. Every input has a defined output: annotations
//! that cannot be attached to a base degrade to literal plain text.
//!
//! For each bracket match the text between the previous match and the opening
//! bracket (the *middle span*) is split into a plain part and a base:
//!
//! 1. If the span contains `|` or `｜`, the rightmost one separates plain text from
//!    the base, and the delimiter itself is dropped.
//! 2. Otherwise the trailing run of Han characters is the base.
//! 3. Otherwise the span and the whole bracket construct pass through verbatim.
//!
//! Whatever follows the last match becomes one final plain segment.

use super::scanning::{
    rightmost_delimiter, scan_brackets, trailing_han_start, with_predecessors, BracketMatch,
};
use super::segment::{compact, Segment};
use serde::Deserialize;

/// Knobs that change the shape of the output, not the resolution rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ParseOptions {
    /// Keep empty plain segments (before a base that starts the span, or an empty
    /// tail). When `false` they are dropped.
    pub keep_empty_plain: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            keep_empty_plain: true,
        }
    }
}

/// How a middle span was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    Delimiter,
    TrailingHan,
    Irregular,
}

/// Parser configured with [`ParseOptions`]. Stateless between calls.
#[derive(Debug, Clone, Default)]
pub struct RubyParser {
    options: ParseOptions,
}

impl RubyParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn parse(&self, source: &str) -> Vec<Segment> {
        let segments = parse_resolved(source, |_, _| {});
        if self.options.keep_empty_plain {
            segments
        } else {
            compact(segments)
        }
    }
}

/// Parse `source` with default options.
pub fn parse(source: &str) -> Vec<Segment> {
    parse_resolved(source, |_, _| {})
}

/// Core fold. `on_resolve` is told how each bracket match was handled, which lets
/// the diagnostics layer observe decisions without re-deriving them.
pub(crate) fn parse_resolved<F>(source: &str, mut on_resolve: F) -> Vec<Segment>
where
    F: FnMut(&BracketMatch, Resolution),
{
    let matches = scan_brackets(source);
    let mut segments = Vec::with_capacity(matches.len() * 2 + 1);

    for (previous_end, current) in with_predecessors(&matches) {
        match current {
            Some(current) => {
                let middle = &source[previous_end..current.whole.start];
                let annotation = current.annotation_text(source);
                let resolution = push_middle_span(&mut segments, middle, annotation, move || {
                    &source[previous_end..current.whole.end]
                });
                on_resolve(current, resolution);
            }
            None => segments.push(Segment::plain(&source[previous_end..])),
        }
    }

    segments
}

fn push_middle_span<'a>(
    segments: &mut Vec<Segment>,
    middle: &str,
    annotation: &str,
    verbatim: impl FnOnce() -> &'a str,
) -> Resolution {
    if let Some(delimiter) = rightmost_delimiter(middle) {
        let base = &middle[delimiter.end..];
        if base.is_empty() {
            tracing::debug!(middle, "delimiter with no base text, passing through");
            segments.push(Segment::plain(verbatim()));
            return Resolution::Irregular;
        }
        segments.push(Segment::plain(&middle[..delimiter.start]));
        segments.push(Segment::annotated(base, annotation));
        tracing::debug!(base, annotation, "annotation after explicit delimiter");
        return Resolution::Delimiter;
    }

    if let Some(start) = trailing_han_start(middle) {
        let base = &middle[start..];
        segments.push(Segment::plain(&middle[..start]));
        segments.push(Segment::annotated(base, annotation));
        tracing::debug!(base, annotation, "annotation on trailing Han run");
        return Resolution::TrailingHan;
    }

    let text = verbatim();
    tracing::debug!(text, "no base for annotation, passing through");
    segments.push(Segment::plain(text));
    Resolution::Irregular
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> Segment {
        Segment::plain(s)
    }

    fn ruby(base: &str, annotation: &str) -> Segment {
        Segment::annotated(base, annotation)
    }

    #[test]
    fn parses_plain_text() {
        assert_eq!(parse("hello world"), vec![plain("hello world")]);
    }

    #[test]
    fn empty_input_is_one_empty_plain() {
        assert_eq!(parse(""), vec![plain("")]);
    }

    #[test]
    fn trailing_han_is_the_base() {
        assert_eq!(
            parse("読む《よむ》"),
            vec![plain("読む《よむ》"), plain("")],
            "む is hiragana, so there is no trailing Han run"
        );
        assert_eq!(
            parse("本を読《よ》む"),
            vec![plain("本を"), ruby("読", "よ"), plain("む")]
        );
    }

    #[test]
    fn whole_span_of_han_leaves_empty_plain() {
        assert_eq!(
            parse("漢字《かんじ》"),
            vec![plain(""), ruby("漢字", "かんじ"), plain("")]
        );
    }

    #[test]
    fn delimiter_marks_the_base() {
        assert_eq!(
            parse("前|忠《ちゆう》後"),
            vec![plain("前"), ruby("忠", "ちゆう"), plain("後")]
        );
        assert_eq!(
            parse("これは｜ルビ《るび》"),
            vec![plain("これは"), ruby("ルビ", "るび"), plain("")]
        );
    }

    #[test]
    fn delimiter_beats_trailing_han() {
        assert_eq!(
            parse("東京|大学《だいがく》"),
            vec![plain("東京"), ruby("大学", "だいがく"), plain("")]
        );
    }

    #[test]
    fn rightmost_delimiter_wins() {
        assert_eq!(
            parse("a|b|c《x》"),
            vec![plain("a|b"), ruby("c", "x"), plain("")]
        );
    }

    #[test]
    fn irregular_match_passes_through() {
        assert_eq!(parse("abc《xyz》"), vec![plain("abc《xyz》"), plain("")]);
    }

    #[test]
    fn delimiter_without_base_is_irregular() {
        assert_eq!(parse("a|《x》b"), vec![plain("a|《x》"), plain("b")]);
    }

    #[test]
    fn consecutive_annotations() {
        assert_eq!(
            parse("東《ひがし》京《きょう》"),
            vec![
                plain(""),
                ruby("東", "ひがし"),
                plain(""),
                ruby("京", "きょう"),
                plain(""),
            ]
        );
    }

    #[test]
    fn delimiter_in_previous_span_is_not_reused() {
        // The `|` belongs to the first span only.
        assert_eq!(
            parse("|甲乙《こう》丙《へい》"),
            vec![
                plain(""),
                ruby("甲乙", "こう"),
                plain(""),
                ruby("丙", "へい"),
                plain(""),
            ]
        );
    }

    #[test]
    fn parenthesis_families() {
        assert_eq!(
            parse("漢(かん)字（じ）"),
            vec![
                plain(""),
                ruby("漢", "かん"),
                plain(""),
                ruby("字", "じ"),
                plain(""),
            ]
        );
        assert_eq!(
            parse("漢(かん）"),
            vec![plain(""), ruby("漢", "かん"), plain("")]
        );
    }

    #[test]
    fn compacting_parser_drops_empty_plain() {
        let parser = RubyParser::new(ParseOptions {
            keep_empty_plain: false,
        });
        assert_eq!(parser.parse("漢字《かんじ》"), vec![ruby("漢字", "かんじ")]);
        assert_eq!(parser.parse(""), Vec::<Segment>::new());
    }

    #[test]
    fn default_parser_matches_free_function() {
        let source = "行をまたぐ東京箱根間往復大学駅伝競走《とうきょうはこねかんおうふくだいがくえきでんきょうそう》が長い";
        assert_eq!(RubyParser::default().parse(source), parse(source));
    }

    #[test]
    fn long_han_run_after_kana() {
        let segments = parse("調べてみたら東京箱根間往復大学駅伝競走《とうきょう》が長い");
        assert_eq!(
            segments,
            vec![
                plain("調べてみたら"),
                ruby("東京箱根間往復大学駅伝競走", "とうきょう"),
                plain("が長い"),
            ]
        );
    }

    #[test]
    fn resolution_callback_sees_each_match() {
        let mut seen = Vec::new();
        parse_resolved("甲《こう》x《y》|乙《おつ》", |_, resolution| {
            seen.push(resolution)
        });
        assert_eq!(
            seen,
            vec![
                Resolution::TrailingHan,
                Resolution::Irregular,
                Resolution::Delimiter
            ]
        );
    }
}
