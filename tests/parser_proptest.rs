//! Property-based tests for the ruby parser
//!
//! Inputs are drawn from a small alphabet that is dense in brackets, delimiters,
//! Han, kana and ASCII so that every resolution path is exercised often.

use proptest::prelude::*;
use rubytext::ruby::formats::{Formatter, MarkupFormatter};
use rubytext::ruby::scanning::scan_brackets;
use rubytext::ruby::segment::base_text;
use rubytext::ruby::{parse, parse_with_diagnostics, DiagnosticKind, Segment};

fn markup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("漢"),
            Just("字"),
            Just("か"),
            Just("ナ"),
            Just("a"),
            Just(" "),
            Just("\n"),
            Just("|"),
            Just("｜"),
            Just("《"),
            Just("》"),
            Just("("),
            Just(")"),
            Just("（"),
            Just("）"),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// Text without delimiters and with only `《》` brackets, so every annotation can be
/// written back exactly where it came from.
fn regular_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z ]{1,3}",
            "[漢字東京]{1,3}",
            "[漢字東京]{1,2}《[かなよむ]{1,3}》",
        ],
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn parse_is_total(source in markup_strategy()) {
        let segments = parse(&source);
        prop_assert!(!segments.is_empty());
    }

    #[test]
    fn annotated_segments_are_never_empty(source in markup_strategy()) {
        for segment in parse(&source) {
            if let Segment::Annotated { base, annotation } = segment {
                prop_assert!(!base.is_empty());
                prop_assert!(!annotation.is_empty());
            }
        }
    }

    #[test]
    fn no_match_means_passthrough(source in "[^《》()（）]{0,40}") {
        prop_assert_eq!(parse(&source), vec![Segment::plain(source.clone())]);
    }

    #[test]
    fn last_segment_is_the_tail(source in markup_strategy()) {
        let segments = parse(&source);
        let tail_start = scan_brackets(&source).last().map_or(0, |m| m.whole.end);
        let tail = Segment::plain(&source[tail_start..]);
        prop_assert_eq!(segments.last(), Some(&tail));
    }

    #[test]
    fn regular_input_reconstructs(source in regular_strategy()) {
        let segments = parse(&source);
        let mut rebuilt = String::new();
        for segment in &segments {
            match segment {
                Segment::Plain { content } => rebuilt.push_str(content),
                Segment::Annotated { base, annotation } => {
                    rebuilt.push_str(base);
                    rebuilt.push('《');
                    rebuilt.push_str(annotation);
                    rebuilt.push('》');
                }
            }
        }
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn base_text_only_loses_brackets_and_annotations(source in regular_strategy()) {
        let segments = parse(&source);
        let annotations: usize = segments
            .iter()
            .filter_map(Segment::annotation)
            .map(|a| a.len() + "《》".len())
            .sum();
        prop_assert_eq!(base_text(&segments).len() + annotations, source.len());
    }

    #[test]
    fn markup_output_is_stable(source in markup_strategy()) {
        let once = MarkupFormatter.serialize(&parse(&source)).unwrap();
        let twice = MarkupFormatter.serialize(&parse(&once)).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn diagnostics_do_not_change_segments(source in markup_strategy()) {
        let report = parse_with_diagnostics(&source);
        prop_assert_eq!(report.segments, parse(&source));
    }

    #[test]
    fn every_irregular_fallback_is_reported(source in markup_strategy()) {
        let report = parse_with_diagnostics(&source);
        let reported = report
            .diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::IrregularFallback)
            .count();
        let annotated = report.segments.iter().filter(|s| !s.is_plain()).count();
        prop_assert_eq!(reported + annotated, scan_brackets(&source).len());
    }
}
