//! Case tables for the ruby parser
//!
//! Each case lists the expected segments in compact notation: `"text"` for a plain
//! segment and `"base《annotation》"` for an annotated one.

use rstest::rstest;
use rubytext::ruby::{parse, ParseOptions, RubyParser, Segment};

fn describe(segments: &[Segment]) -> Vec<String> {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain { content } => content.clone(),
            Segment::Annotated { base, annotation } => format!("{base}《{annotation}》"),
        })
        .collect()
}

#[rstest]
#[case::no_brackets("hello world", &["hello world"])]
#[case::empty("", &[""])]
#[case::only_delimiters("||｜", &["||｜"])]
#[case::bracket_soup("《》()（）", &["《》()", "（）"])]
#[case::han_base("東京《とうきょう》", &["", "東京《とうきょう》", ""])]
#[case::han_after_kana("今日は東京《とうきょう》へ", &["今日は", "東京《とうきょう》", "へ"])]
#[case::delimiter("忠|ちゆう《ちゆう》", &["忠", "ちゆう《ちゆう》", ""])]
#[case::full_width_delimiter("前｜東京《とうきょう》後", &["前", "東京《とうきょう》", "後"])]
#[case::rightmost_delimiter("a|b｜c《x》", &["a|b", "c《x》", ""])]
#[case::delimiter_over_han("東京|大学《だいがく》", &["東京", "大学《だいがく》", ""])]
#[case::irregular("abc《xyz》", &["abc《xyz》", ""])]
#[case::irregular_between("漢《かん》abc《xyz》end", &["", "漢《かん》", "abc《xyz》", "end"])]
#[case::kana_before_bracket("読む《よむ》", &["読む《よむ》", ""])]
#[case::ascii_parens("字(じ)", &["", "字《じ》", ""])]
#[case::full_width_parens("字（じ）", &["", "字《じ》", ""])]
#[case::mismatched_families("字(じ）", &["", "字《じ》", ""])]
#[case::nested("甲《a《b》c》", &["", "甲《a《b》", "c》"])]
#[case::empty_body("漢《》", &["漢《》"])]
#[case::across_lines("漢《か\nん》", &["漢《か\nん》"])]
#[case::multiline(
    "行《ぎょう》\n|忠《ちゆう》",
    &["", "行《ぎょう》", "\n", "忠《ちゆう》", ""]
)]
fn parses(#[case] source: &str, #[case] expected: &[&str]) {
    assert_eq!(describe(&parse(source)), expected);
}

#[rstest]
#[case("東京《とうきょう》", &["東京《とうきょう》"])]
#[case("今日は東京《とうきょう》へ", &["今日は", "東京《とうきょう》", "へ"])]
#[case("", &[])]
#[case("abc《xyz》", &["abc《xyz》"])]
fn compact_parse(#[case] source: &str, #[case] expected: &[&str]) {
    let parser = RubyParser::new(ParseOptions {
        keep_empty_plain: false,
    });
    assert_eq!(describe(&parser.parse(source)), expected);
}

#[test]
fn long_sample_document() {
    let source = "行をまたぐパターンを試したいのだけど、調べてみたら東京箱根間往復大学駅伝競走《とうきょうはこねかんおうふくだいがくえきでんきょうそう》が長い\n|忠《ちゆ》";
    let segments = parse(source);
    assert_eq!(
        describe(&segments),
        vec![
            "行をまたぐパターンを試したいのだけど、調べてみたら",
            "東京箱根間往復大学駅伝競走《とうきょうはこねかんおうふくだいがくえきでんきょうそう》",
            "が長い\n",
            "忠《ちゆ》",
            "",
        ]
    );
}
