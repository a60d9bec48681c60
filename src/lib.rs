//! # rubytext
//!
//! A parser for inline ruby (furigana) annotation markup.
//!
//! Text such as `|東京《とうきょう》へ行く` is split into a flat sequence of
//! [`Segment`](ruby::Segment)s: plain runs and base/annotation pairs. The output is
//! renderer-agnostic; see the [formats module](ruby::formats) for the bundled
//! serializers.

pub mod ruby;

pub use ruby::{parse, Segment};
