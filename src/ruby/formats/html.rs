//! HTML `<ruby>` output
//!
//! Annotated segments become `<ruby>base<rt>annotation</rt></ruby>`. With
//! `parentheses` on, `<rp>` fallbacks are added so browsers without ruby support
//! show `base(annotation)`. `annotation_scale` sets the `<rt>` font size relative
//! to the base text; `1.0` omits the style attribute.

use super::registry::{FormatError, Formatter};
use crate::ruby::segment::Segment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HtmlFormatter {
    pub parentheses: bool,
    pub annotation_scale: f64,
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self {
            parentheses: true,
            annotation_scale: 0.5,
        }
    }
}

impl HtmlFormatter {
    fn rt_open(&self) -> String {
        if (self.annotation_scale - 1.0).abs() < f64::EPSILON {
            "<rt>".to_string()
        } else {
            format!(
                "<rt style=\"font-size: {}%\">",
                (self.annotation_scale * 100.0).round()
            )
        }
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, segments: &[Segment]) -> Result<String, FormatError> {
        let rt_open = self.rt_open();
        let mut output = String::new();

        for segment in segments {
            match segment {
                Segment::Plain { content } => output.push_str(&escape(content)),
                Segment::Annotated { base, annotation } => {
                    output.push_str("<ruby>");
                    output.push_str(&escape(base));
                    if self.parentheses {
                        output.push_str("<rp>(</rp>");
                    }
                    output.push_str(&rt_open);
                    output.push_str(&escape(annotation));
                    output.push_str("</rt>");
                    if self.parentheses {
                        output.push_str("<rp>)</rp>");
                    }
                    output.push_str("</ruby>");
                }
            }
        }

        Ok(output)
    }

    fn description(&self) -> &str {
        "HTML with <ruby> annotations"
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
