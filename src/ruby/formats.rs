//! Output formats for parsed segments
//!
//! Segments are renderer-neutral; these formatters turn them into something a
//! consumer can use directly:
//! - `json` / `yaml`: the segment list as data
//! - `html`: `<ruby>` markup with `<rt>` annotations
//! - `text`: base text only, annotations dropped
//! - `markup`: canonical `｜base《annotation》` source
//! - `treeviz`: one line per segment, for eyeballing a parse

pub mod data;
pub mod html;
pub mod markup;
pub mod registry;
pub mod treeviz;

pub use data::{JsonFormatter, YamlFormatter};
pub use html::HtmlFormatter;
pub use markup::{MarkupFormatter, TextFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
