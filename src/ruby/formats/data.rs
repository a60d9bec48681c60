//! Data formats: the segment list as JSON or YAML.

use super::registry::{FormatError, Formatter};
use crate::ruby::segment::Segment;

/// JSON array of `{"kind": ..}` objects.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, segments: &[Segment]) -> Result<String, FormatError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(segments)
        } else {
            serde_json::to_string(segments)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Segments as a JSON array"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, segments: &[Segment]) -> Result<String, FormatError> {
        serde_yaml::to_string(segments).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Segments as a YAML sequence"
    }
}
