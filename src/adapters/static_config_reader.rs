//! Parsers for data-only configuration files.

use serde_json::Value;

use crate::domain::DataFormat;

/// Parse `content` as `format` into an untyped value.
///
/// Returns the parser's message on failure; callers attach the file path.
pub fn parse(format: DataFormat, content: &str) -> Result<Value, String> {
    match format {
        DataFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        DataFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        DataFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
    }
}
