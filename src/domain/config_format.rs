use std::path::Path;

/// How a configuration file is turned into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JavaScript module, evaluated by a JS runtime.
    Module,
    /// Static data, parsed without evaluating any code.
    Data(DataFormat),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "js" | "mjs" | "cjs" => Some(ConfigFormat::Module),
            "json" => Some(ConfigFormat::Data(DataFormat::Json)),
            "toml" => Some(ConfigFormat::Data(DataFormat::Toml)),
            "yaml" | "yml" => Some(ConfigFormat::Data(DataFormat::Yaml)),
            _ => None,
        }
    }
}

impl DataFormat {
    pub fn label(&self) -> &'static str {
        match self {
            DataFormat::Json => "JSON",
            DataFormat::Toml => "TOML",
            DataFormat::Yaml => "YAML",
        }
    }
}
