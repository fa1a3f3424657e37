//! Environment record projected from the configuration and its `.env` rendering.

use super::config_value::ConfigValue;
use super::paths::ENV_UUID_VAR;

/// Fixed projection from configuration fields to env keys, in output order.
pub const FIXED_FIELDS: [(&str, [&str; 2]); 4] = [
    ("FRONTEND_TYPE", ["frontend", "type"]),
    ("FRONTEND_BUILD_CMD", ["frontend", "buildCommand"]),
    ("BACKEND_TYPE", ["backend", "type"]),
    ("BACKEND_BUILD_CMD", ["backend", "buildCommand"]),
];

/// Ordered key/value pairs written to the env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvRecord {
    entries: Vec<(&'static str, String)>,
}

impl EnvRecord {
    /// Project the fixed fields, then append `TAKU_ENV_UUID` when `env_uuid` is non-empty.
    pub fn from_config(config: &ConfigValue, env_uuid: Option<&str>) -> Self {
        let mut entries: Vec<(&'static str, String)> =
            FIXED_FIELDS.iter().map(|(key, path)| (*key, config.string_at(path))).collect();

        if let Some(uuid) = env_uuid.filter(|uuid| !uuid.is_empty()) {
            entries.push((ENV_UUID_VAR, uuid.to_string()));
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    /// Keys whose values cannot be represented faithfully in the output.
    ///
    /// Values are written between double quotes without escaping, so an embedded
    /// `"` or line break corrupts the line.
    pub fn unquotable_keys(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|(_, v)| v.contains('"') || v.contains('\n') || v.contains('\r'))
            .map(|(k, _)| *k)
            .collect()
    }

    /// Render as `KEY="VALUE"` lines, each terminated by a newline.
    pub fn render(&self) -> String {
        self.entries.iter().map(|(key, value)| format!("{}=\"{}\"\n", key, value)).collect()
    }
}
