//! Config Loader: locate `taku.config.*` and evaluate it.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::paths::{CONFIG_FALLBACKS, DEFAULT_CONFIG_FILE};
use crate::domain::{AppError, ConfigFormat, ConfigValue};
use crate::ports::ConfigEvaluator;

/// Resolve the config file path against `root`.
///
/// An explicit path is used as given. Otherwise `taku.config.js` wins when it
/// exists, then the first existing fallback; when nothing exists the default
/// path is returned so the load error names it.
pub fn resolve_config_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return root.join(path);
    }

    let default = root.join(DEFAULT_CONFIG_FILE);
    if default.is_file() {
        return default;
    }

    CONFIG_FALLBACKS
        .iter()
        .map(|name| root.join(name))
        .find(|candidate| candidate.is_file())
        .inspect(|found| debug!(path = %found.display(), "using fallback config file"))
        .unwrap_or(default)
}

/// Load the configuration at `path`. Every call re-reads the file.
pub fn load_config<E: ConfigEvaluator>(
    path: &Path,
    evaluator: &E,
) -> Result<ConfigValue, AppError> {
    if !path.is_file() {
        return Err(AppError::config_load(path, "file not found"));
    }

    let format = ConfigFormat::from_path(path).ok_or_else(|| {
        AppError::config_load(
            path,
            "unsupported config format; expected .js, .mjs, .cjs, .json, .toml, .yaml or .yml",
        )
    })?;
    debug!(path = %path.display(), ?format, "loading config");

    let value = evaluator.evaluate(path, format)?;
    Ok(ConfigValue::new(value))
}
