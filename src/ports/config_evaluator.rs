use std::path::Path;

use serde_json::Value;

use crate::domain::{AppError, ConfigFormat};

/// Turns a configuration file on disk into an untyped value.
///
/// Implementations must read the file on every call; results are never cached.
pub trait ConfigEvaluator {
    /// Evaluate `path` as `format` and return its exported value.
    ///
    /// Failures are reported as `AppError::ConfigLoad`.
    fn evaluate(&self, path: &Path, format: ConfigFormat) -> Result<Value, AppError>;
}
