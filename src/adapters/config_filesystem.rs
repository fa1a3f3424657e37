use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::node_module_evaluator::NodeModuleEvaluator;
use super::static_config_reader;
use crate::domain::{AppError, ConfigFormat};
use crate::ports::ConfigEvaluator;

/// Reads configuration from disk: JS modules through node, data files through
/// their serde parsers.
#[derive(Debug, Clone)]
pub struct FilesystemConfigEvaluator {
    modules: NodeModuleEvaluator,
}

impl FilesystemConfigEvaluator {
    /// JS modules are evaluated with `root` as their working directory.
    pub fn new(node_binary: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self { modules: NodeModuleEvaluator::new(node_binary, root) }
    }
}

impl ConfigEvaluator for FilesystemConfigEvaluator {
    fn evaluate(&self, path: &Path, format: ConfigFormat) -> Result<Value, AppError> {
        match format {
            ConfigFormat::Module => self.modules.evaluate_module(path),
            ConfigFormat::Data(data) => {
                debug!(path = %path.display(), format = data.label(), "reading config data");
                let content = std::fs::read_to_string(path)
                    .map_err(|e| AppError::config_load(path, e.to_string()))?;
                static_config_reader::parse(data, &content).map_err(|details| {
                    AppError::config_load(path, format!("invalid {}: {}", data.label(), details))
                })
            }
        }
    }
}
