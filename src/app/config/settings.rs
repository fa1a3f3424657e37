//! Runtime settings read from `TAKU_*` environment variables.

use std::path::PathBuf;

use crate::domain::paths::{BUILD_SCRIPT_VAR, ENV_UUID_VAR, NODE_BINARY_VAR};

const DEFAULT_NODE_BINARY: &str = "node";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Identifier appended to the env file as `TAKU_ENV_UUID`. Never empty.
    pub env_uuid: Option<String>,
    /// JavaScript runtime used to evaluate `.js`/`.mjs`/`.cjs` configs.
    pub node_binary: String,
    /// Build script override for `taku build`.
    pub build_script: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { env_uuid: None, node_binary: DEFAULT_NODE_BINARY.to_string(), build_script: None }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            env_uuid: non_empty(ENV_UUID_VAR),
            node_binary: non_empty(NODE_BINARY_VAR)
                .unwrap_or_else(|| DEFAULT_NODE_BINARY.to_string()),
            build_script: non_empty(BUILD_SCRIPT_VAR).map(PathBuf::from),
        }
    }
}
