//! Well-known file names and environment variable names.

/// Default configuration module, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "taku.config.js";

/// Alternatives probed in order when the default config file is absent.
pub const CONFIG_FALLBACKS: [&str; 6] = [
    "taku.config.mjs",
    "taku.config.cjs",
    "taku.config.json",
    "taku.config.toml",
    "taku.config.yaml",
    "taku.config.yml",
];

/// Default env file written by `taku env`.
pub const DEFAULT_ENV_FILE: &str = "taku.config.env";

/// Build script launched by `taku build`, looked up next to the executable.
pub const DEFAULT_BUILD_SCRIPT: &str = "main.sh";

pub const ENV_UUID_VAR: &str = "TAKU_ENV_UUID";
pub const NODE_BINARY_VAR: &str = "TAKU_NODE";
pub const BUILD_SCRIPT_VAR: &str = "TAKU_SCRIPT";
pub const LOG_FILTER_VAR: &str = "TAKU_LOG";

/// Exported to the build script so it can call back into `taku env`.
pub const TAKU_BIN_VAR: &str = "TAKU_BIN";
