//! `taku env`: project the configuration into an env file.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::app::config::{load_config, resolve_config_path};
use crate::domain::paths::DEFAULT_ENV_FILE;
use crate::domain::{AppError, EnvRecord};
use crate::ports::{ConfigEvaluator, EnvFileWriter, ScriptRunner};

#[derive(Debug, Clone, Default)]
pub struct EnvOptions {
    /// Output file; `taku.config.env` when absent or empty.
    pub output: Option<PathBuf>,
    /// Config file; discovered when absent.
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct EnvOutcome {
    pub config_path: PathBuf,
    pub output_path: PathBuf,
    pub record: EnvRecord,
}

/// Load the configuration, then write the env record.
///
/// The output file is only touched after the configuration loaded successfully.
pub fn execute<E, W, R>(
    ctx: &AppContext<E, W, R>,
    options: &EnvOptions,
) -> Result<EnvOutcome, AppError>
where
    E: ConfigEvaluator,
    W: EnvFileWriter,
    R: ScriptRunner,
{
    let config_path = resolve_config_path(ctx.root(), options.config.as_deref());
    let config = load_config(&config_path, ctx.evaluator())?;

    let record = EnvRecord::from_config(&config, ctx.settings().env_uuid.as_deref());
    for key in record.unquotable_keys() {
        warn!(key, "value contains a double quote or line break and is written unescaped");
    }

    let output_path = resolve_output_path(ctx.root(), options.output.as_deref());
    debug!(path = %output_path.display(), entries = record.entries().len(), "writing env file");
    ctx.writer().write_env_file(&output_path, &record.render())?;
    info!(config = %config_path.display(), output = %output_path.display(), "env file written");

    Ok(EnvOutcome { config_path, output_path, record })
}

/// Resolve the output path against `root`, defaulting to `taku.config.env`.
pub fn resolve_output_path(root: &Path, output: Option<&Path>) -> PathBuf {
    let output = output
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new(DEFAULT_ENV_FILE));
    root.join(output)
}
