//! `taku build`: hand the arguments to the build script.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::AppContext;
use crate::app::config::Settings;
use crate::domain::AppError;
use crate::domain::paths::DEFAULT_BUILD_SCRIPT;
use crate::ports::{ConfigEvaluator, EnvFileWriter, ScriptRunner};

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Script override; takes precedence over `TAKU_SCRIPT`.
    pub script: Option<PathBuf>,
    /// Arguments forwarded verbatim.
    pub args: Vec<String>,
}

/// Launch the build script and return its exit code.
pub fn execute<E, W, R>(
    ctx: &AppContext<E, W, R>,
    options: &BuildOptions,
) -> Result<i32, AppError>
where
    E: ConfigEvaluator,
    W: EnvFileWriter,
    R: ScriptRunner,
{
    let script = resolve_script(ctx.root(), options.script.as_deref(), ctx.settings())?;
    if !script.is_file() {
        return Err(AppError::ScriptLaunch { script, details: "script not found".to_string() });
    }

    debug!(script = %script.display(), "resolved build script");
    ctx.runner().run_script(&script, &options.args)
}

/// Explicit script, then `TAKU_SCRIPT`, then `main.sh` beside the running executable.
pub fn resolve_script(
    root: &Path,
    explicit: Option<&Path>,
    settings: &Settings,
) -> Result<PathBuf, AppError> {
    if let Some(script) = explicit.or(settings.build_script.as_deref()) {
        return Ok(root.join(script));
    }

    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(|dir| dir.join(DEFAULT_BUILD_SCRIPT))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_SCRIPT)))
}
