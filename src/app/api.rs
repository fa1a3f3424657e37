//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{AtomicEnvFileWriter, FilesystemConfigEvaluator, ProcessScriptRunner};
use crate::app::{
    AppContext,
    commands::{build, env},
};

pub use crate::app::commands::build::BuildOptions;
pub use crate::app::commands::env::{EnvOptions, EnvOutcome};
pub use crate::app::config::Settings;
pub use crate::domain::{AppError, EnvRecord};

type FilesystemContext =
    AppContext<FilesystemConfigEvaluator, AtomicEnvFileWriter, ProcessScriptRunner>;

/// Create an `AppContext` backed by the real filesystem and processes.
fn create_context(root: PathBuf, settings: Settings) -> FilesystemContext {
    let evaluator = FilesystemConfigEvaluator::new(settings.node_binary.clone(), root.clone());
    AppContext::new(
        root,
        settings,
        evaluator,
        AtomicEnvFileWriter::new(),
        ProcessScriptRunner::new(),
    )
}

/// Write the env file for the configuration in the current directory.
///
/// Settings are read from the process environment.
pub fn write_env(output: Option<&Path>, config: Option<&Path>) -> Result<EnvOutcome, AppError> {
    write_env_at(std::env::current_dir()?, output, config, Settings::from_env())
}

/// Write the env file with `root` as the working directory.
pub fn write_env_at(
    root: impl Into<PathBuf>,
    output: Option<&Path>,
    config: Option<&Path>,
    settings: Settings,
) -> Result<EnvOutcome, AppError> {
    let ctx = create_context(root.into(), settings);
    let options =
        EnvOptions { output: output.map(Path::to_path_buf), config: config.map(Path::to_path_buf) };
    env::execute(&ctx, &options)
}

/// Run the build script from the current directory and return its exit code.
pub fn launch(script: Option<&Path>, args: &[String]) -> Result<i32, AppError> {
    launch_at(std::env::current_dir()?, script, args, Settings::from_env())
}

/// Run the build script with `root` as the working directory for path resolution.
pub fn launch_at(
    root: impl Into<PathBuf>,
    script: Option<&Path>,
    args: &[String],
    settings: Settings,
) -> Result<i32, AppError> {
    let ctx = create_context(root.into(), settings);
    let options = BuildOptions { script: script.map(Path::to_path_buf), args: args.to_vec() };
    build::execute(&ctx, &options)
}
