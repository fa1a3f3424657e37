use std::path::{Path, PathBuf};

use crate::app::config::Settings;
use crate::ports::{ConfigEvaluator, EnvFileWriter, ScriptRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<E: ConfigEvaluator, W: EnvFileWriter, R: ScriptRunner> {
    root: PathBuf,
    settings: Settings,
    evaluator: E,
    writer: W,
    runner: R,
}

impl<E: ConfigEvaluator, W: EnvFileWriter, R: ScriptRunner> AppContext<E, W, R> {
    /// Create a new application context rooted at `root`.
    pub fn new(root: PathBuf, settings: Settings, evaluator: E, writer: W, runner: R) -> Self {
        Self { root, settings, evaluator, writer, runner }
    }

    /// Directory that relative config, output, and script paths resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}
