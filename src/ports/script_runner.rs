use std::path::Path;

use crate::domain::AppError;

pub trait ScriptRunner {
    /// Run `script` with `args`, inheriting stdio, and return its exit code.
    fn run_script(&self, script: &Path, args: &[String]) -> Result<i32, AppError>;
}
