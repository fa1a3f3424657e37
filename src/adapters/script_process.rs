use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::{debug, warn};

use crate::domain::AppError;
use crate::domain::paths::TAKU_BIN_VAR;
use crate::ports::ScriptRunner;

/// Spawns the build script as a child process with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessScriptRunner;

impl ProcessScriptRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptRunner for ProcessScriptRunner {
    fn run_script(&self, script: &Path, args: &[String]) -> Result<i32, AppError> {
        let mut command = Command::new(script);
        command.args(args);
        match std::env::current_exe() {
            Ok(exe) => {
                command.env(TAKU_BIN_VAR, exe);
            }
            Err(e) => warn!("cannot resolve taku executable for {}: {}", TAKU_BIN_VAR, e),
        }

        debug!(script = %script.display(), ?args, "launching build script");
        let status = command.status().map_err(|e| AppError::ScriptLaunch {
            script: script.to_path_buf(),
            details: e.to_string(),
        })?;

        let code = exit_code(status);
        debug!(code, "build script exited");
        Ok(code)
    }
}

/// Exit code to propagate for a finished child. Signals map to `128 + signal`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
