//! Env command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_env(output: Option<PathBuf>, config: Option<PathBuf>) -> Result<(), AppError> {
    let outcome = crate::app::api::write_env(output.as_deref(), config.as_deref())?;
    println!("✅ Wrote {}", outcome.output_path.display());
    Ok(())
}
