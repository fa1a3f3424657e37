//! Build command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_build(script: Option<PathBuf>, args: Vec<String>) -> Result<i32, AppError> {
    crate::app::api::launch(script.as_deref(), &args)
}
