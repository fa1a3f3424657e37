use std::path::Path;

use crate::domain::AppError;

pub trait EnvFileWriter {
    /// Replace the file at `path` with `content` in one step.
    ///
    /// A failure leaves any previous file at `path` untouched and is reported as
    /// `AppError::Write`.
    fn write_env_file(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
