use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::EnvFileWriter;

/// Symlink hops followed before giving up, matching the usual `ELOOP` limit.
const MAX_LINK_HOPS: usize = 40;

/// Writes the env file through a sibling temp file that is renamed into place.
///
/// A symlinked target is written through: the link stays and the file it
/// points at is replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtomicEnvFileWriter;

impl AtomicEnvFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl EnvFileWriter for AtomicEnvFileWriter {
    fn write_env_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let write_err = |source: io::Error| AppError::Write { path: path.to_path_buf(), source };

        let target = resolve_link_target(path).map_err(write_err)?;
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;

        // Temp files are created 0600; keep the mode of the file being replaced.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&target)
                .map(|m| m.permissions().mode() & 0o7777)
                .unwrap_or(0o644);
            tmp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(mode))
                .map_err(write_err)?;
        }

        tmp.persist(&target).map_err(|e| write_err(e.error))?;
        debug!(
            path = %path.display(),
            target = %target.display(),
            bytes = content.len(),
            "env file replaced"
        );
        Ok(())
    }
}

/// Follow `path` through any symlinks to the file that should be replaced.
/// A dangling link resolves to its missing destination.
fn resolve_link_target(path: &Path) -> io::Result<PathBuf> {
    let mut target = path.to_path_buf();
    for _ in 0..MAX_LINK_HOPS {
        match std::fs::symlink_metadata(&target) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = std::fs::read_link(&target)?;
                target = match target.parent() {
                    Some(parent) => parent.join(link),
                    None => link,
                };
            }
            _ => return Ok(target),
        }
    }
    Err(io::Error::other(format!("too many levels of symbolic links: {}", path.display())))
}
