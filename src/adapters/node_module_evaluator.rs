//! Evaluates JavaScript config modules in a separate `node` process.
//!
//! The module runs with the invoking user's privileges. Only the projected
//! fields cross back into taku, as a JSON report written to a temp file whose
//! path is handed to the loader; the module's own stdout is never parsed.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::debug;
use url::Url;

use crate::domain::AppError;
use crate::domain::env_record::FIXED_FIELDS;
use crate::domain::paths::NODE_BINARY_VAR;

const CONFIG_URL_VAR: &str = "TAKU_CONFIG_URL";
const CONFIG_FIELDS_VAR: &str = "TAKU_CONFIG_FIELDS";
const REPORT_PATH_VAR: &str = "TAKU_REPORT_PATH";

/// Imports the module, reads each requested field with optional chaining and
/// string coercion (`${value || ""}`), and writes only those strings back.
const LOADER_SCRIPT: &str = r#"
import { writeFileSync } from "node:fs";
const report = (value) => writeFileSync(process.env.TAKU_REPORT_PATH, JSON.stringify(value));
try {
  const mod = await import(process.env.TAKU_CONFIG_URL);
  const config = mod.default || mod;
  const value = {};
  for (const path of JSON.parse(process.env.TAKU_CONFIG_FIELDS)) {
    const leaf = path.reduce((node, key) => node?.[key], config);
    let parent = value;
    for (const key of path.slice(0, -1)) parent = parent[key] ??= {};
    parent[path[path.length - 1]] = `${leaf || ""}`;
  }
  report({ status: "ok", value });
} catch (error) {
  report({ status: "error", message: error instanceof Error ? error.message : String(error) });
}
"#;

static LOAD_SEQUENCE: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum EvaluationReport {
    Ok {
        #[serde(default)]
        value: Value,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct NodeModuleEvaluator {
    node_binary: String,
    working_dir: PathBuf,
}

impl NodeModuleEvaluator {
    /// `working_dir` is the directory node runs in, so `process.cwd()` inside
    /// the module is the caller's directory rather than the module's.
    pub fn new(node_binary: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self { node_binary: node_binary.into(), working_dir: working_dir.into() }
    }

    /// Import the module at `path` and project the configuration fields from
    /// its default export, or from the module namespace when there is none.
    pub fn evaluate_module(&self, path: &Path) -> Result<Value, AppError> {
        let fail = |details: String| AppError::config_load(path, details);

        let absolute = std::fs::canonicalize(path).map_err(|e| fail(e.to_string()))?;
        let url = module_url(&absolute)
            .ok_or_else(|| fail("path cannot be expressed as a file URL".to_string()))?;
        let fields = fields_json().map_err(|e| fail(e.to_string()))?;
        let report_file = tempfile::Builder::new()
            .prefix("taku-report-")
            .suffix(".json")
            .tempfile()
            .map_err(|e| fail(format!("failed to create loader report file: {}", e)))?;
        debug!(module = %url, node = %self.node_binary, "evaluating config module");

        let output = Command::new(&self.node_binary)
            .args(["--input-type=module", "--eval", LOADER_SCRIPT])
            .env(CONFIG_URL_VAR, url.as_str())
            .env(CONFIG_FIELDS_VAR, fields)
            .env(REPORT_PATH_VAR, report_file.path())
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    fail(format!(
                        "JavaScript runtime '{}' not found; install Node.js or set {}",
                        self.node_binary, NODE_BINARY_VAR
                    ))
                } else {
                    fail(format!("failed to start '{}': {}", self.node_binary, e))
                }
            })?;

        for line in String::from_utf8_lossy(&output.stdout).lines() {
            debug!("config stdout: {}", line);
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines().filter(|line| !line.trim().is_empty()) {
            debug!("node: {}", line);
        }

        match read_report(&report_file) {
            Some(Ok(EvaluationReport::Ok { value })) => Ok(value),
            Some(Ok(EvaluationReport::Error { message })) => Err(fail(message)),
            Some(Err(e)) => Err(fail(format!("malformed loader report: {}", e))),
            None => {
                let stderr = stderr.trim();
                Err(fail(if stderr.is_empty() {
                    format!("'{}' exited with {}", self.node_binary, output.status)
                } else {
                    stderr.to_string()
                }))
            }
        }
    }
}

/// `file://` URL for `path` with a query that is unique per load, so a module
/// loader never serves a previously imported copy.
fn module_url(path: &Path) -> Option<Url> {
    let mut url = Url::from_file_path(path).ok()?;
    url.set_query(Some(&format!("t={}", cache_bust_token())));
    Some(url)
}

fn cache_bust_token() -> String {
    let seq = LOAD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), seq)
}

/// Field paths the loader reads, as a JSON array of key arrays.
fn fields_json() -> serde_json::Result<String> {
    let paths: Vec<&[&str; 2]> = FIXED_FIELDS.iter().map(|(_, path)| path).collect();
    serde_json::to_string(&paths)
}

/// `None` when the loader never wrote its report (the runtime died first).
fn read_report(file: &NamedTempFile) -> Option<Result<EvaluationReport, serde_json::Error>> {
    let content = std::fs::read_to_string(file.path()).ok()?;
    if content.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(&content))
}
