//! Observability: tracing init and the JSONL audit log.
//!
//! Uses config::ObservabilityConfig for VENVKIT_QUIET, VENVKIT_LOG_LEVEL,
//! VENVKIT_LOG_JSON and VENVKIT_AUDIT_LOG.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use serde_json::json;
use tracing_subscriber::{prelude::*, EnvFilter};

static AUDIT_PATH: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Initialize tracing. Call once at process startup.
///
/// Logs go to stderr; stdout is reserved for progress output. When
/// VENVKIT_QUIET=1 only WARN and above are emitted. `RUST_LOG` overrides both.
pub fn init_tracing() {
    let cfg = crate::config::ObservabilityConfig::from_env();
    let level = if cfg.quiet {
        "venvkit=warn".to_string()
    } else {
        cfg.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}

/// Audit log path from VENVKIT_AUDIT_LOG, cached after the first call. The
/// parent directory is created on first use.
pub fn audit_path() -> Option<PathBuf> {
    {
        let guard = AUDIT_PATH.lock().ok()?;
        if let Some(ref p) = *guard {
            return Some(p.clone());
        }
    }
    let path = PathBuf::from(
        crate::config::ObservabilityConfig::from_env()
            .audit_log
            .clone()?,
    );
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    {
        let mut guard = AUDIT_PATH.lock().ok()?;
        *guard = Some(path.clone());
    }
    Some(path)
}

fn now_ts() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Append one JSON record as a line. Write errors are ignored.
fn append_jsonl(path: &Path, record: &serde_json::Value) {
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
        if let Ok(line) = serde_json::to_string(record) {
            let _ = writeln!(f, "{}", line);
        }
    }
}

fn command_started_record(program: &str, args: &[String], cwd: &str) -> serde_json::Value {
    json!({
        "ts": now_ts(),
        "event": "command_started",
        "program": program,
        "args": args,
        "cwd": cwd,
    })
}

fn command_completed_record(program: &str, exit_code: Option<i32>, duration_ms: u64) -> serde_json::Value {
    json!({
        "ts": now_ts(),
        "event": "command_completed",
        "program": program,
        "exit_code": exit_code,
        "duration_ms": duration_ms,
        "success": exit_code == Some(0),
    })
}

/// Audit: command_started (right before spawn)
pub fn audit_command_started(path: &Path, program: &str, args: &[String], cwd: &str) {
    append_jsonl(path, &command_started_record(program, args, cwd));
}

/// Audit: command_completed. `exit_code` is `None` when the child was killed by a
/// signal or never started.
pub fn audit_command_completed(path: &Path, program: &str, exit_code: Option<i32>, duration_ms: u64) {
    append_jsonl(path, &command_completed_record(program, exit_code, duration_ms));
}
