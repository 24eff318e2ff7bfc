//! Blocking child-process execution with fail-fast status propagation.
//!
//! Child stdio is inherited so the tools' own output streams to the terminal.

use std::path::Path;
use std::process::{Command, ExitStatus};
use std::time::Instant;

use venvkit_core::observability;

use crate::error::BootstrapError;
use crate::info_log;

/// Run `cmd` to completion. A non-zero exit becomes [`BootstrapError::CommandFailed`]
/// carrying the exit code the process should terminate with.
pub fn run_step(cmd: &mut Command) -> Result<(), BootstrapError> {
    run_step_audited(cmd, observability::audit_path().as_deref())
}

/// [`run_step`] with an explicit audit log destination (`None` disables auditing).
pub fn run_step_audited(cmd: &mut Command, audit: Option<&Path>) -> Result<(), BootstrapError> {
    let program = cmd.get_program().to_string_lossy().to_string();
    let args: Vec<String> = cmd
        .get_args()
        .map(|a| a.to_string_lossy().to_string())
        .collect();
    let shown = display_command(&program, &args);
    let cwd = std::env::current_dir()
        .map(|d| d.to_string_lossy().to_string())
        .unwrap_or_default();

    info_log!(command = %shown, "Running");
    if let Some(path) = audit {
        observability::audit_command_started(path, &program, &args, &cwd);
    }

    let started = Instant::now();
    let result = cmd.status();
    let duration_ms = started.elapsed().as_millis() as u64;
    if let Some(path) = audit {
        let code = result.as_ref().ok().and_then(|s| s.code());
        observability::audit_command_completed(path, &program, code, duration_ms);
    }

    let status = result.map_err(|source| BootstrapError::Spawn {
        program: program.clone(),
        source,
    })?;

    if status.success() {
        tracing::debug!(command = %shown, duration_ms, "Command finished");
        return Ok(());
    }

    let exit_code = exit_code_of(status);
    tracing::error!(command = %shown, exit_code, "Command failed");
    Err(BootstrapError::CommandFailed {
        command: shown,
        exit_code,
    })
}

/// Exit status a shell would report: the code, or 128 + signal when killed.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return 128 + sig;
        }
    }
    1
}

fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}
