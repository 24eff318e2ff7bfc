use thiserror::Error;

/// Errors that abort a bootstrap run. Each maps to a process exit status.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("interpreter '{name}' not found in PATH")]
    MissingInterpreter {
        name: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to start '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with status {exit_code}")]
    CommandFailed { command: String, exit_code: i32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BootstrapError {
    /// Process exit status for this error. Failing child processes propagate theirs.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed { exit_code, .. } if *exit_code != 0 => *exit_code,
            _ => 1,
        }
    }
}
