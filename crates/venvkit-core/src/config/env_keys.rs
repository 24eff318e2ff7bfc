//! Environment variable keys and aliases.
//!
//! The bootstrap keys keep their short historical names (`PYTHON`, `VENV_DIR`,
//! `REQ_FILE`); the `VENVKIT_*` forms are accepted as aliases.

/// Bootstrap inputs
pub mod bootstrap {
    pub const PYTHON: &str = "PYTHON";
    pub const PYTHON_ALIASES: &[&str] = &["VENVKIT_PYTHON"];
    pub const DEFAULT_PYTHON: &str = "python3";

    pub const VENV_DIR: &str = "VENV_DIR";
    pub const VENV_DIR_ALIASES: &[&str] = &["VENVKIT_VENV_DIR"];
    pub const DEFAULT_VENV_DIR: &str = ".venv";

    pub const REQ_FILE: &str = "REQ_FILE";
    pub const REQ_FILE_ALIASES: &[&str] = &["VENVKIT_REQ_FILE"];
    pub const DEFAULT_REQ_FILE: &str = "requirements.txt";
}

/// Observability and logging
pub mod observability {
    pub const VENVKIT_QUIET: &str = "VENVKIT_QUIET";
    pub const VENVKIT_LOG_LEVEL: &str = "VENVKIT_LOG_LEVEL";
    pub const VENVKIT_LOG_JSON: &str = "VENVKIT_LOG_JSON";
    pub const VENVKIT_AUDIT_LOG: &str = "VENVKIT_AUDIT_LOG";
}

/// Set to 1 to skip reading `./.env` at startup.
pub const VENVKIT_NO_DOTENV: &str = "VENVKIT_NO_DOTENV";

/// Variables set on child processes to emulate `activate`.
pub mod activation {
    pub const VIRTUAL_ENV: &str = "VIRTUAL_ENV";
    pub const PATH: &str = "PATH";
    pub const PYTHONHOME: &str = "PYTHONHOME";
}
