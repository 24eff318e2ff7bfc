//! Interpreter lookup on the search path.

use std::path::PathBuf;

use crate::error::BootstrapError;

/// Resolve `name` to an executable path.
///
/// Bare names are searched on `PATH`; names containing a path separator are
/// checked relative to the current directory (or taken as absolute).
pub fn resolve_interpreter(name: &str) -> Result<PathBuf, BootstrapError> {
    match which::which(name) {
        Ok(path) => {
            tracing::debug!(interpreter = %name, resolved = %path.display(), "Resolved interpreter");
            Ok(path)
        }
        Err(source) => Err(BootstrapError::MissingInterpreter {
            name: name.to_string(),
            source,
        }),
    }
}
