//! Venv layout and explicit activation.
//!
//! Instead of sourcing `activate` into the process, callers hold a [`VenvPaths`]
//! and build child commands from it. The parent environment is never touched.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use venvkit_core::config::env_keys::activation;

#[cfg(windows)]
const BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
const BIN_DIR: &str = "bin";

#[cfg(windows)]
const PYTHON_EXE: &str = "python.exe";
#[cfg(not(windows))]
const PYTHON_EXE: &str = "python";

/// Marker file written by `python -m venv`.
pub const PYVENV_CFG: &str = "pyvenv.cfg";

/// Paths inside a virtual environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenvPaths {
    /// Venv root as configured (may be relative to the working directory)
    pub root: PathBuf,
    pub bin_dir: PathBuf,
    pub python: PathBuf,
}

impl VenvPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let bin_dir = root.join(BIN_DIR);
        let python = bin_dir.join(PYTHON_EXE);
        Self {
            root,
            bin_dir,
            python,
        }
    }

    /// True when the root directory exists. Creation is skipped on this alone.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    /// True when the root looks like a venv (has `pyvenv.cfg`).
    pub fn is_venv(&self) -> bool {
        self.root.join(PYVENV_CFG).is_file()
    }

    /// Shell command that activates this venv in a future session.
    pub fn activate_hint(&self) -> String {
        let script = self.bin_dir.join("activate");
        if cfg!(windows) {
            script.display().to_string()
        } else {
            format!("source {}", script.display())
        }
    }

    /// Variables `activate` would set: VIRTUAL_ENV and PATH with the bin dir first.
    pub fn activation_env(&self) -> Vec<(&'static str, OsString)> {
        let root = absolutize(&self.root);
        let bin_dir = root.join(BIN_DIR);

        let mut entries = vec![bin_dir.clone()];
        if let Some(current) = std::env::var_os(activation::PATH) {
            entries.extend(std::env::split_paths(&current));
        }
        let path = std::env::join_paths(entries).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "PATH contains an invalid entry; using venv bin dir only");
            bin_dir.into_os_string()
        });

        vec![
            (activation::VIRTUAL_ENV, root.into_os_string()),
            (activation::PATH, path),
        ]
    }

    /// A `Command` running this venv's interpreter with the activation env applied.
    pub fn python_command(&self) -> Command {
        let mut cmd = Command::new(&self.python);
        cmd.envs(self.activation_env());
        cmd.env_remove(activation::PYTHONHOME);
        cmd
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let v = VenvPaths::new(".venv");
        assert_eq!(v.root, PathBuf::from(".venv"));
        if cfg!(windows) {
            assert_eq!(v.python, PathBuf::from(".venv").join("Scripts").join("python.exe"));
        } else {
            assert_eq!(v.python, PathBuf::from(".venv/bin/python"));
            assert_eq!(v.activate_hint(), "source .venv/bin/activate");
        }
    }

    #[test]
    fn test_exists_and_is_venv() {
        let tmp = tempfile::tempdir().unwrap();
        let v = VenvPaths::new(tmp.path().join("env"));
        assert!(!v.exists());
        std::fs::create_dir_all(&v.root).unwrap();
        assert!(v.exists());
        assert!(!v.is_venv());
        std::fs::write(v.root.join(PYVENV_CFG), "home = /usr/bin\n").unwrap();
        assert!(v.is_venv());
    }

    #[test]
    fn test_activation_env_is_absolute_and_prepends_bin() {
        let v = VenvPaths::new(".venv");
        let env = v.activation_env();

        let (_, virtual_env) = env.iter().find(|(k, _)| *k == "VIRTUAL_ENV").unwrap();
        let virtual_env = PathBuf::from(virtual_env);
        assert!(virtual_env.is_absolute());
        assert!(virtual_env.ends_with(".venv"));

        let (_, path) = env.iter().find(|(k, _)| *k == "PATH").unwrap();
        let first = std::env::split_paths(path).next().unwrap();
        assert_eq!(first, virtual_env.join(BIN_DIR));
    }

    #[test]
    fn test_python_command_clears_pythonhome() {
        let v = VenvPaths::new(".venv");
        let cmd = v.python_command();
        let envs: Vec<_> = cmd.get_envs().collect();

        assert!(envs
            .iter()
            .any(|(k, v)| *k == std::ffi::OsStr::new("PYTHONHOME") && v.is_none()));
        assert!(envs
            .iter()
            .any(|(k, v)| *k == std::ffi::OsStr::new("VIRTUAL_ENV") && v.is_some()));
        assert_eq!(cmd.get_program(), v.python.as_os_str());
    }
}
