//! Typed configuration structs, loaded from environment variables.

use super::env_keys::{bootstrap as keys, observability as obv_keys};
use super::loader::{env_bool_from, env_optional_from, env_or_from, Lookup};
use std::path::PathBuf;

/// Bootstrap inputs: interpreter, venv directory, requirements manifest.
///
/// Values are resolved once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Executable used to create the venv (name searched on `PATH`, or a path)
    pub interpreter: String,
    pub venv_dir: PathBuf,
    pub requirements: PathBuf,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            interpreter: keys::DEFAULT_PYTHON.to_string(),
            venv_dir: PathBuf::from(keys::DEFAULT_VENV_DIR),
            requirements: PathBuf::from(keys::DEFAULT_REQ_FILE),
        }
    }
}

impl BootstrapConfig {
    /// Load from the process environment; unset or blank keys use defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(&|k: &str| std::env::var(k).ok())
    }

    /// Load through an arbitrary key lookup.
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            interpreter: env_or_from(lookup, keys::PYTHON, keys::PYTHON_ALIASES, || {
                keys::DEFAULT_PYTHON.to_string()
            }),
            venv_dir: PathBuf::from(env_or_from(
                lookup,
                keys::VENV_DIR,
                keys::VENV_DIR_ALIASES,
                || keys::DEFAULT_VENV_DIR.to_string(),
            )),
            requirements: PathBuf::from(env_or_from(
                lookup,
                keys::REQ_FILE,
                keys::REQ_FILE_ALIASES,
                || keys::DEFAULT_REQ_FILE.to_string(),
            )),
        }
    }

    /// Apply explicit overrides (CLI flags) on top of this config.
    pub fn with_overrides(
        mut self,
        interpreter: Option<String>,
        venv_dir: Option<PathBuf>,
        requirements: Option<PathBuf>,
    ) -> Self {
        if let Some(i) = interpreter.filter(|s| !s.trim().is_empty()) {
            self.interpreter = i;
        }
        if let Some(d) = venv_dir.filter(|p| !p.as_os_str().is_empty()) {
            self.venv_dir = d;
        }
        if let Some(r) = requirements.filter(|p| !p.as_os_str().is_empty()) {
            self.requirements = r;
        }
        self
    }
}

/// Observability: quiet, log_level, log_json, audit_log
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
    pub audit_log: Option<String>,
}

impl ObservabilityConfig {
    /// Process-wide cached view of the environment.
    pub fn from_env() -> &'static Self {
        use std::sync::OnceLock;
        static CACHE: OnceLock<ObservabilityConfig> = OnceLock::new();
        CACHE.get_or_init(|| Self::from_lookup(&|k: &str| std::env::var(k).ok()))
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            quiet: env_bool_from(lookup, obv_keys::VENVKIT_QUIET, &[], false),
            log_level: env_or_from(lookup, obv_keys::VENVKIT_LOG_LEVEL, &[], || {
                "venvkit=info".to_string()
            }),
            log_json: env_bool_from(lookup, obv_keys::VENVKIT_LOG_JSON, &[], false),
            audit_log: env_optional_from(lookup, obv_keys::VENVKIT_AUDIT_LOG, &[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> BootstrapConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BootstrapConfig::from_lookup(&|k: &str| map.get(k).cloned())
    }

    #[test]
    fn test_no_env_yields_defaults() {
        let cfg = config_from(&[]);
        assert_eq!(cfg, BootstrapConfig::default());
        assert_eq!(cfg.interpreter, "python3");
        assert_eq!(cfg.venv_dir, PathBuf::from(".venv"));
        assert_eq!(cfg.requirements, PathBuf::from("requirements.txt"));
    }

    #[test]
    fn test_env_overrides_each_value() {
        let cfg = config_from(&[
            ("PYTHON", "/opt/py/bin/python3.12"),
            ("VENV_DIR", "build/env"),
            ("REQ_FILE", "requirements-dev.txt"),
        ]);
        assert_eq!(cfg.interpreter, "/opt/py/bin/python3.12");
        assert_eq!(cfg.venv_dir, PathBuf::from("build/env"));
        assert_eq!(cfg.requirements, PathBuf::from("requirements-dev.txt"));
    }

    #[test]
    fn test_alias_and_blank_handling() {
        let cfg = config_from(&[("PYTHON", ""), ("VENVKIT_VENV_DIR", "venv")]);
        assert_eq!(cfg.interpreter, "python3");
        assert_eq!(cfg.venv_dir, PathBuf::from("venv"));
    }

    #[test]
    fn test_overrides_win_over_env() {
        let cfg = config_from(&[("PYTHON", "python3.11")]).with_overrides(
            Some("python3.13".into()),
            None,
            Some(PathBuf::from("req.txt")),
        );
        assert_eq!(cfg.interpreter, "python3.13");
        assert_eq!(cfg.venv_dir, PathBuf::from(".venv"));
        assert_eq!(cfg.requirements, PathBuf::from("req.txt"));
    }

    #[test]
    fn test_observability_defaults() {
        let cfg = ObservabilityConfig::from_lookup(&|_: &str| None);
        assert!(!cfg.quiet);
        assert!(!cfg.log_json);
        assert_eq!(cfg.log_level, "venvkit=info");
        assert!(cfg.audit_log.is_none());
    }
}
