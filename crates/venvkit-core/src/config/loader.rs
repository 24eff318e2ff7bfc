//! Environment variable loading.
//!
//! Fallback chains (primary key → aliases → default) live here so callers never
//! repeat `or_else` ladders. Every helper has a `*_from` form that takes a lookup
//! closure, which is what the typed config structs are built on.

use std::env;
use std::path::Path;

/// Lookup function used by the `*_from` helpers.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

fn process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn first_set(lookup: Lookup<'_>, primary: &str, aliases: &[&str]) -> Option<String> {
    lookup(primary).or_else(|| aliases.iter().find_map(|a| lookup(*a)))
}

/// Read `primary` or the first set alias; empty values fall back to `default`.
pub fn env_or_from<F>(lookup: Lookup<'_>, primary: &str, aliases: &[&str], default: F) -> String
where
    F: FnOnce() -> String,
{
    env_optional_from(lookup, primary, aliases).unwrap_or_else(default)
}

/// Read `primary` or the first set alias as an `Option`; blank counts as unset.
pub fn env_optional_from(lookup: Lookup<'_>, primary: &str, aliases: &[&str]) -> Option<String> {
    first_set(lookup, primary, aliases).and_then(|s| {
        let s = s.trim().to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    })
}

/// Parse a boolean flag: 0/false/no/off are false, any other value is true.
pub fn env_bool_from(lookup: Lookup<'_>, primary: &str, aliases: &[&str], default: bool) -> bool {
    match first_set(lookup, primary, aliases).as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

/// Load `./.env` into the process environment (existing variables win).
///
/// Runs at most once per process.
pub fn load_dotenv() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        load_dotenv_unless_disabled(&dir, &process_env);
    });
}

/// [`load_dotenv_from_dir`] unless `VENVKIT_NO_DOTENV` is truthy in `lookup`.
pub fn load_dotenv_unless_disabled(dir: &Path, lookup: Lookup<'_>) -> usize {
    if env_bool_from(lookup, super::env_keys::VENVKIT_NO_DOTENV, &[], false) {
        tracing::debug!("Skipping .env (VENVKIT_NO_DOTENV)");
        return 0;
    }
    load_dotenv_from_dir(dir)
}

/// Load `<dir>/.env` into the process environment (existing variables win).
/// Returns the number of variables set.
pub fn load_dotenv_from_dir(dir: &Path) -> usize {
    let path = dir.join(".env");
    let Ok(content) = std::fs::read_to_string(&path) else {
        return 0;
    };
    let mut applied = 0;
    for (key, value) in parse_dotenv(&content) {
        if env::var(&key).is_err() {
            set_env_var(&key, &value);
            applied += 1;
        }
    }
    tracing::debug!(path = %path.display(), applied, "Loaded .env");
    applied
}

/// Parse `KEY=VALUE` lines. Blank lines and `#` comments are skipped, surrounding
/// quotes are stripped, and unquoted values lose trailing inline comments.
pub fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some(eq_pos) = line.find('=') else {
            continue;
        };
        let key = line[..eq_pos].trim();
        let mut value = line[eq_pos + 1..].trim();
        if let Some(hash_pos) = value.find('#') {
            let before_hash = value[..hash_pos].trim_end();
            if !before_hash.contains('"') && !before_hash.contains('\'') {
                value = before_hash;
            }
        }
        if value.len() >= 2
            && ((value.starts_with('"') && value.ends_with('"'))
                || (value.starts_with('\'') && value.ends_with('\'')))
        {
            value = &value[1..value.len() - 1];
        }
        if !key.is_empty() {
            out.push((key.to_string(), value.to_string()));
        }
    }
    out
}

// ─── Centralized env::set_var ───────────────────────────────────────────────
//
// SAFETY contract: call only from the main thread before any other threads exist.

/// Set a single environment variable.
#[allow(unsafe_code, unused_unsafe)]
pub fn set_env_var(key: &str, value: &str) {
    unsafe { env::set_var(key, value) };
}
