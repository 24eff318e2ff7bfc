//! Fake `python` for exercising the bootstrapper without a real interpreter.
//!
//! `-m venv DIR` copies the script to `DIR/bin/python` and writes `pyvenv.cfg`;
//! `-m pip ARGS` appends `ARGS` (plus the PYTHONHOME and VIRTUAL_ENV it saw) to
//! `<venv parent>/calls.log`. Pip exits with 9
//! when `<venv parent>/pip-fail` exists.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const FAKE_PYTHON: &str = r#"#!/bin/sh
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
    mkdir -p "$3/bin" || exit 1
    cp "$0" "$3/bin/python" || exit 1
    echo "home = /fake" > "$3/pyvenv.cfg"
    echo "venv $3" >> "$(dirname "$3")/calls.log"
    exit 0
fi
if [ "$1" = "-m" ] && [ "$2" = "pip" ]; then
    shift 2
    base="$(dirname "$0")/../.."
    echo "pip $* PYTHONHOME=${PYTHONHOME-unset} VIRTUAL_ENV=$VIRTUAL_ENV" >> "$base/calls.log"
    if [ -f "$base/pip-fail" ]; then
        exit 9
    fi
    exit 0
fi
exit 2
"#;

/// Path to the shared fake interpreter (created once per test process).
pub fn fake_python() -> PathBuf {
    static FAKE: OnceLock<(tempfile::TempDir, PathBuf)> = OnceLock::new();
    let (_, path) = FAKE.get_or_init(|| {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("python3");
        std::fs::write(&path, FAKE_PYTHON).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        (dir, path)
    });
    path.clone()
}

/// Lines recorded by the fake interpreter under `workdir`.
pub fn calls(workdir: &Path) -> Vec<String> {
    std::fs::read_to_string(workdir.join("calls.log"))
        .unwrap_or_default()
        .lines()
        .map(String::from)
        .collect()
}
