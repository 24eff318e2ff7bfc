//! `venvkit info`: read-only report of configuration and environment state.

use anyhow::Result;
use std::io::Write;
use venvkit_core::config::BootstrapConfig;
use venvkit_env::interpreter::resolve_interpreter;
use venvkit_env::VenvPaths;

pub fn cmd_info(config: &BootstrapConfig) -> Result<()> {
    let stdout = std::io::stdout();
    write_info(config, &mut stdout.lock())
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

pub fn write_info<W: Write>(config: &BootstrapConfig, out: &mut W) -> Result<()> {
    let resolved = match resolve_interpreter(&config.interpreter) {
        Ok(path) => path.display().to_string(),
        Err(_) => "not found".to_string(),
    };
    let venv = VenvPaths::new(&config.venv_dir);

    writeln!(out, "Interpreter:       {} ({})", config.interpreter, resolved)?;
    writeln!(out, "Virtualenv dir:    {}", venv.root.display())?;
    writeln!(out, "  exists:          {}", yes_no(venv.exists()))?;
    writeln!(out, "  pyvenv.cfg:      {}", yes_no(venv.is_venv()))?;
    writeln!(out, "  python:          {}", venv.python.display())?;
    writeln!(out, "  activate with:   {}", venv.activate_hint())?;
    writeln!(
        out,
        "Requirements file: {} ({})",
        config.requirements.display(),
        if config.requirements.is_file() {
            "present"
        } else {
            "missing"
        }
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_reports_missing_pieces_without_mutation() {
        let tmp = tempfile::tempdir().unwrap();
        let config = BootstrapConfig {
            interpreter: "venvkit-no-such-python-3.99".into(),
            venv_dir: tmp.path().join(".venv"),
            requirements: tmp.path().join("requirements.txt"),
        };
        let mut out = Vec::new();

        write_info(&config, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("venvkit-no-such-python-3.99 (not found)"));
        assert!(out.contains("exists:          no"));
        assert!(out.contains("(missing)"));
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_info_reports_present_pieces() {
        let tmp = tempfile::tempdir().unwrap();
        let config = BootstrapConfig {
            interpreter: "python3".into(),
            venv_dir: tmp.path().join(".venv"),
            requirements: tmp.path().join("requirements.txt"),
        };
        std::fs::create_dir_all(&config.venv_dir).unwrap();
        std::fs::write(config.venv_dir.join("pyvenv.cfg"), "home = /usr/bin\n").unwrap();
        std::fs::write(&config.requirements, "six\n").unwrap();
        let mut out = Vec::new();

        write_info(&config, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("exists:          yes"));
        assert!(out.contains("pyvenv.cfg:      yes"));
        assert!(out.contains("(present)"));
    }
}
