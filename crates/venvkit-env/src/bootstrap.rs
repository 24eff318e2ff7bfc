//! The bootstrap procedure.
//!
//! Flow:
//!   1. Echo the resolved configuration
//!   2. Resolve the interpreter (fatal if missing, before any filesystem change)
//!   3. Create the venv unless its directory already exists
//!   4. Upgrade pip / setuptools / wheel inside the venv
//!   5. Install the requirements manifest, or warn if it is absent
//!   6. Print the activation hint
//!
//! Every child process runs through [`run_step`], so the first failure aborts.

use std::io::Write;
use std::process::Command;

use venvkit_core::config::BootstrapConfig;

use crate::error::BootstrapError;
use crate::info_log;
use crate::interpreter::resolve_interpreter;
use crate::layout::VenvPaths;
use crate::runner::run_step;

/// Packaging tools upgraded on every run.
pub const PACKAGING_TOOLS: &[&str] = &["pip", "setuptools", "wheel"];

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub venv: VenvPaths,
    /// False when the venv directory already existed
    pub created: bool,
    /// False when the requirements file was missing
    pub requirements_installed: bool,
}

pub struct Bootstrapper {
    config: BootstrapConfig,
}

impl Bootstrapper {
    pub fn new(config: BootstrapConfig) -> Self {
        Self { config }
    }

    /// Run the whole procedure, writing progress lines to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<BootstrapReport, BootstrapError> {
        let cfg = &self.config;
        writeln!(out, "Using interpreter: {}", cfg.interpreter)?;
        writeln!(out, "Virtualenv dir:    {}", cfg.venv_dir.display())?;
        writeln!(out, "Requirements file: {}", cfg.requirements.display())?;

        let interpreter = resolve_interpreter(&cfg.interpreter)?;
        let venv = VenvPaths::new(&cfg.venv_dir);

        let created = if venv.exists() {
            writeln!(
                out,
                "Virtual environment already exists at {}",
                venv.root.display()
            )?;
            false
        } else {
            writeln!(out, "Creating virtual environment in {}", venv.root.display())?;
            out.flush()?;
            run_step(Command::new(&interpreter).arg("-m").arg("venv").arg(&venv.root))?;
            true
        };

        writeln!(out, "Upgrading {}", PACKAGING_TOOLS.join(", "))?;
        out.flush()?;
        run_step(
            venv.python_command()
                .args(["-m", "pip", "install", "--upgrade"])
                .args(PACKAGING_TOOLS),
        )?;

        let requirements_installed = if cfg.requirements.is_file() {
            writeln!(
                out,
                "Installing dependencies from {}",
                cfg.requirements.display()
            )?;
            out.flush()?;
            run_step(
                venv.python_command()
                    .args(["-m", "pip", "install", "-r"])
                    .arg(&cfg.requirements),
            )?;
            true
        } else {
            writeln!(
                out,
                "⚠ {} not found, skipping dependency installation",
                cfg.requirements.display()
            )?;
            tracing::warn!(requirements = %cfg.requirements.display(), "Requirements file missing");
            false
        };

        writeln!(out)?;
        writeln!(out, "✓ Environment ready. To activate it later, run:")?;
        writeln!(out, "    {}", venv.activate_hint())?;
        info_log!(venv = %venv.root.display(), created, requirements_installed, "Bootstrap complete");

        Ok(BootstrapReport {
            venv,
            created,
            requirements_installed,
        })
    }
}
