//! `venvkit clean`: remove the configured virtual environment.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;
use venvkit_core::config::BootstrapConfig;
use venvkit_env::VenvPaths;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    NothingToRemove,
    DryRun,
    Cancelled,
    Removed { bytes: u64 },
}

/// `venvkit clean`
pub fn cmd_clean(config: &BootstrapConfig, dry_run: bool, force: bool) -> Result<()> {
    let venv = VenvPaths::new(&config.venv_dir);
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut err = std::io::stderr();
    clean_venv(&venv, dry_run, force, &mut input, &mut err)?;
    Ok(())
}

pub fn clean_venv<R: BufRead, W: Write>(
    venv: &VenvPaths,
    dry_run: bool,
    force: bool,
    input: &mut R,
    out: &mut W,
) -> Result<CleanOutcome> {
    if !venv.exists() {
        writeln!(out, "No virtual environment found at {}", venv.root.display())?;
        return Ok(CleanOutcome::NothingToRemove);
    }

    let size = dir_size(&venv.root);
    writeln!(
        out,
        "🗂  Virtual environment at {} ({})",
        venv.root.display(),
        format_size(size)
    )?;

    if dry_run {
        writeln!(out, "(Dry run: nothing removed. Drop --dry-run to delete.)")?;
        return Ok(CleanOutcome::DryRun);
    }

    if !force {
        if !venv.is_venv() {
            anyhow::bail!(
                "{} has no pyvenv.cfg and does not look like a virtual environment; pass --force to remove it anyway",
                venv.root.display()
            );
        }
        write!(out, "Remove it? [y/N] ")?;
        out.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            writeln!(out, "Cancelled.")?;
            return Ok(CleanOutcome::Cancelled);
        }
    }

    std::fs::remove_dir_all(&venv.root)
        .with_context(|| format!("Failed to remove {}", venv.root.display()))?;
    tracing::info!(venv = %venv.root.display(), bytes = size, "Removed virtual environment");
    writeln!(out, "✓ Removed {}, freed {}", venv.root.display(), format_size(size))?;
    Ok(CleanOutcome::Removed { bytes: size })
}

/// Total size of regular files under `path`. Symlinks are not followed, so a
/// venv's `lib64 -> lib` link is not counted twice.
fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}

/// Format byte size to human-readable string.
fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
