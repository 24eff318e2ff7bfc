//! `venvkit bootstrap` (also the default command).

use anyhow::Result;
use venvkit_core::config::BootstrapConfig;
use venvkit_env::Bootstrapper;

/// Errors are returned as `BootstrapError` inside `anyhow` so the exit status survives.
pub fn cmd_bootstrap(config: BootstrapConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Bootstrapper::new(config).run(&mut out)?;
    Ok(())
}
