//! venvkit CLI library: argument parsing, dispatch and exit-code mapping.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, EnvArgs};
use venvkit_core::config::{self, BootstrapConfig};
use venvkit_core::observability;
use venvkit_env::BootstrapError;

/// Run the CLI: load `.env`, parse args, init tracing, dispatch.
pub fn run_cli() -> Result<()> {
    // Before parsing so clap's `env = ...` fallbacks see values from .env.
    config::load_dotenv();
    let cli = Cli::parse();
    observability::init_tracing();

    let bootstrap_config = resolve_config(&cli.env);
    tracing::debug!(?bootstrap_config, "Resolved configuration");

    match cli.command.unwrap_or(Commands::Bootstrap) {
        Commands::Bootstrap => commands::bootstrap::cmd_bootstrap(bootstrap_config),
        Commands::Clean { dry_run, force } => {
            commands::clean::cmd_clean(&bootstrap_config, dry_run, force)
        }
        Commands::Info => commands::info::cmd_info(&bootstrap_config),
    }
}

/// Flags (which already carry env values via clap) over env aliases over defaults.
fn resolve_config(args: &EnvArgs) -> BootstrapConfig {
    BootstrapConfig::from_env().with_overrides(
        args.python.clone(),
        args.venv_dir.clone(),
        args.requirements.clone(),
    )
}

/// Map an error to the process exit status: bootstrap errors carry their own,
/// anything else is 1.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BootstrapError>()
        .map(BootstrapError::exit_code)
        .unwrap_or(1)
}
