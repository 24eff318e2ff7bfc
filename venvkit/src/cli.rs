use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// venvkit - bootstrap a Python virtual environment for a project
#[derive(Parser, Debug)]
#[command(name = "venvkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub env: EnvArgs,

    /// Defaults to `bootstrap` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Bootstrap inputs. Flags win over env vars, env vars over defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct EnvArgs {
    /// Python interpreter used to create the environment [default: python3]
    #[arg(long, global = true, env = "PYTHON", value_name = "PYTHON")]
    pub python: Option<String>,

    /// Virtual environment directory [default: .venv]
    #[arg(long, global = true, env = "VENV_DIR", value_name = "DIR")]
    pub venv_dir: Option<PathBuf>,

    /// Requirements manifest [default: requirements.txt]
    #[arg(long, global = true, env = "REQ_FILE", value_name = "FILE")]
    pub requirements: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create the venv if missing, upgrade pip/setuptools/wheel, install requirements
    Bootstrap,

    /// Remove the configured virtual environment
    Clean {
        /// Only report what would be removed
        #[arg(long)]
        dry_run: bool,

        /// Skip the confirmation prompt and the pyvenv.cfg check
        #[arg(long, short)]
        force: bool,
    },

    /// Show resolved configuration and environment status
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["venvkit"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "venvkit",
            "clean",
            "--dry-run",
            "--venv-dir",
            "build/env",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Clean {
                dry_run: true,
                force: false
            })
        );
        assert_eq!(cli.env.venv_dir, Some(PathBuf::from("build/env")));
    }

    #[test]
    fn test_flags_before_subcommand() {
        let cli = Cli::try_parse_from([
            "venvkit",
            "--python",
            "python3.12",
            "--requirements",
            "req-dev.txt",
            "bootstrap",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Commands::Bootstrap));
        assert_eq!(cli.env.python.as_deref(), Some("python3.12"));
        assert_eq!(cli.env.requirements, Some(PathBuf::from("req-dev.txt")));
    }
}
