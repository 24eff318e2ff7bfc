//! Subcommand implementations. Each depends only on venvkit-core / venvkit-env.
//!
//!   bootstrap   create venv, upgrade packaging tools, install requirements
//!   clean       remove the configured venv
//!   info        read-only status report

pub mod bootstrap;
pub mod clean;
pub mod info;
