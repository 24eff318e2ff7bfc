//! Bootstraps an isolated Python environment: resolve the interpreter, create the
//! venv if missing, upgrade packaging tools, install the requirements manifest.

pub mod bootstrap;
pub mod error;
pub mod interpreter;
pub mod layout;
pub mod log;
pub mod runner;

pub use bootstrap::{BootstrapReport, Bootstrapper};
pub use error::BootstrapError;
pub use layout::VenvPaths;

#[cfg(all(test, unix))]
pub(crate) mod test_support;
