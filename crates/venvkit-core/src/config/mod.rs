//! Unified configuration layer.
//!
//! Every environment variable read goes through this module; the rest of the
//! workspace consumes typed structs instead of calling `std::env::var` directly.
//!
//! - `loader`: `env_or_from`, `env_optional_from`, `env_bool_from`, `.env` loading
//! - `schema`: `BootstrapConfig`, `ObservabilityConfig`
//! - `env_keys`: key constants and aliases

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{load_dotenv, load_dotenv_from_dir, load_dotenv_unless_disabled, set_env_var};
pub use schema::{BootstrapConfig, ObservabilityConfig};
