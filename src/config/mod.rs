//! Configuration: a small TOML file for the catalog endpoint, with
//! defaults that point at the public fakestore instance.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config};
