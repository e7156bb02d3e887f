//! Configuration: TOML file, defaults, validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CheckoutConfig, Config, ServerConfig, StorageConfig};
