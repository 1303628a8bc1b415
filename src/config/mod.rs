//! Configuration: TOML file, defaults, and credential resolution.

mod credentials;
mod loader;
mod types;

pub use credentials::{
    check_fresh, parse_header_lines, read_bearer_file, Access, CredentialError, Credentials,
    SecureString,
};
pub use loader::ConfigError;
pub use types::{AccountConfig, AuthConfig, CacheConfig, Config, PacksConfig, ServiceConfig};
