mod loader;
mod types;

pub use loader::{ConfigError, Overrides, BACKEND_URL_ENV};
pub use types::{BackendConfig, Config, Defaults};
