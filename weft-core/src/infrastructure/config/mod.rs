pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{load_config, load_config_from_file, CONFIG_FILE_NAME};
pub use types::{AppConfig, ExecutorConfig, ResolverConfig, RuntimeConfig};
