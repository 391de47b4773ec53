//! Configuration loader using Figment for layered config management.
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. TOML config file
//! 3. Environment variables (WEFT_* prefix)

use crate::foundation::WiringError;
use crate::infrastructure::config::types::AppConfig;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use log::{debug, info};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "weft-config.toml";

/// Environment variable prefix for config overrides.
///
/// Example: `WEFT_EXECUTOR__CONFIRMATION_TIMEOUT_SECONDS` ->
/// `executor.confirmation_timeout_seconds`
const ENV_PREFIX: &str = "WEFT_";

/// Load configuration from the default file in `data_dir` (`weft-config.toml`).
pub fn load_config(data_dir: &Path) -> Result<AppConfig, WiringError> {
    load_config_from_file(&data_dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from a specific file path. A missing file is not an
/// error; defaults and environment overrides still apply.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig, WiringError> {
    info!("loading configuration path={}", path.display());

    let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));
    if path.exists() {
        figment = figment.merge(Toml::file(path));
    } else {
        debug!("configuration file missing; using defaults and env only path={}", path.display());
    }

    let config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .map_err(|e| WiringError::ConfigError(format!("config extraction failed: {e}")))?;

    config.validate().map_err(|errors| WiringError::ConfigError(errors.join("; ")))?;

    debug!(
        "configuration loaded confirmation_timeout_seconds={} max_concurrent_resolutions={}",
        config.executor.confirmation_timeout_seconds, config.resolver.max_concurrent_resolutions
    );
    Ok(config)
}
