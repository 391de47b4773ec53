use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_confirmation_timeout_seconds() -> u64 {
    120
}

fn default_max_concurrent_resolutions() -> usize {
    8
}

fn default_log_filters() -> String {
    "info".to_string()
}

/// Transaction executor tuning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// How long to wait for a submitted transaction to confirm before the
    /// run aborts with `ConfirmationTimeout`.
    #[serde(default = "default_confirmation_timeout_seconds")]
    pub confirmation_timeout_seconds: u64,
}

impl ExecutorConfig {
    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_secs(self.confirmation_timeout_seconds)
    }
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self { confirmation_timeout_seconds: default_confirmation_timeout_seconds() }
    }
}

/// Graph build tuning.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Upper bound on in-flight address resolutions during a graph build.
    /// Resolutions are independent reads; the executor loop is never
    /// affected by this setting.
    #[serde(default = "default_max_concurrent_resolutions")]
    pub max_concurrent_resolutions: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { max_concurrent_resolutions: default_max_concurrent_resolutions() }
    }
}

/// Process-wide runtime settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Directory for the rolling log file. `None` logs to console only.
    #[serde(default)]
    pub log_dir: Option<String>,
    /// Log filter expression, e.g. `"info,weft_core=debug,root=warn"`.
    #[serde(default = "default_log_filters")]
    pub log_filters: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { log_dir: None, log_filters: default_log_filters() }
    }
}

/// Base configuration for the application.
///
/// The topology itself is never configuration; it arrives as caller-supplied
/// data. Only runtime tuning lives here.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub executor: ExecutorConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}
