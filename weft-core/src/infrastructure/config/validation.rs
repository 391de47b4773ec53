use crate::infrastructure::config::types::AppConfig;

const MAX_CONFIRMATION_TIMEOUT_SECONDS: u64 = 3600;
const MAX_CONCURRENT_RESOLUTIONS: usize = 64;

impl AppConfig {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.executor.confirmation_timeout_seconds == 0 {
            errors.push("executor.confirmation_timeout_seconds must be > 0".to_string());
        }
        if self.executor.confirmation_timeout_seconds > MAX_CONFIRMATION_TIMEOUT_SECONDS {
            errors.push(format!(
                "executor.confirmation_timeout_seconds should not exceed {}",
                MAX_CONFIRMATION_TIMEOUT_SECONDS
            ));
        }

        if self.resolver.max_concurrent_resolutions == 0 {
            errors.push("resolver.max_concurrent_resolutions must be > 0".to_string());
        }
        if self.resolver.max_concurrent_resolutions > MAX_CONCURRENT_RESOLUTIONS {
            errors.push(format!("resolver.max_concurrent_resolutions should not exceed {}", MAX_CONCURRENT_RESOLUTIONS));
        }

        if let Some(dir) = self.runtime.log_dir.as_ref() {
            if dir.trim().is_empty() {
                errors.push("runtime.log_dir must not be blank; omit it to disable file logging".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
