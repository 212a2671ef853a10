//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Default creation-service address (the original dev backend).
const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";

/// Wizard configuration.
#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// Base URL of the interview-creation service.
    pub service_url: String,
    /// Timeout for the creation request.
    pub request_timeout: Duration,
    /// Path of the local session cache database.
    pub db_path: PathBuf,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            db_path: PathBuf::from("./data/sessions.db"),
        }
    }
}

impl WizardConfig {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// - `INTERVIEW_SERVICE_URL` — creation-service base URL
    /// - `INTERVIEW_REQUEST_TIMEOUT_SECS` — remote call timeout
    /// - `INTERVIEW_DB_PATH` — session cache location
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("INTERVIEW_SERVICE_URL") {
            config.service_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(raw) = std::env::var("INTERVIEW_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "INTERVIEW_REQUEST_TIMEOUT_SECS".into(),
                message: format!("expected a number of seconds, got '{raw}'"),
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Ok(path) = std::env::var("INTERVIEW_DB_PATH") {
            config.db_path = PathBuf::from(path);
        }

        Ok(config)
    }
}
