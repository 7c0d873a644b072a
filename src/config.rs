//! Configuration handling for the TUI

use crate::submission::SimulatedSignupService;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default simulated request time in milliseconds
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignupConfig {
    /// Simulated signup request time in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Make every simulated signup request fail
    pub simulate_failure: Option<bool>,
}

impl SignupConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: SignupConfig = serde_json::from_str(&content)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    /// Build the signup service described by this configuration
    pub fn signup_service(&self) -> SimulatedSignupService {
        let fail = self.simulate_failure.unwrap_or(false);
        let service = SimulatedSignupService::new(self.submit_delay()).failing(fail);
        tracing::debug!(
            delay_ms = service.delay().as_millis() as u64,
            simulate_failure = fail,
            "configured simulated signup service"
        );
        service
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SignupConfig::default();
        assert!(config.submit_delay_ms.is_none());
        assert!(config.simulate_failure.is_none());
        assert_eq!(config.submit_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_serialization() {
        let config = SignupConfig {
            submit_delay_ms: Some(250),
            simulate_failure: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SignupConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.submit_delay_ms, Some(250));
        assert_eq!(parsed.simulate_failure, Some(true));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SignupConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.submit_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"submit_delay_ms": 5, "unknown_field": "value"}"#;
        let parsed: SignupConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.submit_delay(), Duration::from_millis(5));
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = std::env::temp_dir().join("signup-tui-missing-config.json");
        let config = SignupConfig::load_from(&path).unwrap();
        assert!(config.submit_delay_ms.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "signup-tui-config-{}.json",
            uuid::Uuid::new_v4()
        ));
        fs::write(&path, r#"{"submit_delay_ms": 20, "simulate_failure": false}"#).unwrap();

        let config = SignupConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.submit_delay(), Duration::from_millis(20));
        assert_eq!(config.simulate_failure, Some(false));
    }

    #[test]
    fn test_load_from_invalid_file_errors() {
        let path = std::env::temp_dir().join(format!(
            "signup-tui-bad-config-{}.json",
            uuid::Uuid::new_v4()
        ));
        fs::write(&path, "not json").unwrap();

        let result = SignupConfig::load_from(&path);
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("invalid config in"));
    }

    #[test]
    fn test_signup_service_uses_delay() {
        let config = SignupConfig {
            submit_delay_ms: Some(42),
            ..Default::default()
        };
        assert_eq!(config.signup_service().delay(), Duration::from_millis(42));
    }

    #[test]
    fn test_load_from_partial_file_fills_defaults() {
        let path = std::env::temp_dir().join(format!(
            "signup-tui-partial-config-{}.json",
            uuid::Uuid::new_v4()
        ));
        fs::write(&path, r#"{"simulate_failure": true}"#).unwrap();

        let result = SignupConfig::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.submit_delay(), Duration::from_secs(1));
        assert_eq!(config.simulate_failure, Some(true));
    }
}
