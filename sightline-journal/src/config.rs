//! Configuration for the remote document store

use serde::{Deserialize, Serialize};

/// Environment variable consulted for the API token when the config does
/// not carry one.
pub const STORE_TOKEN_ENV: &str = "SIGHTLINE_STORE_TOKEN";

/// Remote document store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base endpoint URL (HTTPS required)
    pub endpoint: String,

    /// Document collection appended to
    pub collection: String,

    /// Bearer token; falls back to `SIGHTLINE_STORE_TOKEN` when unset
    pub api_token: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Retry policy for failed writes
    pub retry: RetryConfig,
}

/// Retry configuration for store writes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum retry attempts after the first try
    pub max_retries: u32,

    /// Initial retry delay in milliseconds
    pub initial_delay_ms: u64,

    /// Maximum retry delay in milliseconds
    pub max_delay_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            collection: "activity_log".to_string(),
            api_token: None,
            timeout_secs: 10,
            retry: RetryConfig::default(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay_ms: 100,
            max_delay_ms: 5000,
        }
    }
}

impl RetryConfig {
    /// Validate retry configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_retries > 100 {
            return Err("Max retries too large (max 100)".to_string());
        }

        if self.initial_delay_ms > 60_000 {
            return Err("Initial delay too large (max 60000 ms)".to_string());
        }

        if self.max_delay_ms > 300_000 {
            return Err("Max delay too large (max 300000 ms)".to_string());
        }

        if self.initial_delay_ms > self.max_delay_ms {
            return Err("Initial delay cannot be greater than max delay".to_string());
        }

        Ok(())
    }
}

impl StoreConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.is_empty() {
            return Err("Store endpoint cannot be empty".to_string());
        }

        if !self.endpoint.starts_with("https://") {
            return Err("Store endpoint must use HTTPS".to_string());
        }

        if self.endpoint.len() > 2048 {
            return Err("Store endpoint URL too long (max 2048 chars)".to_string());
        }

        if self.endpoint.chars().any(|c| c == '\0' || c.is_control()) {
            return Err("Store endpoint contains invalid characters".to_string());
        }

        if self.collection.is_empty() {
            return Err("Collection name cannot be empty".to_string());
        }

        if self.collection.len() > 128 {
            return Err("Collection name too long (max 128 chars)".to_string());
        }

        if !self
            .collection
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(
                "Collection name contains invalid characters (alphanumeric, '_' and '-' allowed)"
                    .to_string(),
            );
        }

        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err("Timeout must be between 1 and 300 seconds".to_string());
        }

        self.retry.validate()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> StoreConfig {
        StoreConfig {
            endpoint: "https://store.example.com".to_string(),
            ..StoreConfig::default()
        }
    }

    #[test]
    fn test_config_valid() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_config_rejects_empty_endpoint() {
        let config = StoreConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_plain_http() {
        let mut config = valid_config();
        config.endpoint = "http://store.example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_bad_collection() {
        let mut config = valid_config();
        config.collection = "activity log".to_string();
        assert!(config.validate().is_err());

        config.collection = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_bad_timeout() {
        let mut config = valid_config();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
        config.timeout_secs = 301;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_retry_config_validation() {
        let mut retry = RetryConfig::default();
        assert!(retry.validate().is_ok());

        retry.initial_delay_ms = 10_000;
        retry.max_delay_ms = 5000;
        assert!(retry.validate().is_err());

        retry = RetryConfig::default();
        retry.max_retries = 101;
        assert!(retry.validate().is_err());
    }
}
