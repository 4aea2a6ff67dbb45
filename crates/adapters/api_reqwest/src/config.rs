//! Remote API configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::client::ReqwestWorkshopApi;
use crate::error::ApiClientError;

/// Configuration for the remote workshop API client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the workshop server (scheme + host, no trailing path).
    pub base_url: String,
    /// Base URL material files are served from, when different from `base_url`.
    pub material_base_url: Option<String>,
    /// Per-request timeout in seconds. Unset means requests may hang forever.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            material_base_url: None,
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Base URL used for material links.
    #[must_use]
    pub fn material_base_url(&self) -> &str {
        self.material_base_url.as_deref().unwrap_or(&self.base_url)
    }

    /// Build a client from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::Client`] if the HTTP client cannot be built.
    pub fn build(&self) -> Result<ReqwestWorkshopApi, ApiClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(ApiClientError::Client)?;
        Ok(ReqwestWorkshopApi::new(
            client,
            &self.base_url,
            self.material_base_url(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_sensible_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.timeout_secs.is_none());
        assert_eq!(config.material_base_url(), "http://localhost:8080");
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            base_url = "https://workshops.example.com"
            material_base_url = "https://files.example.com"
            timeout_secs = 15
        "#;
        let config: ApiConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.base_url, "https://workshops.example.com");
        assert_eq!(config.material_base_url(), "https://files.example.com");
        assert_eq!(config.timeout_secs, Some(15));
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: ApiConfig = toml::from_str(r#"base_url = "http://10.0.0.2:9000""#).unwrap();
        assert_eq!(config.material_base_url(), "http://10.0.0.2:9000");
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn should_build_client_with_timeout() {
        let config = ApiConfig {
            timeout_secs: Some(5),
            ..ApiConfig::default()
        };
        assert!(config.build().is_ok());
    }
}
