//! Fetcher configuration
//!
//! Loaded from a YAML file, with the base URL overridable from the
//! environment. Every field except `base_url` has a default.

use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use crate::types::{
    CacheMode, OptionStringExt, StatusPolicy, StringMap, DEFAULT_RECORDS_FIELD,
    DEFAULT_RESOURCE_PATH,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Environment variable that overrides `base_url`
pub const BASE_URL_ENV: &str = "CATALOG_BASE_URL";

/// Complete fetcher configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Origin the resource path resolves against
    #[serde(default)]
    pub base_url: String,

    /// Path of the catalog document
    #[serde(default = "default_resource_path")]
    pub resource_path: String,

    /// Envelope field holding the records
    #[serde(default = "default_records_field")]
    pub records_field: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Extra request headers
    #[serde(default)]
    pub headers: StringMap,

    #[serde(default)]
    pub cache_mode: CacheMode,

    #[serde(default)]
    pub status_policy: StatusPolicy,
}

fn default_resource_path() -> String {
    DEFAULT_RESOURCE_PATH.to_string()
}

fn default_records_field() -> String {
    DEFAULT_RECORDS_FIELD.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            resource_path: default_resource_path(),
            records_field: default_records_field(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            headers: StringMap::new(),
            cache_mode: CacheMode::default(),
            status_policy: StatusPolicy::default(),
        }
    }
}

impl FetcherConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply overrides from the environment
    #[must_use]
    pub fn apply_env(mut self) -> Self {
        if let Some(base_url) = std::env::var(BASE_URL_ENV).ok().none_if_empty() {
            self.base_url = base_url;
        }
        self
    }

    /// Check the configuration before any request is made
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() && url::Url::parse(&self.resource_path).is_err() {
            return Err(Error::missing_field("base_url"));
        }

        if !self.base_url.is_empty() {
            url::Url::parse(&self.base_url)?;
        }

        if !self.resource_path.starts_with('/') && url::Url::parse(&self.resource_path).is_err() {
            return Err(Error::invalid_value(
                "resource_path",
                "must start with '/' or be an absolute URL",
            ));
        }

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value(
                "timeout_secs",
                "must be greater than zero",
            ));
        }

        if self.records_field.is_empty() {
            return Err(Error::invalid_value("records_field", "must not be empty"));
        }

        Ok(())
    }

    /// HTTP client settings derived from this configuration
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .cache_mode(self.cache_mode)
            .status_policy(self.status_policy);

        if !self.base_url.is_empty() {
            builder = builder.base_url(self.base_url.clone());
        }

        if let Some(agent) = self.user_agent.clone().none_if_empty() {
            builder = builder.user_agent(agent);
        }

        for (key, value) in &self.headers {
            builder = builder.header(key.clone(), value.clone());
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_from_minimal_yaml() {
        let config = FetcherConfig::from_yaml("base_url: https://shop.example.com\n").unwrap();

        assert_eq!(config.base_url, "https://shop.example.com");
        assert_eq!(config.resource_path, "/urunler.json");
        assert_eq!(config.records_field, "products");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.cache_mode, CacheMode::Bypass);
        assert_eq!(config.status_policy, StatusPolicy::Ignore);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r"
base_url: https://shop.example.com
resource_path: /data/catalog.json
records_field: data.products
timeout_secs: 5
user_agent: storefront/2.0
headers:
  X-Store: fzd
cache_mode: default
status_policy: strict
";
        let config = FetcherConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.resource_path, "/data/catalog.json");
        assert_eq!(config.records_field, "data.products");
        assert_eq!(config.cache_mode, CacheMode::Default);
        assert_eq!(config.status_policy, StatusPolicy::Strict);
        assert_eq!(config.headers.get("X-Store"), Some(&"fzd".to_string()));

        let http = config.http_config();
        assert_eq!(http.timeout, Duration::from_secs(5));
        assert_eq!(http.user_agent, "storefront/2.0");
        assert_eq!(http.base_url.as_deref(), Some("https://shop.example.com"));
        assert_eq!(http.status_policy, StatusPolicy::Strict);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = FetcherConfig::from_yaml("timeout_secs: [not, a, number]").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_validate_missing_base_url() {
        let err = FetcherConfig::default().validate().unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_validate_absolute_resource_without_base() {
        let config = FetcherConfig {
            resource_path: "https://cdn.example.com/urunler.json".to_string(),
            ..FetcherConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = FetcherConfig {
            base_url: "https://shop.example.com".to_string(),
            ..FetcherConfig::default()
        };

        let zero_timeout = FetcherConfig {
            timeout_secs: 0,
            ..base.clone()
        };
        assert!(matches!(
            zero_timeout.validate().unwrap_err(),
            Error::InvalidConfigValue { ref field, .. } if field == "timeout_secs"
        ));

        let bad_path = FetcherConfig {
            resource_path: "urunler.json".to_string(),
            ..base.clone()
        };
        assert!(matches!(
            bad_path.validate().unwrap_err(),
            Error::InvalidConfigValue { ref field, .. } if field == "resource_path"
        ));

        let bad_url = FetcherConfig {
            base_url: "shop example".to_string(),
            ..base
        };
        assert!(matches!(bad_url.validate().unwrap_err(), Error::InvalidUrl(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://localhost:3000").unwrap();

        let config = FetcherConfig::load(file.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_load_missing_file() {
        let err = FetcherConfig::load("/nonexistent/catalog.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_apply_env_overrides_base_url() {
        let config = FetcherConfig {
            base_url: "https://shop.example.com".to_string(),
            ..FetcherConfig::default()
        };

        std::env::set_var(BASE_URL_ENV, "http://localhost:8080");
        let overridden = config.clone().apply_env();
        std::env::set_var(BASE_URL_ENV, "");
        let empty = config.clone().apply_env();
        std::env::remove_var(BASE_URL_ENV);
        let unset = config.apply_env();

        assert_eq!(overridden.base_url, "http://localhost:8080");
        assert_eq!(empty.base_url, "https://shop.example.com");
        assert_eq!(unset.base_url, "https://shop.example.com");
    }
}
