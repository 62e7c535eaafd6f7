/// Errors raised while reading client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Content client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Internal API base, without trailing slash (default: `http://localhost:5000/api`).
    pub api_base_url: String,
    /// External CMS base. When unset, CMS-backed content always falls back
    /// to the bundled static data.
    pub cms_base_url: Option<String>,
    /// Per-request timeout in seconds (default: `10`).
    pub fetch_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000/api".into(),
            cms_base_url: None,
            fetch_timeout_secs: 10,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                     |
    /// |----------------------|-----------------------------|
    /// | `API_BASE_URL`       | `http://localhost:5000/api` |
    /// | `CMS_BASE_URL`       | unset                       |
    /// | `FETCH_TIMEOUT_SECS` | `10`                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("API_BASE_URL")
            .and_then(normalize_base)
            .unwrap_or(defaults.api_base_url);
        let cms_base_url = lookup("CMS_BASE_URL").and_then(normalize_base);

        let fetch_timeout_secs = match lookup("FETCH_TIMEOUT_SECS") {
            None => defaults.fetch_timeout_secs,
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "FETCH_TIMEOUT_SECS",
                    expected: "u64",
                    value,
                })?,
        };

        Ok(Self {
            api_base_url,
            cms_base_url,
            fetch_timeout_secs,
        })
    }
}

/// Trim whitespace and trailing slashes; blank values are treated as unset.
fn normalize_base(raw: String) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ClientConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert!(config.cms_base_url.is_none());
        assert_eq!(config.fetch_timeout_secs, 10);
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = load(&[
            ("API_BASE_URL", "https://smilecare.md/api/"),
            ("CMS_BASE_URL", " https://cms.smilecare.md// "),
        ])
        .unwrap();
        assert_eq!(config.api_base_url, "https://smilecare.md/api");
        assert_eq!(config.cms_base_url.as_deref(), Some("https://cms.smilecare.md"));
    }

    #[test]
    fn blank_cms_base_is_unset() {
        let config = load(&[("CMS_BASE_URL", "   ")]).unwrap();
        assert!(config.cms_base_url.is_none());
    }

    #[test]
    fn invalid_timeout_is_an_error() {
        assert_matches!(
            load(&[("FETCH_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::InvalidValue { key: "FETCH_TIMEOUT_SECS", .. })
        );
    }
}
