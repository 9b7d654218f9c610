use std::env;
use std::time::Duration;

use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";

#[derive(Clone, Debug)]
pub struct Config {
    /// Catalog root, without trailing slash
    pub catalog_base_url: String,
    /// `None` means requests never time out
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_base = lookup("CATALOG_BASE_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let parsed = url::Url::parse(&raw_base)
            .map_err(|e| DomainError::Config(format!("CATALOG_BASE_URL '{}': {}", raw_base, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::Config(format!(
                "CATALOG_BASE_URL must be http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let request_timeout = match lookup("CATALOG_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    DomainError::Config(format!("CATALOG_TIMEOUT_SECS '{}' is not a number", raw))
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            catalog_base_url: raw_base.trim_end_matches('/').to_string(),
            request_timeout,
            user_agent: lookup("CATALOG_USER_AGENT")
                .unwrap_or_else(|| format!("Shelfscout/{}", env!("CARGO_PKG_VERSION"))),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            user_agent: format!("Shelfscout/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.catalog_base_url, "https://openlibrary.org");
        assert!(config.request_timeout.is_none());
        assert!(config.user_agent.starts_with("Shelfscout/"));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config =
            Config::from_lookup(lookup_from(&[("CATALOG_BASE_URL", "http://127.0.0.1:9000/")]))
                .unwrap();
        assert_eq!(config.catalog_base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = Config::from_lookup(lookup_from(&[("CATALOG_BASE_URL", "not a url")]))
            .unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));

        let err = Config::from_lookup(lookup_from(&[("CATALOG_BASE_URL", "ftp://example.org")]))
            .unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_timeout_parsing() {
        let config =
            Config::from_lookup(lookup_from(&[("CATALOG_TIMEOUT_SECS", "7")])).unwrap();
        assert_eq!(config.request_timeout, Some(Duration::from_secs(7)));

        let config =
            Config::from_lookup(lookup_from(&[("CATALOG_TIMEOUT_SECS", "0")])).unwrap();
        assert!(config.request_timeout.is_none());

        assert!(Config::from_lookup(lookup_from(&[("CATALOG_TIMEOUT_SECS", "soon")])).is_err());
    }
}
