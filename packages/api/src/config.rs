//! Backend origin configuration and URL assembly.

/// Which backend origin to talk to, fixed at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the compile-time `WANDERWISE_API_URL`, defaulting to the local
    /// development backend.
    pub fn from_env() -> Self {
        Self::new(option_env!("WANDERWISE_API_URL").unwrap_or("http://localhost:8080"))
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Join a base URL and an endpoint with exactly one separating slash,
/// however either side is decorated.
pub fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_normalizes_slashes() {
        let expected = "http://localhost:8080/api/destinations";
        assert_eq!(join_url("http://localhost:8080", "/api/destinations"), expected);
        assert_eq!(join_url("http://localhost:8080/", "api/destinations"), expected);
        assert_eq!(join_url("http://localhost:8080/", "/api/destinations"), expected);
        assert_eq!(join_url("http://localhost:8080", "api/destinations"), expected);
    }

    #[test]
    fn test_config_builds_absolute_urls() {
        let config = ApiConfig::new("https://api.wanderwise.example/");
        assert_eq!(
            config.url("/api/wishlist/42/check/7"),
            "https://api.wanderwise.example/api/wishlist/42/check/7"
        );
    }
}
