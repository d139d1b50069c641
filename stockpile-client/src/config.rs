//! Client configuration

use std::time::Duration;

/// Default page size of the inventory table
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Default lifetime of a notification banner
pub const DEFAULT_BANNER_TTL: Duration = Duration::from_secs(3);

/// Configuration of the inventory screen client
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STOCKPILE_API_URL | http://localhost:3000 | Backend base URL |
/// | STOCKPILE_TOKEN | (none) | Bearer token to start with |
/// | STOCKPILE_TIMEOUT_SECS | 30 | Request timeout |
/// | STOCKPILE_PAGE_SIZE | 10 | Rows per table page |
/// | STOCKPILE_BANNER_TTL_SECS | 3 | Banner lifetime |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Rows per table page
    pub items_per_page: usize,

    /// How long a banner stays visible
    pub banner_ttl: Duration,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            banner_ttl: DEFAULT_BANNER_TTL,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("STOCKPILE_API_URL").unwrap_or_else(|_| "http://localhost:3000".into()),
        );
        config.token = std::env::var("STOCKPILE_TOKEN").ok().filter(|t| !t.is_empty());
        if let Some(timeout) = env_parse("STOCKPILE_TIMEOUT_SECS") {
            config.timeout = timeout;
        }
        if let Some(size) = env_parse::<usize>("STOCKPILE_PAGE_SIZE").filter(|s| *s > 0) {
            config.items_per_page = size;
        }
        if let Some(secs) = env_parse("STOCKPILE_BANNER_TTL_SECS") {
            config.banner_ttl = Duration::from_secs(secs);
        }
        config
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the table page size (zero is ignored)
    pub fn with_items_per_page(mut self, items: usize) -> Self {
        if items > 0 {
            self.items_per_page = items;
        }
        self
    }

    /// Set the banner lifetime
    pub fn with_banner_ttl(mut self, ttl: Duration) -> Self {
        self.banner_ttl = ttl;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::NetworkHttpClient> {
        crate::NetworkHttpClient::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
