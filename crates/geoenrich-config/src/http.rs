//! HTTP client configuration.
//!
//! Generation calls are billed, so requests always run under a bounded
//! timeout rather than hanging indefinitely.

use serde::{Deserialize, Serialize};

/// Default overall request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

/// Default connect timeout in seconds.
const fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "geoenrich/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Overall per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TCP connect timeout, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// User-Agent header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_bounded() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.user_agent, "geoenrich/0.1");
    }
}
