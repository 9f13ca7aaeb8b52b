//! Web server configuration

use std::time::Duration;

/// Default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8080;

/// Default idle time after which a session is dropped
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(20 * 60);

/// Default number of sessions kept at once
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Web shell configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// Host or address to bind
    pub host: String,
    /// TCP port
    pub port: u16,
    /// Idle time after which a visitor's calculator is forgotten
    pub session_ttl: Duration,
    /// Upper bound on stored sessions
    pub max_sessions: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            session_ttl: DEFAULT_SESSION_TTL,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl WebConfig {
    /// Create a builder
    #[must_use]
    pub fn builder() -> WebConfigBuilder {
        WebConfigBuilder::default()
    }

    /// Returns `host:port` for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the URL a browser should open
    #[must_use]
    pub fn url(&self) -> String {
        format!("http://{}/", self.bind_address())
    }
}

/// Builder for `WebConfig`
#[derive(Debug, Clone, Default)]
pub struct WebConfigBuilder {
    config: WebConfig,
}

impl WebConfigBuilder {
    /// Set bind host
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set bind port
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set session idle TTL
    #[must_use]
    pub fn session_ttl(mut self, ttl: Duration) -> Self {
        self.config.session_ttl = ttl;
        self
    }

    /// Set the session capacity
    #[must_use]
    pub fn max_sessions(mut self, max_sessions: usize) -> Self {
        self.config.max_sessions = max_sessions;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> WebConfig {
        self.config
    }
}
