use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// TMDB v3 API key. When absent, upstream calls are sent without a key and
    /// TMDB's rejection payload is relayed to the caller.
    pub tmdb_api_key: Option<String>,
    pub tmdb_base_url: String,
    pub tmdb_timeout_secs: u64,
    /// Upper bound on concurrent per-film upstream calls within one request.
    pub tmdb_max_concurrent_requests: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "tmdb_api_key",
                &self.tmdb_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("tmdb_base_url", &self.tmdb_base_url)
            .field("tmdb_timeout_secs", &self.tmdb_timeout_secs)
            .field(
                "tmdb_max_concurrent_requests",
                &self.tmdb_max_concurrent_requests,
            )
            .finish()
    }
}
