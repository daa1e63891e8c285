//! Fixed startup configuration.
//!
//! The service has no runtime configuration surface: the bind address and the
//! database file are decided here and read once by `main`.

/// Values the server needs before it can accept connections.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface the HTTP server binds to.
    pub host: String,
    pub port: u16,
    /// Path of the SQLite database file, created on first start.
    pub database_path: String,
    /// Upper bound for JSON request bodies, in bytes.
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            database_path: "checklist.sqlite".to_string(),
            json_limit: 1024 * 1024, // 1 MiB
        }
    }
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
