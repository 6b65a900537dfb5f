use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 8000)
    pub port: u16,
    /// Allow any origin, method and header (default: true)
    pub cors_enabled: bool,
    /// Count requests and serve /metrics (default: true)
    pub metrics_enabled: bool,
    /// Largest accepted request body in bytes (default: 32 MiB)
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_enabled: true,
            metrics_enabled: true,
            max_body_bytes: 32 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
