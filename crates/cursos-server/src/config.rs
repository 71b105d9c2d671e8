//! Server configuration from environment variables.
//!
//! - `CURSOS_HOST`: listen address (default: "0.0.0.0")
//! - `CURSOS_PORT`: listen port (default: "8000")

use crate::error::ApiError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Listen settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    ///
    /// Unset keys fall back to their defaults; a port that is not a valid
    /// `u16` is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("CURSOS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("CURSOS_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                ApiError::InternalError(format!("invalid CURSOS_PORT '{}': {}", raw, e))
            })?,
            None => DEFAULT_PORT,
        };
        Ok(ServerConfig { host, port })
    }

    /// The `host:port` string to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
