use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Server settings read from the environment (and `.env`, once loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Self {
            host,
            port,
            static_dir,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        self.addr_for_port(self.port)
    }

    /// Address tried when the configured port is already taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr, ServerError> {
        let port = self.port.checked_add(1).ok_or_else(|| {
            ServerError::Config(format!("no fallback port above {}", self.port))
        })?;
        self.addr_for_port(port)
    }

    fn addr_for_port(&self, port: u16) -> Result<SocketAddr, ServerError> {
        format!("{}:{}", self.host, port).parse().map_err(|e| {
            ServerError::Config(format!("invalid address {}:{}: {}", self.host, port, e))
        })
    }
}
