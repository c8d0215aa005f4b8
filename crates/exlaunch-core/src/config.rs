//! Console connection configuration
//!
//! The console address comes from the environment and is read once, at the
//! process boundary, before any client is built.

use crate::error::{ExlaunchError, Result};

/// Environment variable holding the console host
pub const IP_VAR: &str = "IP";

/// Port the console's remote API listens on
pub const CONSOLE_PORT: u16 = 6969;

/// Where to reach the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Console host name or IP address
    pub host: String,
    /// TCP port (default: 6969)
    pub port: u16,
}

impl ConsoleConfig {
    /// Create config for a host on the default console port
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: CONSOLE_PORT,
        }
    }

    /// Read the console host from the `IP` environment variable
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// Missing and empty values are both rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(IP_VAR) {
            Some(host) if !host.is_empty() => Ok(Self::new(host)),
            _ => Err(ExlaunchError::MissingEnv(IP_VAR.to_string())),
        }
    }

    /// Override the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// `host:port` form for logging
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
